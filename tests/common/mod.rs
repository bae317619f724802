//! Shared utilities for integration tests: a mock JSON-RPC node.
//!
//! The node answers every HTTP request with one JSON-RPC response and closes
//! the connection. Behaviour is driven by a [`MockChain`] and every call is
//! recorded so tests can assert on what was sent.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use url::Url;

use manga_nft_client::config::ChainConfig;

pub const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_SENDER: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";
pub const CONTRACT: &str = "0x5fbdb2315678afecb367f032d93f642f64180aa3";
pub const TX_HASH: &str = "0x1111111111111111111111111111111111111111111111111111111111111111";
pub const BLOCK_HASH: &str = "0x2222222222222222222222222222222222222222222222222222222222222222";

/// One recorded JSON-RPC call.
#[derive(Debug, Clone)]
pub struct RpcCall {
    pub method: String,
    pub params: Value,
}

/// Scripted chain state served by the mock node.
#[derive(Debug, Clone)]
pub struct MockChain {
    pub block_number: u64,
    /// Block the transaction receipt reports.
    pub receipt_block: u64,
    /// `None` keeps the transaction pending forever.
    pub receipt_status: Option<bool>,
    /// Raw JSON logs placed in the receipt.
    pub receipt_logs: Vec<Value>,
    /// Hex return data for `eth_call`.
    pub call_result: String,
    /// Error message returned by `eth_call`.
    pub call_error: Option<String>,
    /// Error message returned by `eth_estimateGas`.
    pub estimate_error: Option<String>,
}

impl Default for MockChain {
    fn default() -> Self {
        Self {
            block_number: 16,
            receipt_block: 16,
            receipt_status: Some(true),
            receipt_logs: Vec::new(),
            call_result: "0x".to_string(),
            call_error: None,
            estimate_error: None,
        }
    }
}

impl MockChain {
    fn handle(&self, method: &str) -> Result<Value, String> {
        match method {
            "eth_chainId" => Ok(json!("0x7a69")),
            "eth_getTransactionCount" => Ok(json!("0x0")),
            "eth_gasPrice" => Ok(json!("0x3b9aca00")),
            "eth_blockNumber" => Ok(json!(format!("0x{:x}", self.block_number))),
            "eth_estimateGas" => match &self.estimate_error {
                Some(message) => Err(message.clone()),
                None => Ok(json!("0x186a0")),
            },
            "eth_sendRawTransaction" => Ok(json!(TX_HASH)),
            "eth_getTransactionReceipt" => Ok(match self.receipt_status {
                Some(status) => self.receipt(status),
                None => Value::Null,
            }),
            "eth_call" => match &self.call_error {
                Some(message) => Err(message.clone()),
                None => Ok(json!(self.call_result)),
            },
            other => Err(format!("method {other} not supported by mock node")),
        }
    }

    fn receipt(&self, status: bool) -> Value {
        json!({
            "type": "0x0",
            "status": if status { "0x1" } else { "0x0" },
            "cumulativeGasUsed": "0x186a0",
            "logs": self.receipt_logs,
            "logsBloom": format!("0x{}", "0".repeat(512)),
            "transactionHash": TX_HASH,
            "transactionIndex": "0x0",
            "blockHash": BLOCK_HASH,
            "blockNumber": format!("0x{:x}", self.receipt_block),
            "gasUsed": "0x186a0",
            "effectiveGasPrice": "0x3b9aca00",
            "from": TEST_SENDER,
            "to": CONTRACT,
            "contractAddress": null
        })
    }
}

/// A running mock node.
pub struct MockNode {
    pub url: Url,
    calls: Arc<Mutex<Vec<RpcCall>>>,
}

impl MockNode {
    pub fn calls(&self) -> Vec<RpcCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, method: &str) -> Vec<RpcCall> {
        self.calls().into_iter().filter(|c| c.method == method).collect()
    }
}

/// Start a mock node on an ephemeral loopback port.
pub async fn start_mock_node(chain: MockChain) -> MockNode {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let calls = Arc::new(Mutex::new(Vec::new()));
    let chain = Arc::new(chain);

    let recorded = calls.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let chain = chain.clone();
                    let recorded = recorded.clone();
                    tokio::spawn(async move {
                        serve_connection(socket, &chain, &recorded).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockNode {
        url: format!("http://{}", addr).parse().unwrap(),
        calls,
    }
}

async fn serve_connection(mut socket: TcpStream, chain: &MockChain, calls: &Mutex<Vec<RpcCall>>) {
    let Some(body) = read_request(&mut socket).await else {
        return;
    };
    let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let response = match request {
        Value::Array(batch) => Value::Array(
            batch
                .iter()
                .map(|single| respond(single, chain, calls))
                .collect(),
        ),
        single => respond(&single, chain, calls),
    };

    let payload = response.to_string();
    let http = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        payload.len(),
        payload
    );
    let _ = socket.write_all(http.as_bytes()).await;
    let _ = socket.shutdown().await;
}

fn respond(request: &Value, chain: &MockChain, calls: &Mutex<Vec<RpcCall>>) -> Value {
    let method = request["method"].as_str().unwrap_or_default().to_string();
    let params = request["params"].clone();
    let id = request["id"].clone();

    calls.lock().unwrap().push(RpcCall {
        method: method.clone(),
        params,
    });

    match chain.handle(&method) {
        Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
        Err(message) => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32000, "message": message }
        }),
    }
}

/// Read one HTTP request and return its body.
async fn read_request(socket: &mut TcpStream) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Some(buf[header_end..header_end + content_length].to_vec())
}

/// Chain settings tuned for fast tests.
pub fn fast_chain_config() -> ChainConfig {
    ChainConfig {
        rpc_url: None,
        rpc_timeout_secs: 5,
        confirmation_timeout_secs: 5,
        confirmation_blocks: 1,
        poll_interval_ms: 50,
    }
}

/// Encode a log the way a node reports it inside a receipt.
pub fn receipt_log(address: &str, data: &alloy::primitives::LogData, log_index: u64) -> Value {
    json!({
        "address": address,
        "topics": data.topics().iter().map(|t| t.to_string()).collect::<Vec<_>>(),
        "data": data.data.to_string(),
        "blockHash": BLOCK_HASH,
        "blockNumber": "0x10",
        "transactionHash": TX_HASH,
        "transactionIndex": "0x0",
        "logIndex": format!("0x{:x}", log_index),
        "removed": false
    })
}
