//! Flags and environment through to exit status, against a mock node.

mod common;

use clap::Parser;
use std::collections::HashMap;

use common::{start_mock_node, MockChain, MockNode, CONTRACT, TEST_PRIVATE_KEY};
use manga_nft_client::blockchain::ChainError;
use manga_nft_client::cli::{self, Cli, EXIT_FAILURE, EXIT_SUCCESS};
use manga_nft_client::commands::CommandError;
use manga_nft_client::config::ConfigError;

fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

async fn run_with(
    node: &MockNode,
    env: &HashMap<String, String>,
    args: &[&str],
) -> (Result<(), CommandError>, String) {
    let url = node.url.to_string();
    let mut argv = vec!["manga-nft", "--rpc-url", url.as_str()];
    argv.extend_from_slice(args);
    let parsed = Cli::try_parse_from(argv).unwrap();

    let mut out = Vec::new();
    let result = cli::run(parsed, |key| env.get(key).cloned(), &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_query_runs_without_signing_key() {
    let node = start_mock_node(MockChain {
        call_result: format!("0x{}", "0".repeat(256)),
        ..MockChain::default()
    })
    .await;
    let env = env_of(&[("UPLOADER_ADDR", CONTRACT)]);

    let (result, out) = run_with(&node, &env, &["query"]).await;

    assert_eq!(cli::exit_status(&result), EXIT_SUCCESS);
    assert!(out.contains("📊 Creator Data:"));
    assert!(out.contains("- tokensChargedThisMonth: 0"));
    assert_eq!(node.calls_to("eth_call").len(), 2);
}

#[tokio::test]
async fn test_missing_contract_address_exits_with_failure() {
    let node = start_mock_node(MockChain::default()).await;
    let env = env_of(&[("PRIVATE_KEY", TEST_PRIVATE_KEY)]);

    let (result, out) = run_with(&node, &env, &["upload"]).await;

    assert!(matches!(
        result,
        Err(CommandError::Config(ConfigError::MissingVar(ref var))) if var == "UPLOADER_ADDR"
    ));
    assert_eq!(cli::exit_status(&result), EXIT_FAILURE);
    assert!(out.is_empty());
    assert!(node.calls().is_empty());
}

#[tokio::test]
async fn test_publish_requires_creator_key() {
    let node = start_mock_node(MockChain::default()).await;
    // The platform key is present but publish signs with the creator's.
    let env = env_of(&[("MANGA_NFT_ADDRESS", CONTRACT), ("PRIVATE_KEY", TEST_PRIVATE_KEY)]);

    let (result, _) = run_with(&node, &env, &["publish"]).await;

    assert!(matches!(
        result,
        Err(CommandError::Chain(ChainError::MissingKey(ref var))) if var == "CREATOR_KEY"
    ));
    assert_eq!(cli::exit_status(&result), EXIT_FAILURE);
    assert!(node.calls().is_empty());
}

#[tokio::test]
async fn test_key_env_flag_selects_variable() {
    let node = start_mock_node(MockChain::default()).await;
    let env = env_of(&[("MANGA_NFT_ADDRESS", CONTRACT), ("PRIVATE_KEY", TEST_PRIVATE_KEY)]);

    let (result, out) = run_with(&node, &env, &["publish", "--key-env", "PRIVATE_KEY"]).await;

    assert_eq!(cli::exit_status(&result), EXIT_SUCCESS);
    assert!(out.contains("Transaction confirmed in block 16"));
    assert_eq!(node.calls_to("eth_sendRawTransaction").len(), 1);
}

#[tokio::test]
async fn test_mint_with_contract_flag() {
    let node = start_mock_node(MockChain::default()).await;
    let env = env_of(&[("PRIVATE_KEY", TEST_PRIVATE_KEY)]);

    let (result, out) = run_with(&node, &env, &["mint", "--token-id", "7", "--contract", CONTRACT]).await;

    assert_eq!(cli::exit_status(&result), EXIT_SUCCESS);
    assert!(out.contains("tokenId 7"));
}

#[tokio::test]
async fn test_unreachable_node_is_reported_as_rpc_failure() {
    let env = env_of(&[("RPC_URL", "http://127.0.0.1:1"), ("UPLOADER_ADDR", CONTRACT)]);
    let parsed = Cli::try_parse_from(["manga-nft", "query"]).unwrap();

    let mut out = Vec::new();
    let result = cli::run(parsed, |key| env.get(key).cloned(), &mut out).await;

    assert!(matches!(
        result,
        Err(CommandError::Chain(ChainError::Rpc(_) | ChainError::Timeout(_)))
    ));
    assert_eq!(cli::exit_status(&result), EXIT_FAILURE);
}
