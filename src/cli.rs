//! Command-line surface of `manga-nft`: argument parsing, configuration
//! resolution and dispatch to the command modules.
//!
//! The environment is passed in as a lookup function so the whole path,
//! from flags to exit status, can run against a mock node.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::commands::batch_upload::BatchUploadArgs;
use crate::commands::mint::MintArgs;
use crate::commands::publish::PublishArgs;
use crate::commands::query::QueryArgs;
use crate::commands::upload::UploadArgs;
use crate::commands::{self, read_only_client, signing_client, CommandError};
use crate::config::{
    load_config, ClientConfig, ContractKind, Overrides, CREATOR_KEY_ENV, PRIVATE_KEY_ENV,
};
use crate::contracts::{MangaNft, MonthlyReport};

/// Exit status for a successful run.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status for any failure, including bad arguments.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Parser)]
#[command(name = "manga-nft", version)]
#[command(about = "Mint chapters and upload monthly reports to the manga NFT contracts", long_about = None)]
pub struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// JSON-RPC endpoint; overrides RPC_URL.
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Contract address for this command; overrides MANGA_NFT_ADDRESS or UPLOADER_ADDR.
    #[arg(long, global = true)]
    contract: Option<String>,

    /// Environment variable holding the signing key.
    #[arg(long, global = true)]
    key_env: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Free-mint a token (freeMint)
    Mint(MintArgs),
    /// Publish a chapter and print its events (createChapter)
    Publish(PublishArgs),
    /// Upload one creator and one reader record
    Upload(UploadArgs),
    /// Upload creator and reader records in two batch transactions
    BatchUpload(BatchUploadArgs),
    /// Read creator and reader records; no signing key needed
    Query(QueryArgs),
}

impl Commands {
    fn contract_kind(&self) -> ContractKind {
        match self {
            Commands::Mint(_) | Commands::Publish(_) => ContractKind::MangaNft,
            Commands::Upload(_) | Commands::BatchUpload(_) | Commands::Query(_) => {
                ContractKind::MonthlyReport
            }
        }
    }

    fn default_key_env(&self) -> &'static str {
        match self {
            Commands::Publish(_) => CREATOR_KEY_ENV,
            _ => PRIVATE_KEY_ENV,
        }
    }

    fn failure_prefix(&self) -> &'static str {
        match self {
            Commands::Mint(_) => "Mint failed",
            Commands::Publish(_) => "Publish failed",
            Commands::Upload(_) => "Upload failed",
            Commands::BatchUpload(_) => "Batch upload failed",
            Commands::Query(_) => "Query failed",
        }
    }
}

impl Cli {
    /// Prefix for the diagnostic printed when this command fails.
    pub fn failure_prefix(&self) -> &'static str {
        self.command.failure_prefix()
    }
}

/// Exit status for a finished run.
pub fn exit_status<T>(result: &Result<T, CommandError>) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}

/// Exit status for an argument error. `--help` and `--version` are reported
/// through the same error path and count as success.
pub fn usage_exit_status(error: &clap::Error) -> u8 {
    if error.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

/// Resolve configuration and run the selected command, writing its report
/// to `out`.
///
/// Every required value (endpoint, contract address, signing key) is
/// resolved before the first network call.
pub async fn run<E, W>(cli: Cli, env: E, out: &mut W) -> Result<(), CommandError>
where
    E: Fn(&str) -> Option<String>,
    W: Write,
{
    let kind = cli.command.contract_kind();
    let overrides = Overrides {
        rpc_url: cli.rpc_url,
        contract: cli.contract.map(|address| (kind, address)),
    };
    let config = load_config(cli.config.as_deref(), &overrides, &env)?;
    let key_env = cli
        .key_env
        .unwrap_or_else(|| cli.command.default_key_env().to_string());

    tracing::debug!(command = cli.command.failure_prefix(), ?kind, "Configuration loaded");

    match cli.command {
        Commands::Mint(args) => {
            let nft = manga_nft(&config, &key_env, &env)?;
            commands::mint::run(&nft, &args, out).await?;
        }
        Commands::Publish(args) => {
            let metadata = args.load_metadata()?;
            let nft = manga_nft(&config, &key_env, &env)?;
            commands::publish::run(&nft, &metadata, out).await?;
        }
        Commands::Upload(args) => {
            let report = monthly_report(&config, Some((key_env.as_str(), &env)))?;
            commands::upload::run(&report, &args, out).await?;
        }
        Commands::BatchUpload(args) => {
            let data = args.load_data()?;
            let report = monthly_report(&config, Some((key_env.as_str(), &env)))?;
            commands::batch_upload::run(&report, args.month, data, out).await?;
        }
        Commands::Query(args) => {
            let report = monthly_report::<E>(&config, None)?;
            commands::query::run(&report, &args, out).await?;
        }
    }

    Ok(())
}

fn manga_nft<E>(config: &ClientConfig, key_env: &str, env: &E) -> Result<MangaNft, CommandError>
where
    E: Fn(&str) -> Option<String>,
{
    let address = config.contract_address(ContractKind::MangaNft)?;
    let client = signing_client(config, key_env, env)?;
    Ok(MangaNft::new(client, address))
}

/// `signer` is the key variable and lookup; `None` builds a read-only binding.
fn monthly_report<E>(config: &ClientConfig, signer: Option<(&str, &E)>) -> Result<MonthlyReport, CommandError>
where
    E: Fn(&str) -> Option<String>,
{
    let address = config.contract_address(ContractKind::MonthlyReport)?;
    let client = match signer {
        Some((key_env, env)) => signing_client(config, key_env, env)?,
        None => read_only_client(config)?,
    };
    Ok(MonthlyReport::new(client, address))
}
