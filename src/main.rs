//! `manga-nft`: mint, publish, upload and query against the deployed
//! manga NFT and monthly report contracts.
//!
//! ```text
//! .env + environment + flags → ClientConfig
//!     → ChainClient (read-only, or signing with the command's key)
//!     → contract binding
//!     → one or two sequential calls → report on stdout
//! ```
//!
//! Exit status is 0 on success and 1 on any failure.

use clap::Parser;
use std::process::ExitCode;

use manga_nft_client::cli::{self, Cli};
use manga_nft_client::observability::logging::{init_logging, DEFAULT_FILTER};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the process environment may be complete.
    dotenvy::dotenv().ok();
    init_logging(DEFAULT_FILTER);

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(cli::usage_exit_status(&e));
        }
    };
    let prefix = args.failure_prefix();

    let result = cli::run(args, |key| std::env::var(key).ok(), &mut std::io::stdout()).await;
    if let Err(e) = &result {
        eprintln!("❌ {}: {}", prefix, e);
    }
    ExitCode::from(cli::exit_status(&result))
}
