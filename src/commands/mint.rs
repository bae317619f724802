//! `mint`: free-mint a token to a recipient.

use alloy::primitives::{Address, U256};
use clap::Args;
use std::io::Write;

use crate::blockchain::Receipt;
use crate::commands::{fixtures, CommandError};
use crate::contracts::MangaNft;

#[derive(Debug, Clone, Args)]
pub struct MintArgs {
    /// Recipient of the token.
    #[arg(long, default_value = fixtures::MINT_RECIPIENT)]
    pub to: Address,

    /// Token id, decimal or 0x-prefixed hex.
    #[arg(long, default_value = fixtures::MINT_TOKEN_ID)]
    pub token_id: U256,
}

pub async fn run<W: Write>(nft: &MangaNft, args: &MintArgs, out: &mut W) -> Result<Receipt, CommandError> {
    writeln!(out, "Minting tokenId = {} to {}...", args.token_id, args.to)?;

    let pending = nft.free_mint(args.to, args.token_id).await?;
    let receipt = nft.confirm(pending).await?;

    writeln!(
        out,
        "✅ Mint succeeded: tokenId {} (block {}, gas used {}, tx {})",
        args.token_id, receipt.block_number, receipt.gas_used, receipt.tx_hash
    )?;
    Ok(receipt)
}
