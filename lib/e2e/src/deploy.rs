use std::{process::Command, str::FromStr};

use alloy::{
    primitives::{Address, TxHash},
    providers::Provider,
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use eyre::{Context, ContextCompat};
use regex::Regex;

use crate::account::wallet;

/// Result of a successful deployment.
#[derive(Debug)]
pub struct Deployed {
    /// Receipt of the deployment transaction.
    pub receipt: TransactionReceipt,
    /// Address of the deployed and activated contract.
    pub contract_address: Address,
}

/// A basic smart contract deployer.
pub struct Deployer {
    rpc_url: String,
    private_key: String,
}

impl Deployer {
    /// Creates a deployer that signs with `private_key` and talks to
    /// `rpc_url`.
    #[must_use]
    pub fn new(rpc_url: String, private_key: String) -> Self {
        Self { rpc_url, private_key }
    }

    /// Deploy and activate the contract implemented as `#[entrypoint]` in the
    /// current crate.
    /// Consumes currently configured deployer.
    ///
    /// # Errors
    ///
    /// May error if:
    ///
    /// - `cargo stylus deploy` can't be run or fails.
    /// - Its output doesn't contain a transaction hash and a contract address.
    /// - The deployment receipt can't be fetched.
    pub async fn deploy(self) -> eyre::Result<Deployed> {
        let output = Command::new("cargo")
            .args(["stylus", "deploy"])
            .args(["-e", &self.rpc_url])
            .args(["--private-key", &self.private_key])
            .args(["--no-verify"])
            .output()
            .context("failed to execute `cargo stylus deploy` command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(eyre::eyre!("deployment failed: {stderr}"));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let (tx_hash, contract_address) = parse_deployment(&stdout)?;

        let signer = self.private_key.parse::<PrivateKeySigner>()?;
        let url = Url::from_str(&self.rpc_url)
            .context(format!("invalid rpc url {}", self.rpc_url))?;
        let receipt = wallet(signer, url)
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| eyre::eyre!("RPC error: {e}"))?
            .context("transaction receipt not found")?;

        Ok(Deployed { receipt, contract_address })
    }
}

/// Extracts the deployment transaction hash and the contract address from
/// the output of `cargo stylus deploy`.
fn parse_deployment(output: &str) -> eyre::Result<(TxHash, Address)> {
    // 0x followed by 64 hex characters.
    let tx_hash_regex = Regex::new(r"0x[a-fA-F0-9]{64}")
        .context("failed to create tx hash regex")?;
    // `cargo stylus deploy` colors the address with ANSI escape codes.
    let contract_addr_regex = Regex::new(
        r"deployed code at address:\s*(?:\x1B\[[0-9;]*[a-zA-Z])*(0x[a-fA-F0-9]{40})",
    )
    .context("failed to create contract addr regex")?;

    let tx_hash = tx_hash_regex
        .find(output)
        .context(format!("no transaction hash found in output {output}"))?
        .as_str();
    let tx_hash = TxHash::from_str(tx_hash)
        .context("failed to parse transaction hash")?;

    let contract_addr = contract_addr_regex
        .captures(output)
        .and_then(|cap| cap.get(1))
        .context(format!("no contract address found in output {output}"))?
        .as_str();
    let contract_address = Address::from_str(contract_addr).context(format!(
        "failed to parse contract address from string: {contract_addr}"
    ))?;

    Ok((tx_hash, contract_address))
}
