use std::str::FromStr;

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::{uint, Address, U256},
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use eyre::Context;
use once_cell::sync::Lazy;
use tokio::sync::{Mutex, MutexGuard};

use crate::{
    deploy::Deployer,
    system::{rpc_url, Wallet},
};

/// Prefunded key of the Nitro dev node.
const MASTER_PRIVATE_KEY: &str =
    "0xb6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";
const DEFAULT_FUNDING_ETH: U256 = uint!(100_000_000_000_000_000_U256);

/// Type that corresponds to a test account.
#[derive(Clone, Debug)]
pub struct Account {
    /// The account's local private key wrapper.
    pub signer: PrivateKeySigner,
    /// The account's wallet -- an `alloy` provider with a `WalletFiller`.
    pub wallet: Wallet,
}

impl Account {
    /// Create a new account with a default funding of [`DEFAULT_FUNDING_ETH`].
    ///
    /// # Errors
    ///
    /// May fail if `RPC_URL` is missing or if funding the newly created
    /// account fails.
    pub async fn new() -> eyre::Result<Self> {
        AccountFactory::create().await
    }

    /// Get a hex-encoded String representing this account's private key.
    #[must_use]
    pub fn pk(&self) -> String {
        alloy::hex::encode(self.signer.to_bytes())
    }

    /// Retrieve this account's address.
    #[must_use]
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// The rpc endpoint this account's provider is connect to.
    #[must_use]
    pub fn url(&self) -> &str {
        self.wallet.client().transport().url()
    }

    /// Create a smart contract deployer on behalf of this account.
    #[must_use]
    pub fn as_deployer(&self) -> Deployer {
        Deployer::new(self.url().to_string(), self.pk())
    }
}

/// Builds a wallet that signs with `signer` and talks to `url`.
pub(crate) fn wallet(signer: PrivateKeySigner, url: Url) -> Wallet {
    ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer))
        .on_http(url)
}

/// A unit struct used as a synchronization mechanism in
/// [`AccountFactory::lock`].
struct AccountFactory;

impl AccountFactory {
    /// Get access to the factory in a synchronized manner.
    async fn lock() -> MutexGuard<'static, Self> {
        // Accounts are funded from a single master wallet, so creation has to
        // be serialized or the master's nonce goes stale.
        static SYNC_ACCOUNT_FACTORY: Lazy<Mutex<AccountFactory>> =
            Lazy::new(|| Mutex::new(AccountFactory));

        SYNC_ACCOUNT_FACTORY.lock().await
    }

    /// Create new account and fund it from the master wallet.
    ///
    /// # Errors
    ///
    /// May fail if `RPC_URL` is missing or if funding the newly created
    /// account fails.
    async fn create() -> eyre::Result<Account> {
        let _lock = AccountFactory::lock().await;

        let signer = PrivateKeySigner::random();
        let account_address = signer.address();
        let rpc_url = rpc_url()?;

        let master = PrivateKeySigner::from_str(MASTER_PRIVATE_KEY)
            .wrap_err("failed to create master signer")?;
        let master_address = master.address();
        let master_wallet = wallet(master, rpc_url.clone());

        let tx = TransactionRequest::default()
            .with_from(master_address)
            .with_to(account_address)
            .with_value(DEFAULT_FUNDING_ETH);

        master_wallet
            .send_transaction(tx)
            .await?
            .watch()
            .await
            .wrap_err(format!("failed to fund account {account_address}"))?;

        let wallet = wallet(signer.clone(), rpc_url);
        Ok(Account { signer, wallet })
    }
}
