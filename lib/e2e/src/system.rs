use alloy::{
    network::{Ethereum, EthereumWallet},
    providers::{
        fillers::{
            BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill,
            NonceFiller, WalletFiller,
        },
        Identity, RootProvider,
    },
    transports::http::{reqwest::Url, Client, Http},
};
use eyre::Context;

/// Name of the environment variable holding the node's RPC endpoint.
pub const RPC_URL_ENV_VAR_NAME: &str = "RPC_URL";

/// Convenience type alias that represents an Ethereum wallet.
pub type Wallet = FillProvider<
    JoinFill<
        JoinFill<
            Identity,
            JoinFill<
                GasFiller,
                JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>,
            >,
        >,
        WalletFiller<EthereumWallet>,
    >,
    RootProvider<Http<Client>>,
    Http<Client>,
    Ethereum,
>;

/// Load the `name` environment variable.
fn env(name: &str) -> eyre::Result<String> {
    std::env::var(name).wrap_err(format!("failed to load {name}"))
}

/// Reads the node's RPC endpoint from [`RPC_URL_ENV_VAR_NAME`].
pub(crate) fn rpc_url() -> eyre::Result<Url> {
    let url = env(RPC_URL_ENV_VAR_NAME)?;
    url.parse().wrap_err(format!("failed to parse {url} into a URL"))
}
