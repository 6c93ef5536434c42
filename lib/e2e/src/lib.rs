#![doc = include_str!("../README.md")]
mod account;
mod deploy;
mod error;
mod event;
mod receipt;
mod system;

pub use account::Account;
pub use deploy::{Deployed, Deployer};
pub use e2e_proc::test;
pub use error::Revert;
pub use event::EventExt;
pub use receipt::ReceiptExt;
pub use system::{Wallet, RPC_URL_ENV_VAR_NAME};

/// Sends a transaction built by a contract call and returns the pending
/// transaction.
///
/// ```rust,ignore
/// let err = send!(contract.setAccess(Address::ZERO))
///     .expect_err("should not accept the zero address");
/// ```
#[macro_export]
macro_rules! send {
    ($e:expr) => {
        $e.send().await
    };
}

/// Sends a transaction and waits until it's included in a block, returning
/// its hash.
#[macro_export]
macro_rules! watch {
    ($e:expr) => {
        $crate::send!($e)?.watch().await
    };
}

/// Sends a transaction and waits for its
/// [`alloy::rpc::types::TransactionReceipt`].
#[macro_export]
macro_rules! receipt {
    ($e:expr) => {
        $crate::send!($e)?.get_receipt().await
    };
}
