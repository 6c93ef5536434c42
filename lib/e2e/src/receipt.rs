use alloy::{network::ReceiptResponse, rpc::types::TransactionReceipt};

/// Extension trait for inspecting the outcome of a mined transaction.
pub trait ReceiptExt {
    /// Returns `true` if the transaction was mined without reverting.
    fn succeeded(&self) -> bool;

    /// Returns the number of logs the transaction emitted.
    fn log_count(&self) -> usize;
}

impl ReceiptExt for TransactionReceipt {
    fn succeeded(&self) -> bool {
        self.status()
    }

    fn log_count(&self) -> usize {
        self.inner.logs().len()
    }
}
