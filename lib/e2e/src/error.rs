use alloy::{sol_types::SolError, transports::RpcError};

/// Extension trait for asserting a call reverted with a typed Solidity error.
pub trait Revert<E> {
    /// Checks that `Self` corresponds to the typed abi-encoded error
    /// `expected`.
    fn reverted_with(&self, expected: E) -> bool;
}

impl<E: SolError> Revert<E> for alloy::contract::Error {
    fn reverted_with(&self, expected: E) -> bool {
        let Self::TransportError(RpcError::ErrorResp(payload)) = self else {
            return false;
        };

        //  ErrorPayload {
        //      code: 3,
        //      message: "execution reverted",
        //      data: Some(RawValue("0x...")),
        //  }
        let Some(raw_value) = payload.data.as_ref() else {
            return false;
        };
        let actual = raw_value.get().trim_matches('"').trim_start_matches("0x");
        let expected = alloy::hex::encode(expected.abi_encode());
        expected == actual
    }
}

impl<E: SolError> Revert<E> for eyre::Report {
    fn reverted_with(&self, expected: E) -> bool {
        if let Some(err) = self.downcast_ref::<alloy::contract::Error>() {
            return err.reverted_with(expected);
        }

        // Errors wrapped by other layers only keep the revert data in their
        // debug output.
        let err_string = format!("{self:#?}");
        let expected = alloy::hex::encode(expected.abi_encode());
        err_string.contains(&expected)
    }
}
