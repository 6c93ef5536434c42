//! One-shot initialization guard.
//!
//! Contracts deployed behind a proxy, or deployed by tooling that doesn't pass
//! constructor arguments, can't rely on `#[constructor]` to set up their
//! state. They expose an `initialize` function instead and protect it with
//! [`Initializable::initializer`], which succeeds exactly once.
//!
//! Functions that only make sense on an initialized contract should call
//! [`Initializable::when_initialized`] first.
use alloc::{vec, vec::Vec};

use access_token_stylus_proc::interface_id;
pub use sol::*;
use stylus_sdk::{
    call::MethodError, evm, prelude::*, storage::StorageBool,
};

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when the contract has been initialized.
        ///
        /// * `version` - Initialization version, always `1`.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event Initialized(uint64 version);
    }

    sol! {
        /// The contract is already initialized.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error InvalidInitialization();

        /// The operation requires an initialized contract.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error NotInitialized();
    }
}

/// An [`Initializable`] error.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The contract is already initialized.
    InvalidInitialization(InvalidInitialization),
    /// The operation requires an initialized contract.
    NotInitialized(NotInitialized),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// Version reported by the [`Initialized`] event.
pub const INITIAL_VERSION: u64 = 1;

/// State of an [`Initializable`] contract.
#[storage]
pub struct Initializable {
    /// Indicates whether the contract has been initialized.
    pub(crate) initialized: StorageBool,
}

/// Interface for an [`Initializable`] contract.
#[interface_id]
pub trait IInitializable {
    /// Returns true if the contract has been initialized.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    fn initialized(&self) -> bool;
}

#[public]
#[implements(IInitializable)]
impl Initializable {}

#[public]
impl IInitializable for Initializable {
    fn initialized(&self) -> bool {
        self.initialized.get()
    }
}

impl Initializable {
    /// Marks the contract as initialized.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidInitialization`] - If the contract has already been
    ///   initialized.
    ///
    /// # Events
    ///
    /// * [`Initialized`].
    pub fn initializer(&mut self) -> Result<(), Error> {
        if self.initialized.get() {
            return Err(Error::InvalidInitialization(InvalidInitialization {}));
        }
        self.initialized.set(true);
        evm::log(Initialized { version: INITIAL_VERSION });
        Ok(())
    }

    /// Helper to make a function callable only after initialization.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    ///
    /// # Errors
    ///
    /// * [`Error::NotInitialized`] - If the contract hasn't been initialized.
    pub fn when_initialized(&self) -> Result<(), Error> {
        if !self.initialized.get() {
            return Err(Error::NotInitialized(NotInitialized {}));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, FixedBytes};
    use motsu::prelude::*;
    use stylus_sdk::prelude::*;

    use super::*;

    unsafe impl TopLevelStorage for Initializable {}

    #[motsu::test]
    fn initializes_once(contract: Contract<Initializable>, alice: Address) {
        assert!(!contract.sender(alice).initialized());

        contract.sender(alice).initializer().motsu_unwrap();

        assert!(contract.sender(alice).initialized());
        contract.assert_emitted(&Initialized { version: INITIAL_VERSION });
    }

    #[motsu::test]
    fn initializer_reverts_when_already_initialized(
        contract: Contract<Initializable>,
        alice: Address,
        bob: Address,
    ) {
        contract.sender(alice).initializer().motsu_unwrap();

        let err = contract.sender(bob).initializer().motsu_unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInitialization(InvalidInitialization {})
        ));
        assert!(contract.sender(bob).initialized());
    }

    #[motsu::test]
    fn when_initialized_errors_before_initialization(
        contract: Contract<Initializable>,
        alice: Address,
    ) {
        let err = contract.sender(alice).when_initialized().motsu_unwrap_err();
        assert!(matches!(err, Error::NotInitialized(NotInitialized {})));
    }

    #[motsu::test]
    fn when_initialized_works_after_initialization(
        contract: Contract<Initializable>,
        alice: Address,
    ) {
        contract.sender(alice).initializer().motsu_unwrap();

        let result = contract.sender(alice).when_initialized();
        assert!(result.is_ok());
    }

    #[motsu::test]
    fn interface_id() {
        let actual = <Initializable as IInitializable>::interface_id();
        let expected: FixedBytes<4> = 0x158ef93e_u32.into();
        assert_eq!(actual, expected);
    }
}
