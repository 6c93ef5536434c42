//! Contract module which lets every account hand its access over to exactly
//! one other account, its *accessor*.
//!
//! An account that never granted access is its own accessor. Once it calls
//! [`AccessRegistry::set_access`], the recorded accessor is the only account
//! that passes [`AccessRegistry::can_access`] for it, the granter included.
//! Granting again overwrites the previous accessor, and granting to oneself
//! takes the access back. There is no way to clear a grant.
//!
//! Delegation is not transitive: if Alice grants Bob and Bob grants Charlie,
//! Charlie has no access to Alice.
//!
//! This module is used through composition. It makes available the
//! [`AccessRegistry::only_accessor`] function, which can be called to restrict
//! operations to the accessor of a given account.
use alloc::{vec, vec::Vec};

use access_token_stylus_proc::interface_id;
use alloy_primitives::{Address, FixedBytes};
pub use sol::*;
use stylus_sdk::{
    call::MethodError,
    evm, msg,
    prelude::*,
    storage::{StorageAddress, StorageMap},
};

use crate::utils::introspection::erc165::IErc165;

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when `granter` hands its access over to `new_accessor`.
        ///
        /// * `granter` - Account whose access is delegated.
        /// * `previous_accessor` - Previously recorded accessor, or
        ///   [`Address::ZERO`] on the first grant.
        /// * `new_accessor` - Account that is now the accessor.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event AccessSet(
            address indexed granter,
            address indexed previous_accessor,
            address indexed new_accessor
        );
    }

    sol! {
        /// The `account` is not the accessor of `granter`.
        ///
        /// * `granter` - Account whose access was required.
        /// * `account` - Account that was found to not be authorized.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error AccessRegistryUnauthorizedAccount(address granter, address account);
        /// The granter is not a valid account (eg. [`Address::ZERO`]).
        ///
        /// * `granter` - Account that tried to grant access.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error AccessRegistryInvalidGranter(address granter);
        /// The accessor is not a valid account (eg. [`Address::ZERO`]).
        ///
        /// * `accessor` - Account that can't be made an accessor.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error AccessRegistryInvalidAccessor(address accessor);
    }
}

/// An error that occurred in the implementation of an [`AccessRegistry`]
/// contract.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The caller is not the accessor of the granter.
    UnauthorizedAccount(AccessRegistryUnauthorizedAccount),
    /// The granter is not a valid account.
    InvalidGranter(AccessRegistryInvalidGranter),
    /// The accessor is not a valid account.
    InvalidAccessor(AccessRegistryInvalidAccessor),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of an [`AccessRegistry`] contract.
#[storage]
pub struct AccessRegistry {
    /// Maps granters to their current accessor. [`Address::ZERO`] means no
    /// grant was recorded.
    pub(crate) accessors: StorageMap<Address, StorageAddress>,
}

/// Interface for an [`AccessRegistry`] contract.
#[interface_id]
pub trait IAccessRegistry {
    /// The error type associated to the trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Makes `accessor` the only account allowed to act as the caller.
    /// Overwrites any accessor the caller granted before.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `accessor` - Account that receives the caller's access.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidAccessor`] - If `accessor` is [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`AccessSet`].
    fn set_access(&mut self, accessor: Address) -> Result<(), Self::Error>;

    /// Returns true if `candidate` may act as `granter`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `granter` - Account whose access is checked.
    /// * `candidate` - Account trying to act as `granter`.
    #[must_use]
    fn can_access(&self, granter: Address, candidate: Address) -> bool;

    /// Returns the accessor recorded for `granter`, or [`Address::ZERO`] if
    /// `granter` never granted access.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `granter` - Account to look up.
    #[must_use]
    fn accessor_of(&self, granter: Address) -> Address;
}

#[public]
#[implements(IAccessRegistry<Error = Error>, IErc165)]
impl AccessRegistry {}

#[public]
impl IAccessRegistry for AccessRegistry {
    type Error = Error;

    fn set_access(&mut self, accessor: Address) -> Result<(), Self::Error> {
        self._set_access(msg::sender(), accessor)
    }

    fn can_access(&self, granter: Address, candidate: Address) -> bool {
        self.can_access(granter, candidate)
    }

    fn accessor_of(&self, granter: Address) -> Address {
        self.accessor_of(granter)
    }
}

impl AccessRegistry {
    /// Returns true if `candidate` may act as `granter`.
    ///
    /// With no grant recorded, only `granter` itself has access. Otherwise
    /// only the recorded accessor has. [`Address::ZERO`] never has access and
    /// can't be accessed.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `granter` - Account whose access is checked.
    /// * `candidate` - Account trying to act as `granter`.
    #[must_use]
    pub fn can_access(&self, granter: Address, candidate: Address) -> bool {
        if granter.is_zero() || candidate.is_zero() {
            return false;
        }

        match self.accessor_of(granter) {
            accessor if accessor.is_zero() => candidate == granter,
            accessor => candidate == accessor,
        }
    }

    /// Returns the accessor recorded for `granter`, or [`Address::ZERO`].
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `granter` - Account to look up.
    #[must_use]
    pub fn accessor_of(&self, granter: Address) -> Address {
        self.accessors.get(granter)
    }

    /// Checks if the [`msg::sender`] may act as `granter`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `granter` - Account whose access is required.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If the caller can't access
    ///   `granter`.
    pub fn only_accessor(&self, granter: Address) -> Result<(), Error> {
        let account = msg::sender();
        if !self.can_access(granter, account) {
            return Err(Error::UnauthorizedAccount(
                AccessRegistryUnauthorizedAccount { granter, account },
            ));
        }

        Ok(())
    }

    /// Records `accessor` as the only account allowed to act as `granter`.
    /// Internal function without access restriction.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `granter` - Account whose access is delegated.
    /// * `accessor` - Account that receives the access.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidGranter`] - If `granter` is [`Address::ZERO`].
    /// * [`Error::InvalidAccessor`] - If `accessor` is [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`AccessSet`].
    pub fn _set_access(
        &mut self,
        granter: Address,
        accessor: Address,
    ) -> Result<(), Error> {
        if granter.is_zero() {
            return Err(Error::InvalidGranter(AccessRegistryInvalidGranter {
                granter,
            }));
        }
        if accessor.is_zero() {
            return Err(Error::InvalidAccessor(
                AccessRegistryInvalidAccessor { accessor },
            ));
        }

        let previous_accessor = self.accessors.get(granter);
        self.accessors.setter(granter).set(accessor);
        evm::log(AccessSet {
            granter,
            previous_accessor,
            new_accessor: accessor,
        });

        Ok(())
    }
}

#[public]
impl IErc165 for AccessRegistry {
    fn supports_interface(&self, interface_id: FixedBytes<4>) -> bool {
        <Self as IAccessRegistry>::interface_id() == interface_id
            || <Self as IErc165>::interface_id() == interface_id
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, FixedBytes};
    use motsu::prelude::*;
    use proptest::{prop_assert, prop_assert_eq, prop_assume, proptest};
    use stylus_sdk::prelude::*;

    use super::*;

    unsafe impl TopLevelStorage for AccessRegistry {}

    #[motsu::test]
    fn grants_self_access_by_default(
        contract: Contract<AccessRegistry>,
        alice: Address,
        bob: Address,
    ) {
        assert_eq!(Address::ZERO, contract.sender(alice).accessor_of(alice));
        assert!(contract.sender(alice).can_access(alice, alice));
        assert!(!contract.sender(alice).can_access(alice, bob));
    }

    #[motsu::test]
    fn sets_access(
        contract: Contract<AccessRegistry>,
        alice: Address,
        bob: Address,
        charlie: Address,
    ) {
        contract.sender(alice).set_access(bob).motsu_unwrap();

        assert_eq!(bob, contract.sender(alice).accessor_of(alice));
        assert!(contract.sender(alice).can_access(alice, bob));
        assert!(!contract.sender(alice).can_access(alice, charlie));

        contract.assert_emitted(&AccessSet {
            granter: alice,
            previous_accessor: Address::ZERO,
            new_accessor: bob,
        });
    }

    #[motsu::test]
    fn granting_self_keeps_others_out(
        contract: Contract<AccessRegistry>,
        alice: Address,
        bob: Address,
    ) {
        contract.sender(alice).set_access(alice).motsu_unwrap();

        assert!(contract.sender(alice).can_access(alice, alice));
        assert!(!contract.sender(alice).can_access(alice, bob));
    }

    #[motsu::test]
    fn granting_other_hands_access_over(
        contract: Contract<AccessRegistry>,
        alice: Address,
        bob: Address,
    ) {
        contract.sender(alice).set_access(bob).motsu_unwrap();

        assert!(contract.sender(alice).can_access(alice, bob));
        assert!(!contract.sender(alice).can_access(alice, alice));
    }

    #[motsu::test]
    fn overwrites_previous_accessor(
        contract: Contract<AccessRegistry>,
        alice: Address,
        bob: Address,
        charlie: Address,
    ) {
        contract.sender(alice).set_access(bob).motsu_unwrap();
        contract.sender(alice).set_access(charlie).motsu_unwrap();

        assert!(!contract.sender(alice).can_access(alice, bob));
        assert!(contract.sender(alice).can_access(alice, charlie));

        contract.assert_emitted(&AccessSet {
            granter: alice,
            previous_accessor: bob,
            new_accessor: charlie,
        });
    }

    #[motsu::test]
    fn takes_access_back(
        contract: Contract<AccessRegistry>,
        alice: Address,
        bob: Address,
    ) {
        contract.sender(alice).set_access(bob).motsu_unwrap();
        contract.sender(alice).set_access(alice).motsu_unwrap();

        assert!(contract.sender(alice).can_access(alice, alice));
        assert!(!contract.sender(alice).can_access(alice, bob));
    }

    #[motsu::test]
    fn does_not_chain_delegation(
        contract: Contract<AccessRegistry>,
        alice: Address,
        bob: Address,
        charlie: Address,
    ) {
        contract.sender(alice).set_access(bob).motsu_unwrap();
        contract.sender(bob).set_access(charlie).motsu_unwrap();

        assert!(contract.sender(alice).can_access(bob, charlie));
        assert!(!contract.sender(alice).can_access(alice, charlie));
    }

    #[motsu::test]
    fn keeps_grants_per_granter(
        contract: Contract<AccessRegistry>,
        alice: Address,
        bob: Address,
        charlie: Address,
    ) {
        contract.sender(alice).set_access(charlie).motsu_unwrap();

        assert!(contract.sender(alice).can_access(bob, bob));
        assert!(!contract.sender(alice).can_access(bob, charlie));
    }

    #[motsu::test]
    fn set_access_reverts_when_invalid_accessor(
        contract: Contract<AccessRegistry>,
        alice: Address,
        bob: Address,
    ) {
        contract.sender(alice).set_access(bob).motsu_unwrap();

        let err = contract
            .sender(alice)
            .set_access(Address::ZERO)
            .motsu_expect_err("should revert");
        assert!(matches!(
            err,
            Error::InvalidAccessor(AccessRegistryInvalidAccessor { accessor })
                if accessor.is_zero()
        ));

        assert_eq!(bob, contract.sender(alice).accessor_of(alice));
    }

    #[motsu::test]
    fn internal_set_access_reverts_when_invalid_granter(
        contract: Contract<AccessRegistry>,
        alice: Address,
    ) {
        let err = contract
            .sender(alice)
            ._set_access(Address::ZERO, alice)
            .motsu_unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGranter(AccessRegistryInvalidGranter { granter })
                if granter.is_zero()
        ));
    }

    #[motsu::test]
    fn zero_address_never_has_access(
        contract: Contract<AccessRegistry>,
        alice: Address,
    ) {
        assert!(!contract.sender(alice).can_access(Address::ZERO, Address::ZERO));
        assert!(!contract.sender(alice).can_access(alice, Address::ZERO));
        assert!(!contract.sender(alice).can_access(Address::ZERO, alice));
    }

    #[motsu::test]
    fn only_accessor_passes_for_accessor(
        contract: Contract<AccessRegistry>,
        alice: Address,
        bob: Address,
    ) {
        contract.sender(alice).set_access(bob).motsu_unwrap();

        contract
            .sender(bob)
            .only_accessor(alice)
            .motsu_expect("accessor should pass");
    }

    #[motsu::test]
    fn only_accessor_reverts_for_others(
        contract: Contract<AccessRegistry>,
        alice: Address,
        bob: Address,
    ) {
        contract.sender(alice).set_access(bob).motsu_unwrap();

        let err = contract.sender(alice).only_accessor(alice).motsu_unwrap_err();
        assert!(matches!(
            err,
            Error::UnauthorizedAccount(AccessRegistryUnauthorizedAccount {
                granter,
                account,
            }) if granter == alice && account == alice
        ));
    }

    #[motsu::test]
    fn interface_id() {
        let actual = <AccessRegistry as IAccessRegistry>::interface_id();
        let expected: FixedBytes<4> = 0xa82faf76_u32.into();
        assert_eq!(actual, expected);
    }

    #[motsu::test]
    fn supports_interface(contract: Contract<AccessRegistry>, alice: Address) {
        assert!(contract.sender(alice).supports_interface(
            <AccessRegistry as IAccessRegistry>::interface_id()
        ));
        assert!(contract
            .sender(alice)
            .supports_interface(<AccessRegistry as IErc165>::interface_id()));

        let fake_interface_id: FixedBytes<4> = 0x12345678_u32.into();
        assert!(!contract.sender(alice).supports_interface(fake_interface_id));
    }

    // exactly one non-zero account passes `can_access` for any granter.
    #[test]
    fn prop_single_accessor() {
        proptest!(|(granter: Address, accessors: Vec<Address>, probes: Vec<Address>)| {
            prop_assume!(!granter.is_zero());
            let contract = Contract::<AccessRegistry>::default();

            let mut recorded = Address::ZERO;
            for accessor in accessors.iter().filter(|a| !a.is_zero()) {
                contract.sender(granter).set_access(*accessor).motsu_unwrap();
                recorded = *accessor;
            }
            let expected = if recorded.is_zero() { granter } else { recorded };

            prop_assert_eq!(contract.sender(granter).accessor_of(granter), recorded);
            prop_assert!(contract.sender(granter).can_access(granter, expected));
            for probe in probes.iter().filter(|p| **p != expected) {
                prop_assert!(!contract.sender(granter).can_access(granter, *probe));
            }
        });
    }

    // a grant never leaks to other granters.
    #[test]
    fn prop_grants_are_isolated() {
        proptest!(|(alice: Address, bob: Address, accessor: Address)| {
            prop_assume!(!alice.is_zero() && !bob.is_zero() && !accessor.is_zero());
            prop_assume!(alice != bob && accessor != bob);
            let contract = Contract::<AccessRegistry>::default();

            contract.sender(alice).set_access(accessor).motsu_unwrap();

            prop_assert!(contract.sender(bob).can_access(bob, bob));
            prop_assert!(!contract.sender(bob).can_access(bob, accessor));
            prop_assert_eq!(contract.sender(bob).accessor_of(bob), Address::ZERO);
        });
    }
}
