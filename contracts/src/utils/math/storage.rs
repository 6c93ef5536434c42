//! Arithmetic on storage values that `stylus_sdk::storage` doesn't provide.
//!
//! The "checked" flavour panics with the given message on overflow, which
//! reverts the whole call. The "unchecked" flavour relies on an invariant of
//! the caller to rule overflow out.
use alloy_primitives::Uint;
use alloy_sol_types::sol_data::{IntBitCount, SupportedInt};
use stylus_sdk::storage::StorageUint;

/// Adds a value to a storage slot, panicking on overflow.
pub(crate) trait AddAssignChecked<T> {
    /// Adds `rhs` to `self`, panicking with `msg` on overflow.
    fn add_assign_checked(&mut self, rhs: T, msg: &str);
}

impl<const B: usize, const L: usize> AddAssignChecked<Uint<B, L>>
    for StorageUint<B, L>
where
    IntBitCount<B>: SupportedInt,
{
    fn add_assign_checked(&mut self, rhs: Uint<B, L>, msg: &str) {
        let sum = self.get().checked_add(rhs).expect(msg);
        self.set(sum);
    }
}

/// Adds a value to a storage slot, ignoring overflow.
pub(crate) trait AddAssignUnchecked<T> {
    /// Adds `rhs` to `self`, ignoring overflow.
    fn add_assign_unchecked(&mut self, rhs: T);
}

impl<const B: usize, const L: usize> AddAssignUnchecked<Uint<B, L>>
    for StorageUint<B, L>
where
    IntBitCount<B>: SupportedInt,
{
    fn add_assign_unchecked(&mut self, rhs: Uint<B, L>) {
        let sum = self.get() + rhs;
        self.set(sum);
    }
}

/// Subtracts a value from a storage slot, ignoring underflow.
pub(crate) trait SubAssignUnchecked<T> {
    /// Subtracts `rhs` from `self`, ignoring underflow.
    fn sub_assign_unchecked(&mut self, rhs: T);
}

impl<const B: usize, const L: usize> SubAssignUnchecked<Uint<B, L>>
    for StorageUint<B, L>
where
    IntBitCount<B>: SupportedInt,
{
    fn sub_assign_unchecked(&mut self, rhs: Uint<B, L>) {
        let difference = self.get() - rhs;
        self.set(difference);
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{uint, Address, U256};
    use motsu::prelude::*;
    use stylus_sdk::{prelude::*, storage::StorageU256};

    use super::{AddAssignChecked, AddAssignUnchecked, SubAssignUnchecked};

    #[storage]
    struct Counter {
        value: StorageU256,
    }

    unsafe impl TopLevelStorage for Counter {}

    #[public]
    impl Counter {}

    #[motsu::test]
    fn adds_and_subtracts(contract: Contract<Counter>, alice: Address) {
        let ten = uint!(10_U256);
        let three = uint!(3_U256);

        contract.sender(alice).value.add_assign_checked(ten, "overflow");
        contract.sender(alice).value.add_assign_unchecked(three);
        contract.sender(alice).value.sub_assign_unchecked(three);

        assert_eq!(ten, contract.sender(alice).value.get());
    }

    #[motsu::test]
    #[should_panic = "should not overflow"]
    fn checked_add_panics_on_overflow(
        contract: Contract<Counter>,
        alice: Address,
    ) {
        contract.sender(alice).value.set(U256::MAX);
        contract
            .sender(alice)
            .value
            .add_assign_checked(uint!(1_U256), "should not overflow");
    }
}
