//! Trait and implementation of the ERC-165 standard, as defined in the [ERC].
//!
//! [ERC]: https://eips.ethereum.org/EIPS/eip-165

use access_token_stylus_proc::interface_id;
use alloy_primitives::FixedBytes;

/// Interface of the ERC-165 standard, as defined in the [ERC].
///
/// Implementers can declare support of contract interfaces, which others can
/// query.
///
/// [ERC]: https://eips.ethereum.org/EIPS/eip-165
#[interface_id]
pub trait IErc165 {
    /// Returns true if this contract implements the interface defined by
    /// `interface_id`. See the corresponding [ERC] to learn more about how
    /// these ids are created.
    ///
    /// NOTE: Method [`IErc165::supports_interface`] should be reexported with
    /// `#[public]` macro manually, see the Example section.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `interface_id` - The interface identifier, as specified in the [ERC].
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// #[public]
    /// impl IErc165 for AccessTokenBase {
    ///     fn supports_interface(&self, interface_id: FixedBytes<4>) -> bool {
    ///         self.token.supports_interface(interface_id)
    ///     }
    /// }
    /// ```
    ///
    /// [ERC]: https://eips.ethereum.org/EIPS/eip-165#how-interfaces-are-identified
    fn supports_interface(&self, interface_id: FixedBytes<4>) -> bool;
}

#[cfg(test)]
mod tests {
    use alloy_primitives::FixedBytes;

    use super::IErc165;

    struct Dummy;

    impl IErc165 for Dummy {
        fn supports_interface(&self, interface_id: FixedBytes<4>) -> bool {
            <Self as IErc165>::interface_id() == interface_id
        }
    }

    #[test]
    fn interface_id() {
        let actual = <Dummy as IErc165>::interface_id();
        let expected: FixedBytes<4> = 0x01ffc9a7_u32.into();
        assert_eq!(actual, expected);
    }

    #[test]
    fn supports_own_interface() {
        assert!(Dummy.supports_interface(0x01ffc9a7_u32.into()));
        assert!(!Dummy.supports_interface(0xffffffff_u32.into()));
    }
}
