//! Procedural macro definitions used in `access-token-stylus` smart contracts.

extern crate proc_macro;
use proc_macro::TokenStream;

/// Shorthand to print nice errors.
///
/// Note that it's defined before the module declarations.
macro_rules! error {
    ($tokens:expr, $($msg:expr),+ $(,)?) => {{
        let error = syn::Error::new(syn::spanned::Spanned::span(&$tokens), format!($($msg),+));
        return error.to_compile_error().into();
    }};
    (@ $tokens:expr, $($msg:expr),+ $(,)?) => {{
        return Err(syn::Error::new(syn::spanned::Spanned::span(&$tokens), format!($($msg),+)))
    }};
}

mod interface_id;

/// Computes the interface id as an associated function `interface_id()` for
/// the trait.
///
/// The id is the XOR of the Solidity selectors of every function in the
/// trait, as specified in [ERC-165]. Function names are converted to
/// `camelCase`, unless overridden with `#[selector(name = "...")]`.
///
/// # Examples
///
/// ```rust,ignore
/// #[interface_id]
/// pub trait IAccessRegistry {
///     type Error: Into<alloc::vec::Vec<u8>>;
///
///     fn set_access(&mut self, accessor: Address) -> Result<(), Self::Error>;
///
///     fn can_access(&self, granter: Address, candidate: Address) -> bool;
///
///     fn accessor_of(&self, granter: Address) -> Address;
/// }
/// ```
///
/// [ERC-165]: https://eips.ethereum.org/EIPS/eip-165
#[proc_macro_attribute]
pub fn interface_id(attr: TokenStream, input: TokenStream) -> TokenStream {
    interface_id::interface_id(&attr, input)
}
