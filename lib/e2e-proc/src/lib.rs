//! Procedural macros of the `e2e` crate.
use proc_macro::TokenStream;

mod test;

/// Defines an end-to-end Stylus contract test that creates and funds an
/// account for each of its arguments.
///
/// Every argument type must provide an `async fn new() -> eyre::Result<Self>`
/// constructor, like `e2e::Account` does. The test itself runs on `tokio`.
///
/// # Examples
///
/// ```rust,ignore
/// #[e2e::test]
/// async fn grants_access(alice: Account, bob: Account) -> eyre::Result<()> {
///     let contract_addr = alice.as_deployer().deploy().await?.contract_address;
///     let contract = AccessToken::new(contract_addr, &alice.wallet);
///
///     let _ = watch!(contract.setAccess(bob.address()))?;
///
///     let AccessToken::canAccessReturn { _0: allowed } =
///         contract.canAccess(alice.address(), bob.address()).call().await?;
///     assert!(allowed);
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, input: TokenStream) -> TokenStream {
    test::test(&attr, input)
}
