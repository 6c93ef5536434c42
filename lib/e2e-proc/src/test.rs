use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, FnArg, ItemFn};

/// Expands an `#[e2e::test]` function into a `#[tokio::test]` one that
/// creates its arguments before running the body.
pub(crate) fn test(_attr: &TokenStream, input: TokenStream) -> TokenStream {
    let item_fn = parse_macro_input!(input as ItemFn);
    let attrs = &item_fn.attrs;
    let sig = &item_fn.sig;
    let fn_name = &sig.ident;
    let fn_return_type = &sig.output;
    let fn_block = &item_fn.block;

    if sig.asyncness.is_none() {
        return syn::Error::new(sig.fn_token.span(), "e2e tests must be async")
            .to_compile_error()
            .into();
    }

    let mut account_declarations = Vec::new();
    for arg in &sig.inputs {
        let FnArg::Typed(arg) = arg else {
            return syn::Error::new(
                arg.span(),
                "unexpected receiver argument in test signature",
            )
            .to_compile_error()
            .into();
        };
        let binding = &arg.pat;
        let ty = &arg.ty;
        account_declarations.push(quote! {
            let #binding = <#ty>::new().await?;
        });
    }

    quote! {
        #( #attrs )*
        #[tokio::test]
        async fn #fn_name() #fn_return_type {
            #( #account_declarations )*
            #fn_block
        }
    }
    .into()
}
