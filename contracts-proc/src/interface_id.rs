//! Defines the `#[interface_id]` procedural macro.

use std::mem;

use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::Ident;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, FnArg, ItemTrait, LitStr, Result, Token, TraitItem,
    Type,
};

/// Computes an interface id as an associated function for the trait.
pub(crate) fn interface_id(
    _attr: &TokenStream,
    input: TokenStream,
) -> TokenStream {
    let mut input = parse_macro_input!(input as ItemTrait);

    let mut selectors = Vec::new();
    for item in &mut input.items {
        let TraitItem::Fn(func) = item else {
            continue;
        };

        let mut override_fn_name = None;
        for attr in mem::take(&mut func.attrs) {
            if attr.path().is_ident("selector") {
                if override_fn_name.is_some() {
                    error!(attr.path(), "more than one selector attribute");
                }
                let args: SelectorArgs = match attr.parse_args() {
                    Ok(args) => args,
                    Err(error) => error!(attr.path(), "{}", error),
                };
                override_fn_name = Some(args.name);
            } else {
                // Put back any other attributes.
                func.attrs.push(attr);
            }
        }

        let solidity_fn_name = override_fn_name.unwrap_or_else(|| {
            let rust_fn_name = func.sig.ident.to_string();
            rust_fn_name.to_case(Case::Camel)
        });

        let arg_types = func.sig.inputs.iter().filter_map(|arg| match arg {
            FnArg::Typed(t) if is_abi_compatible_type(&t.ty) => {
                Some(t.ty.clone())
            }
            // Opt out any `self` arguments and non-ABI types.
            _ => None,
        });

        selectors.push(quote! {
            alloy_primitives::FixedBytes::<4>::new(
                stylus_sdk::function_selector!(#solidity_fn_name #(, #arg_types )*)
            )
        });
    }

    if selectors.is_empty() {
        error!(input.ident, "interface should declare at least one function");
    }

    let name = input.ident;
    let vis = input.vis;
    let attrs = input.attrs;
    let trait_items = input.items;
    let supertraits = input.supertraits;
    let colon_token = input.colon_token;
    let (_impl_generics, ty_generics, where_clause) =
        input.generics.split_for_impl();

    // Keep the same trait with an additional associated function
    // `interface_id`.
    quote! {
        #(#attrs)*
        #vis trait #name #ty_generics #colon_token #supertraits #where_clause {
            #(#trait_items)*

            #[doc = concat!("Solidity interface id associated with ", stringify!(#name), " trait.")]
            #[doc = "Computed as a XOR of selectors for each function in the trait."]
            #[must_use]
            fn interface_id() -> alloy_primitives::FixedBytes<4>
            where
                Self: Sized,
            {
                #(#selectors)^*
            }
        }
    }
    .into()
}

/// Determines if a type is compatible with Solidity ABI encoding.
fn is_abi_compatible_type(ty: &Type) -> bool {
    // References and slices never reach the ABI.
    !matches!(ty, Type::Reference(_) | Type::Slice(_))
}

/// Contains arguments of the `#[selector(..)]` attribute.
struct SelectorArgs {
    name: String,
}

impl Parse for SelectorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;

        if ident == "name" {
            let _: Token![=] = input.parse()?;
            let lit: LitStr = input.parse()?;
            Ok(SelectorArgs { name: lit.value() })
        } else {
            error!(@ident, "expected identifier 'name'")
        }
    }
}
