/*!
# Access Token Contracts for Stylus

A library of smart contract primitives for
[Arbitrum Stylus](https://docs.arbitrum.io/stylus/stylus-gentle-introduction)
that layers a delegated access registry on top of an ERC-20 ledger.

Every account may hand its access over to exactly one other account (its
*accessor*). The accessor can then act on behalf of the account: it passes
[`access::registry::AccessRegistry::can_access`] checks and may move the
account's tokens through `transferFrom` without an allowance.

## Usage

Add `access-token-stylus` to your `Cargo.toml`:

```toml
[dependencies]
access-token-stylus = "x.x.x"
```

Then compose the pre-defined building blocks into your entrypoint contract:

```rust,ignore
use access_token_stylus::token::access_token::{self, AccessToken, IAccessToken};

#[entrypoint]
#[storage]
struct AccessTokenBase {
    token: AccessToken,
}

#[public]
#[implements(IAccessToken<Error = access_token::Error>)]
impl AccessTokenBase {}
```
*/

#![allow(
    clippy::module_name_repetitions,
    clippy::used_underscore_items,
    clippy::unsafe_derive_deserialize
)]
#![cfg_attr(not(any(test, feature = "std")), no_std, no_main)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![deny(rustdoc::broken_intra_doc_links)]
extern crate alloc;

pub mod access;
pub mod token;
pub mod utils;
