#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
#![allow(clippy::result_large_err)]
extern crate alloc;

use alloc::{string::String, vec::Vec};

use access_token_stylus::{
    access::registry::IAccessRegistry,
    token::{
        access_token::{self, AccessToken, IAccessToken},
        erc20::{extensions::IErc20Metadata, IErc20},
    },
    utils::{introspection::erc165::IErc165, IInitializable},
};
use alloy_primitives::{Address, FixedBytes, U256};
use stylus_sdk::{abi::Bytes, prelude::*};

#[entrypoint]
#[storage]
struct AccessTokenBase {
    token: AccessToken,
}

#[public]
#[implements(
    IAccessToken<Error = access_token::Error>,
    IErc20<Error = access_token::Error>,
    IErc20Metadata,
    IAccessRegistry<Error = access_token::Error>,
    IInitializable,
    IErc165
)]
impl AccessTokenBase {}

#[public]
impl IAccessToken for AccessTokenBase {
    type Error = access_token::Error;

    fn initialize(
        &mut self,
        name: String,
        symbol: String,
        owner: Address,
        cfg1: Bytes,
        cfg2: Bytes,
        cfg3: Bytes,
        param: U256,
    ) -> Result<(), Self::Error> {
        self.token.initialize(name, symbol, owner, cfg1, cfg2, cfg3, param)
    }

    fn owner(&self) -> Address {
        self.token.owner()
    }

    fn configuration(&self) -> (Bytes, Bytes, Bytes) {
        self.token.configuration()
    }
}

#[public]
impl IErc20 for AccessTokenBase {
    type Error = access_token::Error;

    fn total_supply(&self) -> U256 {
        self.token.total_supply()
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.token.balance_of(account)
    }

    fn transfer(
        &mut self,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.token.transfer(to, value)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.token.allowance(owner, spender)
    }

    fn approve(
        &mut self,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.token.approve(spender, value)
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.token.transfer_from(from, to, value)
    }
}

#[public]
impl IErc20Metadata for AccessTokenBase {
    fn name(&self) -> String {
        self.token.name()
    }

    fn symbol(&self) -> String {
        self.token.symbol()
    }

    fn decimals(&self) -> u8 {
        self.token.decimals()
    }
}

#[public]
impl IAccessRegistry for AccessTokenBase {
    type Error = access_token::Error;

    fn set_access(&mut self, accessor: Address) -> Result<(), Self::Error> {
        self.token.set_access(accessor)
    }

    fn can_access(&self, granter: Address, candidate: Address) -> bool {
        self.token.can_access(granter, candidate)
    }

    fn accessor_of(&self, granter: Address) -> Address {
        self.token.accessor_of(granter)
    }
}

#[public]
impl IInitializable for AccessTokenBase {
    fn initialized(&self) -> bool {
        self.token.initialized()
    }
}

#[public]
impl IErc165 for AccessTokenBase {
    fn supports_interface(&self, interface_id: FixedBytes<4>) -> bool {
        self.token.supports_interface(interface_id)
    }
}
