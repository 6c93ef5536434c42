//! ERC-20 token whose holders can hand their access over to another account.
//!
//! [`AccessToken`] composes an [`Erc20`] ledger, its [`Erc20Metadata`], an
//! [`AccessRegistry`] and an [`Initializable`] guard. The token is set up once
//! through [`IAccessToken::initialize`], which records the owner and three
//! opaque configuration blobs and mints the initial supply to the owner.
//!
//! The accessor of an account may move that account's tokens through
//! [`IErc20::transfer_from`] without any allowance. Every other spender goes
//! through the regular ERC-20 allowance.
use alloc::{string::String, vec, vec::Vec};

use access_token_stylus_proc::interface_id;
use alloy_primitives::{Address, FixedBytes, U256};
pub use sol::*;
use stylus_sdk::{
    abi::Bytes,
    call::MethodError,
    msg,
    prelude::*,
    storage::{StorageAddress, StorageBytes},
};

use crate::{
    access::registry::{
        self, AccessRegistry, AccessRegistryInvalidAccessor,
        AccessRegistryInvalidGranter, AccessRegistryUnauthorizedAccount,
        IAccessRegistry,
    },
    token::erc20::{
        self,
        extensions::{Erc20Metadata, IErc20Metadata},
        ERC20InsufficientAllowance, ERC20InsufficientBalance,
        ERC20InvalidApprover, ERC20InvalidReceiver, ERC20InvalidSender,
        ERC20InvalidSpender, Erc20, IErc20,
    },
    utils::{
        initializable::{self, InvalidInitialization, NotInitialized},
        introspection::erc165::IErc165,
        IInitializable, Initializable,
    },
};

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// The owner is not a valid owner account. (eg. `Address::ZERO`)
        ///
        /// * `owner` - Account that's not allowed to become the owner.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error AccessTokenInvalidOwner(address owner);
    }
}

/// An error that occurred in the implementation of an [`AccessToken`]
/// contract.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// Indicates an error related to the current balance of `sender`. Used in
    /// transfers.
    InsufficientBalance(ERC20InsufficientBalance),
    /// Indicates a failure with the token `sender`. Used in transfers.
    InvalidSender(ERC20InvalidSender),
    /// Indicates a failure with the token `receiver`. Used in transfers.
    InvalidReceiver(ERC20InvalidReceiver),
    /// Indicates a failure with the `spender`’s `allowance`. Used in
    /// transfers.
    InsufficientAllowance(ERC20InsufficientAllowance),
    /// Indicates a failure with the `spender` to be approved. Used in
    /// approvals.
    InvalidSpender(ERC20InvalidSpender),
    /// Indicates a failure with the `approver` of a token to be approved. Used
    /// in approvals.
    InvalidApprover(ERC20InvalidApprover),
    /// The caller is not the accessor of the granter.
    UnauthorizedAccount(AccessRegistryUnauthorizedAccount),
    /// The granter is not a valid account.
    InvalidGranter(AccessRegistryInvalidGranter),
    /// The accessor is not a valid account.
    InvalidAccessor(AccessRegistryInvalidAccessor),
    /// The contract is already initialized.
    InvalidInitialization(InvalidInitialization),
    /// The operation requires an initialized contract.
    NotInitialized(NotInitialized),
    /// The owner is not a valid owner account.
    InvalidOwner(AccessTokenInvalidOwner),
}

impl From<erc20::Error> for Error {
    fn from(value: erc20::Error) -> Self {
        match value {
            erc20::Error::InsufficientBalance(e) => {
                Error::InsufficientBalance(e)
            }
            erc20::Error::InvalidSender(e) => Error::InvalidSender(e),
            erc20::Error::InvalidReceiver(e) => Error::InvalidReceiver(e),
            erc20::Error::InsufficientAllowance(e) => {
                Error::InsufficientAllowance(e)
            }
            erc20::Error::InvalidSpender(e) => Error::InvalidSpender(e),
            erc20::Error::InvalidApprover(e) => Error::InvalidApprover(e),
        }
    }
}

impl From<registry::Error> for Error {
    fn from(value: registry::Error) -> Self {
        match value {
            registry::Error::UnauthorizedAccount(e) => {
                Error::UnauthorizedAccount(e)
            }
            registry::Error::InvalidGranter(e) => Error::InvalidGranter(e),
            registry::Error::InvalidAccessor(e) => Error::InvalidAccessor(e),
        }
    }
}

impl From<initializable::Error> for Error {
    fn from(value: initializable::Error) -> Self {
        match value {
            initializable::Error::InvalidInitialization(e) => {
                Error::InvalidInitialization(e)
            }
            initializable::Error::NotInitialized(e) => Error::NotInitialized(e),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of an [`AccessToken`] contract.
#[storage]
pub struct AccessToken {
    /// [`Erc20`] ledger.
    pub erc20: Erc20,
    /// [`Erc20Metadata`] contract.
    pub metadata: Erc20Metadata,
    /// [`AccessRegistry`] contract.
    pub registry: AccessRegistry,
    /// [`Initializable`] guard.
    pub initializable: Initializable,
    /// Account recorded as the owner at initialization.
    pub(crate) owner: StorageAddress,
    /// First configuration blob.
    pub(crate) cfg1: StorageBytes,
    /// Second configuration blob.
    pub(crate) cfg2: StorageBytes,
    /// Third configuration blob.
    pub(crate) cfg3: StorageBytes,
}

/// Interface for the setup and configuration of an [`AccessToken`].
#[interface_id]
pub trait IAccessToken {
    /// The error type associated to the trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Sets the token up. Can be called only once.
    ///
    /// The configuration blobs are stored as given and never interpreted by
    /// the contract.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `name` - Token name.
    /// * `symbol` - Token symbol.
    /// * `owner` - Owner of the token, receives the initial supply.
    /// * `cfg1` - First configuration blob.
    /// * `cfg2` - Second configuration blob.
    /// * `cfg3` - Third configuration blob.
    /// * `param` - Initial supply, in raw units.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidInitialization`] - If the token is already
    ///   initialized.
    /// * [`Error::InvalidOwner`] - If `owner` is [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`initializable::Initialized`].
    /// * [`erc20::Transfer`] - Minting `param` to `owner`.
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        &mut self,
        name: String,
        symbol: String,
        owner: Address,
        cfg1: Bytes,
        cfg2: Bytes,
        cfg3: Bytes,
        param: U256,
    ) -> Result<(), Self::Error>;

    /// Returns the owner recorded at initialization, or [`Address::ZERO`]
    /// before it.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    #[must_use]
    fn owner(&self) -> Address;

    /// Returns the three configuration blobs passed to `initialize`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    #[must_use]
    fn configuration(&self) -> (Bytes, Bytes, Bytes);
}

#[public]
#[implements(
    IAccessToken<Error = Error>,
    IErc20<Error = Error>,
    IErc20Metadata,
    IAccessRegistry<Error = Error>,
    IInitializable,
    IErc165
)]
impl AccessToken {}

#[public]
impl IAccessToken for AccessToken {
    type Error = Error;

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
        self.initializable.initializer()?;

        if owner.is_zero() {
            return Err(Error::InvalidOwner(AccessTokenInvalidOwner {
                owner: Address::ZERO,
            }));
        }

        self.metadata.initialize(&name, &symbol);
        self.owner.set(owner);
        self.cfg1.set_bytes(cfg1);
        self.cfg2.set_bytes(cfg2);
        self.cfg3.set_bytes(cfg3);
        self.erc20._mint(owner, param)?;

        Ok(())
    }

    fn owner(&self) -> Address {
        self.owner.get()
    }

    fn configuration(&self) -> (Bytes, Bytes, Bytes) {
        (
            self.cfg1.get_bytes().into(),
            self.cfg2.get_bytes().into(),
            self.cfg3.get_bytes().into(),
        )
    }
}

#[public]
impl IErc20 for AccessToken {
    type Error = Error;

    fn total_supply(&self) -> U256 {
        self.erc20.total_supply()
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.erc20.balance_of(account)
    }

    fn transfer(
        &mut self,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.initializable.when_initialized()?;
        Ok(self.erc20.transfer(to, value)?)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.erc20.allowance(owner, spender)
    }

    fn approve(
        &mut self,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.initializable.when_initialized()?;
        Ok(self.erc20.approve(spender, value)?)
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.initializable.when_initialized()?;
        let spender = msg::sender();
        self._spend_access_or_allowance(from, spender, value)?;
        self.erc20._transfer(from, to, value)?;
        Ok(true)
    }
}

#[public]
impl IErc20Metadata for AccessToken {
    fn name(&self) -> String {
        self.metadata.name()
    }

    fn symbol(&self) -> String {
        self.metadata.symbol()
    }

    fn decimals(&self) -> u8 {
        self.metadata.decimals()
    }
}

#[public]
impl IAccessRegistry for AccessToken {
    type Error = Error;

    fn set_access(&mut self, accessor: Address) -> Result<(), Self::Error> {
        self.initializable.when_initialized()?;
        Ok(self.registry.set_access(accessor)?)
    }

    fn can_access(&self, granter: Address, candidate: Address) -> bool {
        self.registry.can_access(granter, candidate)
    }

    fn accessor_of(&self, granter: Address) -> Address {
        self.registry.accessor_of(granter)
    }
}

#[public]
impl IInitializable for AccessToken {
    fn initialized(&self) -> bool {
        self.initializable.initialized()
    }
}

impl AccessToken {
    /// Lets `spender` move `value` of `owner`'s tokens.
    ///
    /// `owner` itself and the accessor of `owner` need no allowance. Anyone
    /// else spends their ERC-20 allowance.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `owner` - Account that owns the tokens.
    /// * `spender` - Account that spends the tokens.
    /// * `value` - The number of tokens being spent.
    ///
    /// # Errors
    ///
    /// * [`Error::InsufficientAllowance`] - If `spender` has no access to
    ///   `owner` and not enough allowance.
    /// * [`Error::InvalidApprover`] - If `spender` has no access to `owner`
    ///   and `owner` is [`Address::ZERO`].
    pub fn _spend_access_or_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Error> {
        if spender == owner || self.registry.can_access(owner, spender) {
            return Ok(());
        }

        Ok(self.erc20._spend_allowance(owner, spender, value)?)
    }
}

#[public]
impl IErc165 for AccessToken {
    fn supports_interface(&self, interface_id: FixedBytes<4>) -> bool {
        <Self as IAccessToken>::interface_id() == interface_id
            || self.erc20.supports_interface(interface_id)
            || self.metadata.supports_interface(interface_id)
            || self.registry.supports_interface(interface_id)
            || <Self as IInitializable>::interface_id() == interface_id
    }
}
