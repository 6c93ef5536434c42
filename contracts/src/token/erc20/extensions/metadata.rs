//! Optional Metadata of the ERC-20 standard.

use alloc::{string::String, vec, vec::Vec};

use access_token_stylus_proc::interface_id;
use alloy_primitives::FixedBytes;
use stylus_sdk::{prelude::*, storage::StorageString};

use crate::utils::introspection::erc165::IErc165;

/// Number of decimals used by default on implementors of [`Erc20Metadata`].
pub const DEFAULT_DECIMALS: u8 = 18;

/// State of an [`Erc20Metadata`] contract.
#[storage]
pub struct Erc20Metadata {
    /// Token name.
    pub(crate) name: StorageString,
    /// Token symbol.
    pub(crate) symbol: StorageString,
}

/// Interface for the optional metadata functions from the ERC-20 standard.
#[interface_id]
pub trait IErc20Metadata {
    /// Returns the name of the token.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    fn name(&self) -> String;

    /// Returns the symbol of the token, usually a shorter version of the name.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    fn symbol(&self) -> String;

    /// Returns the number of decimals used to get a user-friendly
    /// representation of values of this token.
    ///
    /// For example, if `decimals` equals `2`, a balance of `505` tokens should
    /// be displayed to a user as `5.05` (`505 / 10 ** 2`).
    ///
    /// Always [`DEFAULT_DECIMALS`]. Amounts passed to `initialize` and to the
    /// transfer functions are raw units.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    fn decimals(&self) -> u8;
}

#[public]
#[implements(IErc20Metadata, IErc165)]
impl Erc20Metadata {}

#[public]
impl IErc20Metadata for Erc20Metadata {
    fn name(&self) -> String {
        self.name.get_string()
    }

    fn symbol(&self) -> String {
        self.symbol.get_string()
    }

    fn decimals(&self) -> u8 {
        DEFAULT_DECIMALS
    }
}

impl Erc20Metadata {
    /// Stores the token `name` and `symbol`.
    ///
    /// Callers are responsible for running this only once, usually behind an
    /// [`crate::utils::Initializable::initializer`] guard.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `name` - Token name.
    /// * `symbol` - Token symbol.
    pub fn initialize(&mut self, name: &str, symbol: &str) {
        self.name.set_str(name);
        self.symbol.set_str(symbol);
    }
}

#[public]
impl IErc165 for Erc20Metadata {
    fn supports_interface(&self, interface_id: FixedBytes<4>) -> bool {
        <Self as IErc20Metadata>::interface_id() == interface_id
            || <Self as IErc165>::interface_id() == interface_id
    }
}
