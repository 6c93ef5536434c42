//! Token standards.
pub mod access_token;
pub mod erc20;
