//! Token ledgers.

pub mod erc20;
pub mod lucid;
