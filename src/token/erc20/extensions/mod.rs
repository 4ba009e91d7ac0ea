//! Common extensions to the ERC-20 standard.

pub mod burnable;
pub mod metadata;

pub use burnable::IErc20Burnable;
pub use metadata::{Erc20Metadata, IErc20Metadata};
