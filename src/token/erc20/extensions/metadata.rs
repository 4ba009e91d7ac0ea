//! Optional Metadata of the ERC-20 standard.

/// Number of decimals used by default on implementors of [`Erc20Metadata`].
pub const DEFAULT_DECIMALS: u8 = 18;

/// Name, symbol and decimals of an ERC-20 token.
#[derive(Debug)]
pub struct Erc20Metadata {
    name: String,
    symbol: String,
}

impl Erc20Metadata {
    /// Creates metadata with the given `name` and `symbol`.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self { name: name.into(), symbol: symbol.into() }
    }
}

/// Interface for the optional metadata functions from the ERC-20 standard.
pub trait IErc20Metadata {
    /// Returns the name of the token.
    fn name(&self) -> String;

    /// Returns the symbol of the token, usually a shorter version of the
    /// name.
    fn symbol(&self) -> String;

    /// Returns the number of decimals used to get a user-friendly
    /// representation of values of this token.
    ///
    /// For example, if `decimals` equals `2`, a balance of `505` tokens
    /// should be displayed to a user as `5.05` (`505 / 10 ** 2`).
    ///
    /// Tokens usually opt for a value of `18`, imitating the relationship
    /// between Ether and Wei. This is the default value returned by this
    /// function ([`DEFAULT_DECIMALS`]), unless it's overridden.
    ///
    /// NOTE: This information is only used for *display* purposes: in no way
    /// it affects any of the arithmetic of the ledger, including
    /// [`super::super::IErc20::balance_of`] and
    /// [`super::super::IErc20::transfer`].
    fn decimals(&self) -> u8;
}

impl IErc20Metadata for Erc20Metadata {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn symbol(&self) -> String {
        self.symbol.clone()
    }

    fn decimals(&self) -> u8 {
        DEFAULT_DECIMALS
    }
}

#[cfg(test)]
mod tests {
    use super::{Erc20Metadata, IErc20Metadata, DEFAULT_DECIMALS};

    #[test]
    fn reads_metadata() {
        let metadata = Erc20Metadata::new("Lucid", "LCD");
        assert_eq!("Lucid", metadata.name());
        assert_eq!("LCD", metadata.symbol());
        assert_eq!(DEFAULT_DECIMALS, metadata.decimals());
    }
}
