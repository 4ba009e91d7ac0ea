//! The Lucid token: an [`Erc20`] ledger with per-account burn accounting.
//!
//! The entire fixed supply is minted to the deployer at construction. Burns
//! performed directly or through an allowance are attributed to the account
//! whose balance is destroyed, and the cumulative amount is queryable with
//! [`LucidToken::get_burned_tokens`].

use std::collections::BTreeMap;

use alloy_primitives::{uint, Address, U256};

use crate::token::erc20::{
    extensions::{Erc20Metadata, IErc20Burnable, IErc20Metadata},
    Erc20, Error, IErc20, Log,
};

/// State of the Lucid token: the core [`Erc20`] ledger, token metadata, and
/// the cumulative amount burned per account.
#[derive(Debug)]
pub struct LucidToken {
    erc20: Erc20,
    metadata: Erc20Metadata,
    /// Maps accounts to the total amount ever burned from their balance.
    burned: BTreeMap<Address, U256>,
}

impl LucidToken {
    /// Name of the token.
    pub const NAME: &'static str = "Lucid";
    /// Symbol of the token.
    pub const SYMBOL: &'static str = "LCD";
    /// Tokens minted to the deployer at construction: one billion whole
    /// tokens at [`super::erc20::extensions::metadata::DEFAULT_DECIMALS`]
    /// decimals.
    pub const INITIAL_SUPPLY: U256 =
        uint!(1_000_000_000_000_000_000_000_000_000_U256);

    /// Creates the ledger and mints `initial_supply` tokens to `deployer`.
    ///
    /// # Arguments
    ///
    /// * `initial_supply` - Amount credited to the deployer.
    /// * `deployer` - Account receiving the whole supply.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidReceiver`] - If `deployer` is `Address::ZERO`.
    /// * [`Error::ArithmeticOverflow`] - If `initial_supply` exceeds
    ///   `U256::MAX` minus the (zero) prior supply; unreachable for the
    ///   fixed mint.
    ///
    /// # Events
    ///
    /// * [`super::erc20::Transfer`], with the zero address as `from`.
    pub fn new(
        initial_supply: U256,
        deployer: Address,
    ) -> Result<Self, Error> {
        let mut erc20 = Erc20::default();
        erc20._mint(deployer, initial_supply)?;
        Ok(Self {
            erc20,
            metadata: Erc20Metadata::new(Self::NAME, Self::SYMBOL),
            burned: BTreeMap::new(),
        })
    }

    /// Creates the ledger with the fixed [`Self::INITIAL_SUPPLY`] minted to
    /// `deployer`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidReceiver`] - If `deployer` is `Address::ZERO`.
    pub fn deploy(deployer: Address) -> Result<Self, Error> {
        Self::new(Self::INITIAL_SUPPLY, deployer)
    }

    /// Returns the total amount of tokens ever burned from `account`'s
    /// balance, including burns performed by a spender through
    /// [`IErc20Burnable::burn_from`].
    ///
    /// # Arguments
    ///
    /// * `account` - Account to get the cumulative burned amount for.
    #[must_use]
    pub fn get_burned_tokens(&self, account: Address) -> U256 {
        self.burned.get(&account).copied().unwrap_or_default()
    }

    /// Returns the events emitted so far, oldest first.
    #[must_use]
    pub fn logs(&self) -> &[Log] {
        self.erc20.logs()
    }

    /// Drains and returns the events emitted so far, oldest first.
    pub fn take_logs(&mut self) -> Vec<Log> {
        self.erc20.take_logs()
    }

    fn track_burn(&mut self, account: Address, value: U256) {
        let burned = self.burned.entry(account).or_default();
        // Overflow not possible: cumulative burns from an account never
        // exceed the supply ever minted, which fits into a `U256`.
        *burned += value;
    }
}

impl IErc20 for LucidToken {
    type Error = Error;

    fn total_supply(&self) -> U256 {
        self.erc20.total_supply()
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.erc20.balance_of(account)
    }

    fn transfer(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.transfer(from, to, value)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.erc20.allowance(owner, spender)
    }

    fn approve(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.approve(owner, spender, value)
    }

    fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.transfer_from(spender, from, to, value)
    }
}

impl IErc20Burnable for LucidToken {
    type Error = Error;

    /// Burn attribution follows balance ownership: the destroyed amount is
    /// recorded against `caller`, whose tokens are burned.
    fn burn(
        &mut self,
        caller: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        self.erc20.burn(caller, value)?;
        self.track_burn(caller, value);
        Ok(())
    }

    /// Burn attribution follows balance ownership: the destroyed amount is
    /// recorded against `account`, not against the spender acting on the
    /// allowance.
    fn burn_from(
        &mut self,
        spender: Address,
        account: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        self.erc20.burn_from(spender, account, value)?;
        self.track_burn(account, value);
        Ok(())
    }
}

impl IErc20Metadata for LucidToken {
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
