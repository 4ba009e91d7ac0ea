//! Optional Burnable extension of the ERC-20 standard.

use alloy_primitives::{Address, U256};

use crate::token::erc20::{self, Erc20};

/// Extension of [`Erc20`] that allows token holders to destroy both their own
/// tokens and those that they have an allowance for, in a way that can be
/// recognized off-chain (via event analysis).
pub trait IErc20Burnable {
    /// The error type associated to this ERC-20 Burnable trait
    /// implementation.
    type Error;

    /// Destroys a `value` amount of tokens from `caller`, lowering the total
    /// supply.
    ///
    /// # Arguments
    ///
    /// * `caller` - Acting account whose tokens are destroyed.
    /// * `value` - Amount to be burnt.
    ///
    /// # Errors
    ///
    /// * [`erc20::Error::InsufficientBalance`] - If `caller` doesn't have
    ///   enough tokens.
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`], with the zero address as `to`.
    fn burn(&mut self, caller: Address, value: U256)
        -> Result<(), Self::Error>;

    /// Destroys a `value` amount of tokens from `account`, deducting from
    /// `spender`'s allowance and lowering the total supply.
    ///
    /// The allowance is checked before the balance, and is never left
    /// partially spent by a failing burn.
    ///
    /// # Arguments
    ///
    /// * `spender` - Acting account spending the allowance.
    /// * `account` - Owner's address.
    /// * `value` - Amount to be burnt.
    ///
    /// # Errors
    ///
    /// * [`erc20::Error::InsufficientAllowance`] - If not enough allowance is
    ///   available.
    /// * [`erc20::Error::InsufficientBalance`] - If `account` doesn't have
    ///   enough tokens.
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`], with the zero address as `to`.
    fn burn_from(
        &mut self,
        spender: Address,
        account: Address,
        value: U256,
    ) -> Result<(), Self::Error>;
}

impl IErc20Burnable for Erc20 {
    type Error = erc20::Error;

    fn burn(
        &mut self,
        caller: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        self._burn(caller, value)
    }

    fn burn_from(
        &mut self,
        spender: Address,
        account: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        self._spend_allowance(account, spender, value)?;
        self._burn(account, value)
    }
}
