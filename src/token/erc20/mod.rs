//! Implementation of the ERC-20 token standard as an owned ledger aggregate.
//!
//! We have followed general `OpenZeppelin` Contracts guidelines: functions
//! return errors instead of `false` on failure. Because there is no
//! transactional runtime underneath to revert partial writes, every operation
//! checks all of its preconditions before touching any state.
//!
//! There is no ambient caller either, so each mutating operation takes the
//! acting account as an explicit argument.

use std::collections::BTreeMap;

use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;

pub mod extensions;

sol! {
    /// Emitted when `value` tokens are moved from one account (`from`) to
    /// another (`to`).
    ///
    /// Note that `value` may be zero.
    #[allow(missing_docs)]
    #[derive(Debug, PartialEq)]
    event Transfer(address indexed from, address indexed to, uint256 value);
    /// Emitted when the allowance of a `spender` for an `owner` is set by a
    /// call to `approve`. `value` is the new allowance.
    #[allow(missing_docs)]
    #[derive(Debug, PartialEq)]
    event Approval(address indexed owner, address indexed spender, uint256 value);
}

sol! {
    /// Indicates an error related to the current `balance` of `sender`. Used
    /// in transfers.
    ///
    /// * `sender` - Address whose tokens are being transferred.
    /// * `balance` - Current balance for the interacting account.
    /// * `needed` - Minimum amount required to perform a transfer.
    #[derive(Debug, PartialEq)]
    #[allow(missing_docs)]
    error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
    /// Indicates a failure with the token `sender`. Used in transfers.
    ///
    /// * `sender` - Address whose tokens are being transferred.
    #[derive(Debug, PartialEq)]
    #[allow(missing_docs)]
    error ERC20InvalidSender(address sender);
    /// Indicates a failure with the token `receiver`. Used in transfers.
    ///
    /// * `receiver` - Address to which the tokens are being transferred.
    #[derive(Debug, PartialEq)]
    #[allow(missing_docs)]
    error ERC20InvalidReceiver(address receiver);
    /// Indicates a failure with the `spender`'s `allowance`. Used in
    /// transfers.
    ///
    /// * `spender` - Address that may be allowed to operate on tokens without
    ///   being their owner.
    /// * `allowance` - Amount of tokens a `spender` is allowed to operate
    ///   with.
    /// * `needed` - Minimum amount required to perform a transfer.
    #[derive(Debug, PartialEq)]
    #[allow(missing_docs)]
    error ERC20InsufficientAllowance(address spender, uint256 allowance, uint256 needed);
    /// Indicates a failure with the `spender` to be approved. Used in
    /// approvals.
    ///
    /// * `spender` - Address that may be allowed to operate on tokens without
    ///   being their owner.
    #[derive(Debug, PartialEq)]
    #[allow(missing_docs)]
    error ERC20InvalidSpender(address spender);
    /// Indicates a failure with the `approver` of a token to be approved.
    /// Used in approvals.
    ///
    /// * `approver` - Address initiating an approval operation.
    #[derive(Debug, PartialEq)]
    #[allow(missing_docs)]
    error ERC20InvalidApprover(address approver);
}

/// An [`Erc20`] error defined as described in [ERC-6093], plus the overflow
/// kind a mint can hit.
///
/// [ERC-6093]: https://eips.ethereum.org/EIPS/eip-6093
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// Indicates an error related to the current balance of `sender`. Used in
    /// transfers.
    #[error("insufficient balance of sender {}: balance {}, needed {}", .0.sender, .0.balance, .0.needed)]
    InsufficientBalance(ERC20InsufficientBalance),
    /// Indicates a failure with the token `sender`. Used in transfers.
    #[error("invalid sender {}", .0.sender)]
    InvalidSender(ERC20InvalidSender),
    /// Indicates a failure with the token `receiver`. Used in transfers.
    #[error("invalid receiver {}", .0.receiver)]
    InvalidReceiver(ERC20InvalidReceiver),
    /// Indicates a failure with the `spender`'s `allowance`. Used in
    /// transfers.
    #[error("insufficient allowance of spender {}: allowance {}, needed {}", .0.spender, .0.allowance, .0.needed)]
    InsufficientAllowance(ERC20InsufficientAllowance),
    /// Indicates a failure with the `spender` to be approved. Used in
    /// approvals.
    #[error("invalid spender {}", .0.spender)]
    InvalidSpender(ERC20InvalidSpender),
    /// Indicates a failure with the `approver` of a token to be approved.
    /// Used in approvals.
    #[error("invalid approver {}", .0.approver)]
    InvalidApprover(ERC20InvalidApprover),
    /// Indicates that a mint would push the total supply past `U256::MAX`.
    #[error("arithmetic overflow when increasing total supply")]
    ArithmeticOverflow,
}

/// A ledger event, recorded in emission order.
#[derive(Debug, PartialEq)]
pub enum Log {
    /// A [`Transfer`] event. Mints carry `Address::ZERO` as `from`; burns
    /// carry it as `to`.
    Transfer(Transfer),
    /// An [`Approval`] event.
    Approval(Approval),
}

/// State of an [`Erc20`] token ledger.
#[derive(Debug, Default)]
pub struct Erc20 {
    /// Maps accounts to balances.
    balances: BTreeMap<Address, U256>,
    /// Maps `(owner, spender)` pairs to allowances.
    allowances: BTreeMap<(Address, Address), U256>,
    /// The total supply of the token.
    total_supply: U256,
    /// Events emitted by mutating operations, oldest first.
    logs: Vec<Log>,
}

/// Required interface of an [`Erc20`] compliant ledger.
pub trait IErc20 {
    /// The error type associated to this ERC-20 trait implementation.
    type Error;

    /// Returns the number of tokens in existence.
    fn total_supply(&self) -> U256;

    /// Returns the number of tokens owned by `account`.
    ///
    /// # Arguments
    ///
    /// * `account` - Account to get balance from.
    fn balance_of(&self, account: Address) -> U256;

    /// Moves a `value` amount of tokens from `from` to `to`.
    ///
    /// Returns a boolean value indicating whether the operation succeeded.
    ///
    /// # Arguments
    ///
    /// * `from` - Acting account to transfer tokens from.
    /// * `to` - Account to transfer tokens to.
    /// * `value` - Number of tokens to transfer.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidSender`] - If the `from` address is `Address::ZERO`.
    /// * [`Error::InvalidReceiver`] - If the `to` address is `Address::ZERO`.
    /// * [`Error::InsufficientBalance`] - If `from` doesn't have a balance of
    ///   at least `value`.
    ///
    /// # Events
    ///
    /// * [`Transfer`].
    fn transfer(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error>;

    /// Returns the remaining number of tokens that `spender` will be allowed
    /// to spend on behalf of `owner` through `transfer_from`. This is zero by
    /// default.
    ///
    /// This value changes when `approve` or `transfer_from` are called.
    ///
    /// # Arguments
    ///
    /// * `owner` - Account that owns the tokens.
    /// * `spender` - Account that will spend the tokens.
    fn allowance(&self, owner: Address, spender: Address) -> U256;

    /// Sets a `value` number of tokens as the allowance of `spender` over the
    /// `owner`'s tokens. The allowance is set absolutely, not added to.
    ///
    /// Returns a boolean value indicating whether the operation succeeded.
    ///
    /// WARNING: Beware that changing an allowance with this method brings the
    /// risk that someone may use both the old and the new allowance by
    /// unfortunate transaction ordering. One possible solution to mitigate
    /// this race condition is to first reduce the `spender`'s allowance to 0
    /// and set the desired value afterwards:
    /// <https://github.com/ethereum/EIPs/issues/20#issuecomment-263524729>
    ///
    /// # Arguments
    ///
    /// * `owner` - Acting account that owns the tokens.
    /// * `spender` - Account that will spend the tokens.
    /// * `value` - The new allowance.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidApprover`] - If the `owner` address is
    ///   `Address::ZERO`.
    /// * [`Error::InvalidSpender`] - If the `spender` address is
    ///   `Address::ZERO`.
    ///
    /// # Events
    ///
    /// * [`Approval`].
    fn approve(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error>;

    /// Moves a `value` number of tokens from `from` to `to` using the
    /// allowance mechanism. `value` is then deducted from the `spender`'s
    /// allowance.
    ///
    /// Returns a boolean value indicating whether the operation succeeded.
    ///
    /// The allowance is checked before the balance, so when both are short
    /// the caller sees [`Error::InsufficientAllowance`].
    ///
    /// NOTE: If the allowance is the maximum `U256::MAX`, it is not updated
    /// on `transfer_from`. This is semantically equivalent to an infinite
    /// approval.
    ///
    /// # Arguments
    ///
    /// * `spender` - Acting account spending the allowance.
    /// * `from` - Account to transfer tokens from.
    /// * `to` - Account to transfer tokens to.
    /// * `value` - Number of tokens to transfer.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidReceiver`] - If the `to` address is `Address::ZERO`.
    /// * [`Error::InsufficientAllowance`] - If not enough allowance is
    ///   available.
    /// * [`Error::InsufficientBalance`] - If `from` doesn't have a balance of
    ///   at least `value`.
    ///
    /// # Events
    ///
    /// * [`Transfer`].
    fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error>;
}

impl IErc20 for Erc20 {
    type Error = Error;

    fn total_supply(&self) -> U256 {
        self.total_supply
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    fn transfer(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self._transfer(from, to, value)?;
        Ok(true)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).copied().unwrap_or_default()
    }

    fn approve(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self._approve(owner, spender, value, true)
    }

    fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        // The receiver is validated before the allowance is debited, so a
        // rejected transfer cannot leave the allowance already spent.
        if to.is_zero() {
            return Err(Error::InvalidReceiver(ERC20InvalidReceiver {
                receiver: Address::ZERO,
            }));
        }
        self._spend_allowance(from, spender, value)?;
        self._transfer(from, to, value)?;
        Ok(true)
    }
}

impl Erc20 {
    /// Returns the events emitted so far, oldest first.
    #[must_use]
    pub fn logs(&self) -> &[Log] {
        &self.logs
    }

    /// Drains and returns the events emitted so far, oldest first.
    pub fn take_logs(&mut self) -> Vec<Log> {
        core::mem::take(&mut self.logs)
    }

    fn emit(&mut self, log: Log) {
        self.logs.push(log);
    }

    /// Sets a `value` number of tokens as the allowance of `spender` over the
    /// `owner`'s tokens.
    ///
    /// Returns a boolean value indicating whether the operation succeeded.
    ///
    /// # Arguments
    ///
    /// * `owner` - Account that owns the tokens.
    /// * `spender` - Account that will spend the tokens.
    /// * `value` - The new allowance.
    /// * `emit_event` - Emit an [`Approval`] event flag.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidApprover`] - If the `owner` address is
    ///   `Address::ZERO`.
    /// * [`Error::InvalidSpender`] - If the `spender` address is
    ///   `Address::ZERO`.
    fn _approve(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
        emit_event: bool,
    ) -> Result<bool, Error> {
        if owner.is_zero() {
            return Err(Error::InvalidApprover(ERC20InvalidApprover {
                approver: Address::ZERO,
            }));
        }

        if spender.is_zero() {
            return Err(Error::InvalidSpender(ERC20InvalidSpender {
                spender: Address::ZERO,
            }));
        }

        self.allowances.insert((owner, spender), value);
        if emit_event {
            self.emit(Log::Approval(Approval { owner, spender, value }));
        }
        Ok(true)
    }

    /// Internal implementation of transferring tokens between two accounts.
    ///
    /// # Arguments
    ///
    /// * `from` - Account to transfer tokens from.
    /// * `to` - Account to transfer tokens to.
    /// * `value` - The number of tokens to transfer.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidSender`] - If the `from` address is `Address::ZERO`.
    /// * [`Error::InvalidReceiver`] - If the `to` address is `Address::ZERO`.
    /// * [`Error::InsufficientBalance`] - If `from` doesn't have enough
    ///   tokens.
    ///
    /// # Events
    ///
    /// * [`Transfer`].
    fn _transfer(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Error> {
        if from.is_zero() {
            return Err(Error::InvalidSender(ERC20InvalidSender {
                sender: Address::ZERO,
            }));
        }
        if to.is_zero() {
            return Err(Error::InvalidReceiver(ERC20InvalidReceiver {
                receiver: Address::ZERO,
            }));
        }

        self._update(from, to, value)?;

        Ok(())
    }

    /// Creates a `value` amount of tokens and assigns them to `account`, by
    /// transferring it from `Address::ZERO`.
    ///
    /// Relies on the `_update` mechanism.
    ///
    /// # Arguments
    ///
    /// * `account` - Account to mint tokens to.
    /// * `value` - Amount to be minted.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidReceiver`] - If the `account` address is
    ///   `Address::ZERO`.
    /// * [`Error::ArithmeticOverflow`] - If the total supply would exceed
    ///   `U256::MAX`.
    ///
    /// # Events
    ///
    /// * [`Transfer`].
    pub fn _mint(
        &mut self,
        account: Address,
        value: U256,
    ) -> Result<(), Error> {
        if account.is_zero() {
            return Err(Error::InvalidReceiver(ERC20InvalidReceiver {
                receiver: Address::ZERO,
            }));
        }
        self._update(Address::ZERO, account, value)
    }

    /// Transfers a `value` amount of tokens from `from` to `to`, or
    /// alternatively mints (or burns) if `from` (or `to`) is the zero
    /// address.
    ///
    /// All customizations to transfers, mints, and burns should be done by
    /// using this function.
    ///
    /// # Arguments
    ///
    /// * `from` - Owner's address.
    /// * `to` - Recipient's address.
    /// * `value` - Amount to be transferred.
    ///
    /// # Errors
    ///
    /// * [`Error::InsufficientBalance`] - If `from` doesn't have enough
    ///   tokens.
    /// * [`Error::ArithmeticOverflow`] - If a mint would push the total
    ///   supply past `U256::MAX`.
    ///
    /// # Events
    ///
    /// * [`Transfer`].
    pub fn _update(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Error> {
        if from.is_zero() {
            // Mint operation. Overflow check required: the rest of the code
            // assumes that `total_supply` never overflows.
            let total_supply = self
                .total_supply()
                .checked_add(value)
                .ok_or(Error::ArithmeticOverflow)?;
            self.total_supply = total_supply;
        } else {
            let from_balance = self.balance_of(from);
            if from_balance < value {
                return Err(Error::InsufficientBalance(
                    ERC20InsufficientBalance {
                        sender: from,
                        balance: from_balance,
                        needed: value,
                    },
                ));
            }
            // Underflow not possible:
            // `value` <= `from_balance` <= `total_supply`.
            self.balances.insert(from, from_balance - value);
        }

        if to.is_zero() {
            let total_supply = self.total_supply();
            // Underflow not possible:
            // `value` <= `total_supply` or
            // `value` <= `from_balance` <= `total_supply`.
            self.total_supply = total_supply - value;
        } else {
            let balance_to = self.balance_of(to);
            // Overflow not possible:
            // `balance_to` + `value` is at most `total_supply`,
            // which fits into a `U256`.
            self.balances.insert(to, balance_to + value);
        }

        self.emit(Log::Transfer(Transfer { from, to, value }));

        Ok(())
    }

    /// Destroys a `value` amount of tokens from `account`, lowering the total
    /// supply.
    ///
    /// Relies on the `_update` mechanism.
    ///
    /// # Arguments
    ///
    /// * `account` - Owner's address.
    /// * `value` - Amount to be burnt.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidSender`] - If the `account` address is
    ///   `Address::ZERO`.
    /// * [`Error::InsufficientBalance`] - If `account` doesn't have enough
    ///   tokens.
    ///
    /// # Events
    ///
    /// * [`Transfer`].
    pub fn _burn(
        &mut self,
        account: Address,
        value: U256,
    ) -> Result<(), Error> {
        if account == Address::ZERO {
            return Err(Error::InvalidSender(ERC20InvalidSender {
                sender: Address::ZERO,
            }));
        }
        self._update(account, Address::ZERO, value)
    }

    /// Updates `owner`'s allowance for `spender` based on spent `value`.
    ///
    /// Does not update the allowance value in the case of infinite allowance.
    ///
    /// The owner's balance is verified before the allowance is reduced: with
    /// no transactional runtime to revert partial writes, a debit that the
    /// balance cannot cover must not leave the allowance half-spent. The
    /// allowance is still checked first, so callers short on both see
    /// [`Error::InsufficientAllowance`].
    ///
    /// # Arguments
    ///
    /// * `owner` - Account whose tokens will be spent.
    /// * `spender` - Account spending the allowance.
    /// * `value` - The number of tokens to spend.
    ///
    /// # Errors
    ///
    /// * [`Error::InsufficientAllowance`] - If not enough allowance is
    ///   available.
    /// * [`Error::InsufficientBalance`] - If `owner` doesn't have a balance
    ///   of at least `value`.
    pub fn _spend_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Error> {
        let current_allowance = self.allowance(owner, spender);
        if current_allowance == U256::MAX {
            return Ok(());
        }

        if current_allowance < value {
            return Err(Error::InsufficientAllowance(
                ERC20InsufficientAllowance {
                    spender,
                    allowance: current_allowance,
                    needed: value,
                },
            ));
        }

        let owner_balance = self.balance_of(owner);
        if owner_balance < value {
            return Err(Error::InsufficientBalance(ERC20InsufficientBalance {
                sender: owner,
                balance: owner_balance,
                needed: value,
            }));
        }

        self._approve(owner, spender, current_allowance - value, false)?;

        Ok(())
    }
}
