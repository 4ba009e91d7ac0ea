//! End-to-end scenarios for the Lucid token ledger.

use alloy_primitives::{address, uint, Address, U256};
use lucid_token::{
    token::erc20::{
        extensions::{IErc20Burnable, IErc20Metadata},
        Error, IErc20, Log, Transfer,
    },
    LucidToken,
};

const OWNER: Address = address!("A11CEacF9aa32246d767FCCD72e02d6bCbcC375d");
const ALICE: Address = address!("B0B0cB49ec2e96DF5F5fFB081acaE66A2cBBc2e2");
const BOB: Address = address!("ceacf9aa32246d767fccd72e02d6bcbcc375da11");

/// 1000 whole tokens at 18 decimals.
const THOUSAND_TOKENS: U256 = uint!(1_000_000_000_000_000_000_000_U256);

fn deploy() -> LucidToken {
    LucidToken::deploy(OWNER).expect("fixed mint fits in a U256")
}

#[test]
fn mints_total_supply_to_deployer() {
    let token = deploy();

    let total_supply = token.total_supply();
    let owner_balance = token.balance_of(OWNER);

    assert_eq!(owner_balance, total_supply);
    assert_eq!(LucidToken::INITIAL_SUPPLY, total_supply);
}

#[test]
fn exposes_token_metadata() {
    let token = deploy();
    assert_eq!("Lucid", token.name());
    assert_eq!("LCD", token.symbol());
    assert_eq!(18, token.decimals());
}

#[test]
fn updates_total_supply_when_tokens_burned() {
    let mut token = deploy();

    let supply_before = token.total_supply();
    token.burn(OWNER, THOUSAND_TOKENS).expect("owner holds the supply");
    let supply_after = token.total_supply();

    assert_eq!(supply_before - THOUSAND_TOKENS, supply_after);
}

#[test]
fn updates_total_supply_when_tokens_burned_from_allowance() {
    let mut token = deploy();

    let supply_before = token.total_supply();
    token
        .approve(OWNER, ALICE, THOUSAND_TOKENS)
        .expect("approval of a valid spender succeeds");
    token
        .burn_from(ALICE, OWNER, THOUSAND_TOKENS)
        .expect("allowance covers the burn");
    let supply_after = token.total_supply();

    assert_eq!(supply_before - THOUSAND_TOKENS, supply_after);
    assert_eq!(U256::ZERO, token.allowance(OWNER, ALICE));
}

#[test]
fn records_total_tokens_burned_by_address() {
    let mut token = deploy();

    token.burn(OWNER, THOUSAND_TOKENS).expect("owner holds the supply");

    assert_eq!(THOUSAND_TOKENS, token.get_burned_tokens(OWNER));
}

#[test]
fn records_total_tokens_burned_by_address_from_allowance() {
    let mut token = deploy();

    token
        .approve(OWNER, ALICE, THOUSAND_TOKENS)
        .expect("approval of a valid spender succeeds");
    token
        .burn_from(ALICE, OWNER, THOUSAND_TOKENS)
        .expect("allowance covers the burn");

    // The burn is attributed to the owner whose balance was destroyed, even
    // though Alice initiated it.
    assert_eq!(THOUSAND_TOKENS, token.get_burned_tokens(OWNER));
    assert_eq!(U256::ZERO, token.get_burned_tokens(ALICE));
}

#[test]
fn burn_beyond_balance_fails_and_preserves_state() {
    let mut token = deploy();
    let over_balance = token.balance_of(OWNER) + U256::ONE;

    let result = token.burn(OWNER, over_balance);
    assert!(matches!(result, Err(Error::InsufficientBalance(_))));

    assert_eq!(LucidToken::INITIAL_SUPPLY, token.total_supply());
    assert_eq!(LucidToken::INITIAL_SUPPLY, token.balance_of(OWNER));
    assert_eq!(U256::ZERO, token.get_burned_tokens(OWNER));
}

#[test]
fn transfer_from_without_approval_fails() {
    let mut token = deploy();

    let result = token.transfer_from(ALICE, OWNER, BOB, THOUSAND_TOKENS);
    assert!(matches!(result, Err(Error::InsufficientAllowance(_))));

    assert_eq!(LucidToken::INITIAL_SUPPLY, token.balance_of(OWNER));
    assert_eq!(U256::ZERO, token.balance_of(BOB));
}

#[test]
fn transfer_moves_tokens_and_preserves_supply() {
    let mut token = deploy();

    token
        .transfer(OWNER, ALICE, THOUSAND_TOKENS)
        .expect("owner holds the supply");

    assert_eq!(THOUSAND_TOKENS, token.balance_of(ALICE));
    assert_eq!(
        LucidToken::INITIAL_SUPPLY - THOUSAND_TOKENS,
        token.balance_of(OWNER)
    );
    assert_eq!(LucidToken::INITIAL_SUPPLY, token.total_supply());
}

#[test]
fn emits_logs_for_deploy_and_burn() {
    let mut token = deploy();

    token.burn(OWNER, THOUSAND_TOKENS).expect("owner holds the supply");

    let logs = token.take_logs();
    assert_eq!(
        vec![
            // The deployment mint.
            Log::Transfer(Transfer {
                from: Address::ZERO,
                to: OWNER,
                value: LucidToken::INITIAL_SUPPLY,
            }),
            // The burn.
            Log::Transfer(Transfer {
                from: OWNER,
                to: Address::ZERO,
                value: THOUSAND_TOKENS,
            }),
        ],
        logs
    );
}
