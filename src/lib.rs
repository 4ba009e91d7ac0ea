/*!
# Lucid Token

An ERC-20 style token ledger with per-account burn accounting, written as a
plain Rust library. The ledger is a single owned aggregate: every mutating
operation takes the acting account explicitly and either applies its full
effect or fails with a specific error kind, leaving the state untouched.

The crate follows general `OpenZeppelin` Contracts guidelines: operations
return errors instead of `false` on failure, and every mutation is recorded
in an append-only event log consumable by external monitors.

## Usage

```rust
use alloy_primitives::{address, uint};
use lucid_token::{token::erc20::extensions::IErc20Burnable, LucidToken};

let deployer = address!("A11CEacF9aa32246d767FCCD72e02d6bCbcC375d");
let mut token = LucidToken::deploy(deployer).expect("fixed mint fits in a U256");

token.burn(deployer, uint!(1_000_U256)).expect("deployer holds the full supply");
assert_eq!(uint!(1_000_U256), token.get_burned_tokens(deployer));
```
*/

#![allow(clippy::module_name_repetitions)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod token;

pub use token::lucid::LucidToken;
