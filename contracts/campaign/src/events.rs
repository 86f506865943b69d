//! Contract events.
//!
//! | Topic                  | Data              |
//! |------------------------|-------------------|
//! | `("transfer", id)`     | [`TransferSingle`]|
//! | `("voted", voter)`     | [`Voted`]         |
//! | `("set_uri",)`         | `String`          |
//! | `("set_curi",)`        | `String`          |
//! | `("set_end",)`         | `u64`             |
//! | `("owner",)`           | `(Address, Address)` |
//!
//! A vote always publishes `transfer` before `voted`.

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String, Vec};

/// Semi-fungible transfer record. Mints have `from: None`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferSingle {
    pub operator: Address,
    pub from: Option<Address>,
    pub to: Address,
    pub token_id: u32,
    pub amount: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voted {
    pub candidate_ids: Vec<u32>,
    pub voter: Address,
    pub token_id: u32,
    /// Consumed ticket hash; all zeros for owner-submitted votes.
    pub ticket_hash: BytesN<32>,
}

pub fn emit_mint(env: &Env, operator: &Address, to: &Address, token_id: u32, amount: u64) {
    env.events().publish(
        (symbol_short!("transfer"), token_id),
        TransferSingle {
            operator: operator.clone(),
            from: None,
            to: to.clone(),
            token_id,
            amount,
        },
    );
}

pub fn emit_voted(
    env: &Env,
    candidate_ids: &Vec<u32>,
    voter: &Address,
    token_id: u32,
    ticket_hash: &BytesN<32>,
) {
    env.events().publish(
        (symbol_short!("voted"), voter.clone()),
        Voted {
            candidate_ids: candidate_ids.clone(),
            voter: voter.clone(),
            token_id,
            ticket_hash: ticket_hash.clone(),
        },
    );
}

pub fn emit_uri_set(env: &Env, uri: &String) {
    env.events().publish((symbol_short!("set_uri"),), uri.clone());
}

pub fn emit_contract_uri_set(env: &Env, uri: &String) {
    env.events().publish((symbol_short!("set_curi"),), uri.clone());
}

pub fn emit_end_date_set(env: &Env, end_date: u64) {
    env.events().publish((symbol_short!("set_end"),), end_date);
}

pub fn emit_owner_changed(env: &Env, previous: &Address, new_owner: &Address) {
    env.events().publish(
        (symbol_short!("owner"),),
        (previous.clone(), new_owner.clone()),
    );
}
