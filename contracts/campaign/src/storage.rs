//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the campaign.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key          | Type             | Description                          |
//! |--------------|------------------|--------------------------------------|
//! | `Owner`      | `Address`        | Privileged account                   |
//! | `Issuer`     | `BytesN<20>`     | Ethereum-style ticket signer address |
//! | `Config`     | `CampaignConfig` | URIs, candidate count, window        |
//! | `VoteCounts` | `Vec<u64>`       | One counter per candidate id         |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                     | Type   | Description                        |
//! |-------------------------|--------|------------------------------------|
//! | `Voted(voter)`          | `bool` | Voter has cast their one vote      |
//! | `TicketUsed(hash)`      | `bool` | Ticket has been consumed           |
//! | `Balance(account, id)`  | `u64`  | Semi-fungible token balance        |
//! | `Supply(id)`            | `u64`  | Units minted for a token id        |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Voter and ticket flags are never removed: an entry that exists means the
//! voter or ticket is spent.

use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

use crate::types::CampaignConfig;
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Campaign owner (Instance).
    Owner,
    /// Trusted ticket issuer address (Instance).
    Issuer,
    /// Campaign configuration (Instance).
    Config,
    /// Per-candidate vote counters (Instance).
    VoteCounts,
    /// Voter registry flag (Persistent).
    Voted(Address),
    /// Consumed ticket flag keyed by message hash (Persistent).
    TicketUsed(BytesN<32>),
    /// Token balance keyed by (account, token id) (Persistent).
    Balance(Address, u32),
    /// Minted supply keyed by token id (Persistent).
    Supply(u32),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

/// Write the full initial campaign state. Counters start at zero.
pub fn init_campaign(env: &Env, owner: &Address, issuer: &BytesN<20>, config: &CampaignConfig) {
    let mut counts = Vec::new(env);
    for _ in 0..config.candidate_count {
        counts.push_back(0u64);
    }

    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::Issuer, issuer);
    instance.set(&DataKey::Config, config);
    instance.set(&DataKey::VoteCounts, &counts);
    bump_instance(env);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

/// Fails with `NotOwner` unless `caller` is the current owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    if get_owner(env)? != *caller {
        return Err(Error::NotOwner);
    }
    Ok(())
}

pub fn get_issuer(env: &Env) -> Result<BytesN<20>, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Issuer)
        .ok_or(Error::NotInitialized)
}

pub fn load_config(env: &Env) -> Result<CampaignConfig, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn save_config(env: &Env, config: &CampaignConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn load_vote_counts(env: &Env) -> Result<Vec<u64>, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::VoteCounts)
        .ok_or(Error::NotInitialized)
}

pub fn save_vote_counts(env: &Env, counts: &Vec<u64>) {
    env.storage().instance().set(&DataKey::VoteCounts, counts);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn has_flag(env: &Env, key: &DataKey) -> bool {
    let present = env.storage().persistent().has(key);
    if present {
        bump_persistent(env, key);
    }
    present
}

fn set_flag(env: &Env, key: &DataKey) {
    env.storage().persistent().set(key, &true);
    bump_persistent(env, key);
}

pub fn has_voted(env: &Env, voter: &Address) -> bool {
    has_flag(env, &DataKey::Voted(voter.clone()))
}

pub fn mark_voted(env: &Env, voter: &Address) {
    set_flag(env, &DataKey::Voted(voter.clone()));
}

pub fn is_ticket_used(env: &Env, ticket_hash: &BytesN<32>) -> bool {
    has_flag(env, &DataKey::TicketUsed(ticket_hash.clone()))
}

pub fn mark_ticket_used(env: &Env, ticket_hash: &BytesN<32>) {
    set_flag(env, &DataKey::TicketUsed(ticket_hash.clone()));
}

fn read_amount(env: &Env, key: &DataKey) -> u64 {
    let amount: Option<u64> = env.storage().persistent().get(key);
    if amount.is_some() {
        bump_persistent(env, key);
    }
    amount.unwrap_or(0)
}

fn write_amount(env: &Env, key: &DataKey, amount: u64) {
    env.storage().persistent().set(key, &amount);
    bump_persistent(env, key);
}

pub fn balance_of(env: &Env, account: &Address, token_id: u32) -> u64 {
    read_amount(env, &DataKey::Balance(account.clone(), token_id))
}

pub fn total_supply(env: &Env, token_id: u32) -> u64 {
    read_amount(env, &DataKey::Supply(token_id))
}

/// Credit `amount` units of `token_id` to `to` and grow the supply.
pub fn mint(env: &Env, to: &Address, token_id: u32, amount: u64) {
    let balance_key = DataKey::Balance(to.clone(), token_id);
    let supply_key = DataKey::Supply(token_id);
    let balance = read_amount(env, &balance_key);
    let supply = read_amount(env, &supply_key);
    write_amount(env, &balance_key, balance + amount);
    write_amount(env, &supply_key, supply + amount);
}
