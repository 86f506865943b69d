//! # Campaign Contract
//!
//! A ticket-authorized voting campaign. Each account may vote once, for one to
//! three candidates, inside a time window. Every vote must carry a ticket
//! signed off-chain by the campaign's issuer key, and each ticket works once.
//! A successful vote mints one unit of a semi-fungible token to the voter.
//!
//! | Phase        | Entry Point(s)                                            |
//! |--------------|-----------------------------------------------------------|
//! | Bootstrap    | [`Campaign::init`]                                        |
//! | Voting       | [`Campaign::vote`], [`Campaign::p_vote`] (owner)          |
//! | Owner admin  | `set_uri`, `set_end_date`, `set_contract_uri`, `transfer_ownership` |
//! | Queries      | `is_voted`, `total_vote_count`, `phase`, `config`, `balance_of`, ... |
//!
//! ## Architecture
//!
//! Storage access lives in [`storage`], ticket signature handling in
//! [`ticket`], input checks in [`validation`] and event payloads in
//! [`events`]. Every fallible entry point validates all of its inputs before
//! the first write, so a failed call leaves no trace.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, Address, Bytes, BytesN, Env, String,
    Vec,
};

mod curve;
mod events;
mod storage;
mod ticket;
mod types;
mod validation;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_tickets;

pub use events::{TransferSingle, Voted};
pub use types::{CampaignConfig, CampaignPhase};
pub use validation::{MAX_MEMO_BYTES, MAX_SELECTION};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized        = 1,
    NotInitialized            = 2,
    NotOwner                  = 3,
    VotingNotStarted          = 4,
    VotingEnded               = 5,
    InvalidCandidateSelection = 6,
    MemoTooLarge              = 7,
    UnauthorizedTicket        = 8,
    TicketAlreadyUsed         = 9,
    VoterAlreadyVoted         = 10,
    InvalidCandidateCount     = 11,
}

impl Error {
    /// Human-readable reason for client tooling.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::AlreadyInitialized => "campaign already initialized",
            Error::NotInitialized => "campaign not initialized",
            Error::NotOwner => "Ownable: caller is not the owner",
            Error::VotingNotStarted => "vote not started yet",
            Error::VotingEnded => "vote is ended already",
            Error::InvalidCandidateSelection => {
                "Ids length not in [1,3] / Ids not in ascending order / Ids out of range"
            }
            Error::MemoTooLarge => "Memo should be within 128 bytes",
            Error::UnauthorizedTicket => "The vote is not authorized",
            Error::TicketAlreadyUsed => "Ticket is used",
            Error::VoterAlreadyVoted => "User is voted",
            Error::InvalidCandidateCount => "candidate count must be at least 1",
        }
    }
}

/// Units minted per successful vote.
const MINT_AMOUNT: u64 = 1;

#[contract]
pub struct Campaign;

#[contractimpl]
impl Campaign {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the campaign.
    ///
    /// Must be called exactly once immediately after deployment. `owner` must
    /// sign. `ticket_issuer` is the Ethereum-style address whose signatures
    /// authorize votes.
    #[allow(clippy::too_many_arguments)]
    pub fn init(
        env: Env,
        owner: Address,
        ticket_issuer: BytesN<20>,
        token_uri: String,
        contract_uri: String,
        candidate_count: u32,
        start_date: u64,
        end_date: u64,
    ) {
        owner.require_auth();

        if storage::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        if candidate_count == 0 {
            panic_with_error!(&env, Error::InvalidCandidateCount);
        }

        let config = CampaignConfig {
            token_uri,
            contract_uri,
            candidate_count,
            start_date,
            end_date,
        };
        storage::init_campaign(&env, &owner, &ticket_issuer, &config);
    }

    // ─────────────────────────────────────────────────────────
    // Voting
    // ─────────────────────────────────────────────────────────

    /// Cast `voter`'s single vote.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// window, selection, memo, ticket signature, ticket reuse, voter reuse.
    /// On success the ticket is consumed, each selected candidate gains one
    /// vote, and one unit of token id `candidate_ids[0]` is minted to the voter.
    ///
    /// Returns the minted token id.
    pub fn vote(
        env: Env,
        voter: Address,
        candidate_ids: Vec<u32>,
        memo: Bytes,
        ticket_message: Bytes,
        ticket_signature: BytesN<65>,
    ) -> Result<u32, Error> {
        voter.require_auth();

        let config = storage::load_config(&env)?;
        validation::require_open(&config, env.ledger().timestamp())?;
        validation::check_selection(&candidate_ids, config.candidate_count)?;
        validation::check_memo(&memo)?;

        let issuer = storage::get_issuer(&env)?;
        let ticket_hash = ticket::verify(&env, &ticket_message, &ticket_signature, &issuer)?;
        if storage::is_ticket_used(&env, &ticket_hash) {
            return Err(Error::TicketAlreadyUsed);
        }
        if storage::has_voted(&env, &voter) {
            return Err(Error::VoterAlreadyVoted);
        }

        record_vote(&env, &voter, &voter, &candidate_ids, Some(&ticket_hash))
    }

    /// Owner-submitted vote on behalf of `voter`.
    ///
    /// Skips the voting window and ticket checks. The selection rules and the
    /// one-vote-per-account rule still apply. `_ticket` is an off-chain
    /// reference only: it is neither verified nor consumed, and the `voted`
    /// event carries an all-zero ticket hash.
    pub fn p_vote(
        env: Env,
        caller: Address,
        candidate_ids: Vec<u32>,
        voter: Address,
        _ticket: BytesN<32>,
    ) -> Result<u32, Error> {
        caller.require_auth();
        storage::require_owner(&env, &caller)?;

        let config = storage::load_config(&env)?;
        validation::check_selection(&candidate_ids, config.candidate_count)?;
        if storage::has_voted(&env, &voter) {
            return Err(Error::VoterAlreadyVoted);
        }

        record_vote(&env, &caller, &voter, &candidate_ids, None)
    }

    /// `true` once `voter` has voted through either path.
    pub fn is_voted(env: Env, voter: Address) -> bool {
        storage::has_voted(&env, &voter)
    }

    /// Vote count per candidate id, `candidate_count` entries long.
    pub fn total_vote_count(env: Env) -> Result<Vec<u64>, Error> {
        storage::load_vote_counts(&env)
    }

    /// `true` once a ticket with this message hash has been consumed.
    pub fn is_ticket_used(env: Env, ticket_hash: BytesN<32>) -> bool {
        storage::is_ticket_used(&env, &ticket_hash)
    }

    /// Current voting window state.
    pub fn phase(env: Env) -> Result<CampaignPhase, Error> {
        let config = storage::load_config(&env)?;
        Ok(config.phase_at(env.ledger().timestamp()))
    }

    // ─────────────────────────────────────────────────────────
    // Owner administration
    // ─────────────────────────────────────────────────────────

    pub fn set_uri(env: Env, caller: Address, uri: String) -> Result<(), Error> {
        caller.require_auth();
        storage::require_owner(&env, &caller)?;

        let mut config = storage::load_config(&env)?;
        config.token_uri = uri;
        storage::save_config(&env, &config);
        events::emit_uri_set(&env, &config.token_uri);
        Ok(())
    }

    /// Move the end of the voting window. Takes effect on the next call.
    pub fn set_end_date(env: Env, caller: Address, end_date: u64) -> Result<(), Error> {
        caller.require_auth();
        storage::require_owner(&env, &caller)?;

        let mut config = storage::load_config(&env)?;
        config.end_date = end_date;
        storage::save_config(&env, &config);
        events::emit_end_date_set(&env, end_date);
        Ok(())
    }

    pub fn set_contract_uri(env: Env, caller: Address, uri: String) -> Result<(), Error> {
        caller.require_auth();
        storage::require_owner(&env, &caller)?;

        let mut config = storage::load_config(&env)?;
        config.contract_uri = uri;
        storage::save_config(&env, &config);
        events::emit_contract_uri_set(&env, &config.contract_uri);
        Ok(())
    }

    /// Hand owner rights to `new_owner`. The previous owner loses them at once.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();
        storage::require_owner(&env, &caller)?;

        storage::set_owner(&env, &new_owner);
        events::emit_owner_changed(&env, &caller, &new_owner);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env)
    }

    pub fn ticket_issuer(env: Env) -> Result<BytesN<20>, Error> {
        storage::get_issuer(&env)
    }

    pub fn config(env: Env) -> Result<CampaignConfig, Error> {
        storage::load_config(&env)
    }

    /// Metadata URI for `_token_id`. All ids share one URI.
    pub fn uri(env: Env, _token_id: u32) -> Result<String, Error> {
        Ok(storage::load_config(&env)?.token_uri)
    }

    pub fn contract_uri(env: Env) -> Result<String, Error> {
        Ok(storage::load_config(&env)?.contract_uri)
    }

    pub fn start_date(env: Env) -> Result<u64, Error> {
        Ok(storage::load_config(&env)?.start_date)
    }

    pub fn end_date(env: Env) -> Result<u64, Error> {
        Ok(storage::load_config(&env)?.end_date)
    }

    pub fn candidate_count(env: Env) -> Result<u32, Error> {
        Ok(storage::load_config(&env)?.candidate_count)
    }

    pub fn balance_of(env: Env, account: Address, token_id: u32) -> u64 {
        storage::balance_of(&env, &account, token_id)
    }

    pub fn total_supply(env: Env, token_id: u32) -> u64 {
        storage::total_supply(&env, token_id)
    }
}

/// Apply an already validated vote: consume the ticket, mark the voter, bump
/// counters, mint the voter's token and publish `transfer` then `voted`.
fn record_vote(
    env: &Env,
    operator: &Address,
    voter: &Address,
    candidate_ids: &Vec<u32>,
    ticket_hash: Option<&BytesN<32>>,
) -> Result<u32, Error> {
    let mut counts = storage::load_vote_counts(env)?;
    for id in candidate_ids.iter() {
        let current = counts.get(id).ok_or(Error::InvalidCandidateSelection)?;
        counts.set(id, current + 1);
    }

    // Selections are validated non-empty and ascending, so the first id is
    // the lowest.
    let token_id = candidate_ids
        .first()
        .ok_or(Error::InvalidCandidateSelection)?;

    let event_hash = match ticket_hash {
        Some(hash) => {
            storage::mark_ticket_used(env, hash);
            hash.clone()
        }
        None => BytesN::from_array(env, &[0u8; 32]),
    };
    storage::mark_voted(env, voter);
    storage::save_vote_counts(env, &counts);
    storage::mint(env, voter, token_id, MINT_AMOUNT);

    events::emit_mint(env, operator, voter, token_id, MINT_AMOUNT);
    events::emit_voted(env, candidate_ids, voter, token_id, &event_hash);
    Ok(token_id)
}
