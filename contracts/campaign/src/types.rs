//! # Types
//!
//! Shared data structures used across the campaign contract.
//!
//! ## Voting window
//!
//! A campaign has no stored phase. [`CampaignPhase`] is derived from the
//! ledger timestamp and the configured dates on every call:
//!
//! ```text
//! now < start_date                 -> NotStarted
//! start_date <= now <= end_date    -> Open
//! now > end_date                   -> Ended
//! ```
//!
//! Moving `end_date` with `set_end_date` can therefore reopen or close a
//! campaign immediately.

use soroban_sdk::{contracttype, String};

/// Voting window state computed from the ledger clock.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignPhase {
    /// Ledger time is before `start_date`.
    NotStarted,
    /// Votes are accepted.
    Open,
    /// Ledger time is past `end_date`.
    Ended,
}

/// Campaign configuration, written at `init`.
///
/// `token_uri`, `contract_uri` and `end_date` are owner-mutable; the rest is
/// fixed for the lifetime of the contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    /// Metadata URI shared by every minted token id.
    pub token_uri: String,
    /// Collection-level metadata URI.
    pub contract_uri: String,
    /// Number of candidates; valid ids are `0..candidate_count`.
    pub candidate_count: u32,
    /// First ledger timestamp at which votes are accepted.
    pub start_date: u64,
    /// Last ledger timestamp at which votes are accepted.
    pub end_date: u64,
}

impl CampaignConfig {
    /// Where `now` falls relative to the voting window.
    pub fn phase_at(&self, now: u64) -> CampaignPhase {
        if now < self.start_date {
            CampaignPhase::NotStarted
        } else if now > self.end_date {
            CampaignPhase::Ended
        } else {
            CampaignPhase::Open
        }
    }
}
