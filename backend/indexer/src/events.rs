//! Canonical event types emitted by the campaign contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/campaign/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the campaign contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A vote was recorded (`voted` topic).
    Voted,
    /// A vote token was minted (`transfer` topic).
    TransferSingle,
    /// The token metadata URI changed (`set_uri` topic).
    UriSet,
    /// The contract metadata URI changed (`set_curi` topic).
    ContractUriSet,
    /// The voting end date moved (`set_end` topic).
    EndDateSet,
    /// Ownership moved to a new account (`owner` topic).
    OwnershipTransferred,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "voted" => Self::Voted,
            "transfer" => Self::TransferSingle,
            "set_uri" => Self::UriSet,
            "set_curi" => Self::ContractUriSet,
            "set_end" => Self::EndDateSet,
            "owner" => Self::OwnershipTransferred,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Voted => "voted",
            Self::TransferSingle => "transfer_single",
            Self::UriSet => "uri_set",
            Self::ContractUriSet => "contract_uri_set",
            Self::EndDateSet => "end_date_set",
            Self::OwnershipTransferred => "ownership_transferred",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded campaign event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignEvent {
    /// RPC event id, unique per contract event.
    pub event_id: String,
    pub event_type: String,
    /// Voter (for `voted`) or token recipient (for `transfer`).
    pub voter: Option<String>,
    pub token_id: Option<i64>,
    /// Hex-encoded ticket hash of a `voted` event.
    pub ticket_hash: Option<String>,
    /// Candidate ids selected by a `voted` event; empty otherwise.
    pub candidate_ids: Vec<u32>,
    /// Free-form payload for admin events (new URI, end date, new owner).
    pub detail: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: String,
    pub event_type: String,
    pub voter: Option<String>,
    pub token_id: Option<i64>,
    pub ticket_hash: Option<String>,
    pub detail: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
