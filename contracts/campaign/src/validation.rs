//! Input checks shared by `vote` and `p_vote`.

use soroban_sdk::{Bytes, Vec};

use crate::types::{CampaignConfig, CampaignPhase};
use crate::Error;

/// Most candidates a single vote may select.
pub const MAX_SELECTION: u32 = 3;

/// Largest memo accepted by `vote`, in bytes.
pub const MAX_MEMO_BYTES: u32 = 128;

/// Fails unless `now` lies inside the inclusive voting window.
pub fn require_open(config: &CampaignConfig, now: u64) -> Result<(), Error> {
    match config.phase_at(now) {
        CampaignPhase::NotStarted => Err(Error::VotingNotStarted),
        CampaignPhase::Ended => Err(Error::VotingEnded),
        CampaignPhase::Open => Ok(()),
    }
}

/// A selection holds 1..=3 ids, strictly ascending, each below
/// `candidate_count`. Strict ordering also rules out duplicates.
pub fn check_selection(candidate_ids: &Vec<u32>, candidate_count: u32) -> Result<(), Error> {
    let len = candidate_ids.len();
    if len == 0 || len > MAX_SELECTION {
        return Err(Error::InvalidCandidateSelection);
    }

    let mut previous: Option<u32> = None;
    for id in candidate_ids.iter() {
        if id >= candidate_count {
            return Err(Error::InvalidCandidateSelection);
        }
        if matches!(previous, Some(prev) if id <= prev) {
            return Err(Error::InvalidCandidateSelection);
        }
        previous = Some(id);
    }
    Ok(())
}

pub fn check_memo(memo: &Bytes) -> Result<(), Error> {
    if memo.len() > MAX_MEMO_BYTES {
        return Err(Error::MemoTooLarge);
    }
    Ok(())
}
