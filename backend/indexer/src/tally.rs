//! Dense per-candidate tally built from indexed selections.
//!
//! The contract reports `total_vote_count` as one counter per candidate id.
//! The indexer stores selections sparsely, so this fills the gaps with zeros
//! to give API consumers the same shape.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// `counts[i]` is the number of votes candidate `i` received.
    pub counts: Vec<u64>,
    /// Sum of all counters, i.e. selections across every vote.
    pub total_selections: u64,
}

/// Expand sparse `(candidate_id, votes)` pairs into a dense counter list.
///
/// The list is `candidate_count` long, or longer when an id beyond it has
/// been indexed. With `candidate_count == 0` it stops at the highest id seen.
pub fn build(sparse: &[(u32, u64)], candidate_count: u32) -> Tally {
    let highest = sparse.iter().map(|(id, _)| *id as usize + 1).max().unwrap_or(0);
    let mut counts = vec![0u64; highest.max(candidate_count as usize)];
    for (id, votes) in sparse {
        counts[*id as usize] += votes;
    }
    let total_selections = counts.iter().sum();
    Tally {
        counts,
        total_selections,
    }
}

/// Candidate ids ordered by votes, highest first. Ties keep the lower id first.
pub fn ranking(tally: &Tally) -> Vec<(u32, u64)> {
    let mut ranked: Vec<(u32, u64)> = tally
        .counts
        .iter()
        .enumerate()
        .map(|(id, votes)| (id as u32, *votes))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}
