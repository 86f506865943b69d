#![allow(dead_code)]

extern crate std;

use soroban_sdk::Vec;

use crate::types::CampaignConfig;

/// INV-1: the counter sequence always has one entry per candidate.
pub fn assert_counts_shape(counts: &Vec<u64>, candidate_count: u32) {
    assert_eq!(
        counts.len(),
        candidate_count,
        "INV-1 violated: {} counters for {} candidates",
        counts.len(),
        candidate_count
    );
}

/// INV-2: counters never decrease.
pub fn assert_counts_monotonic(before: &Vec<u64>, after: &Vec<u64>) {
    for (i, (b, a)) in before.iter().zip(after.iter()).enumerate() {
        assert!(
            a >= b,
            "INV-2 violated: candidate {} went from {} to {}",
            i,
            b,
            a
        );
    }
}

/// INV-3: a successful vote adds exactly one to each selected candidate and
/// leaves every other counter alone.
pub fn assert_vote_applied(before: &Vec<u64>, after: &Vec<u64>, selected: &[u32]) {
    assert_eq!(before.len(), after.len(), "INV-3 violated: counter length changed");
    for i in 0..before.len() {
        let expected = if selected.contains(&i) {
            before.get_unchecked(i) + 1
        } else {
            before.get_unchecked(i)
        };
        assert_eq!(
            after.get_unchecked(i),
            expected,
            "INV-3 violated: candidate {} expected {}",
            i,
            expected
        );
    }
}

/// INV-4: the sum of all counters equals the number of selected ids across
/// every successful vote.
pub fn assert_total_selections(counts: &Vec<u64>, selections: &[&[u32]]) {
    let total: u64 = counts.iter().sum();
    let expected: u64 = selections.iter().map(|s| s.len() as u64).sum();
    assert_eq!(
        total, expected,
        "INV-4 violated: counters sum to {} but {} ids were voted",
        total, expected
    );
}

/// INV-5: fields that no owner operation may touch stay fixed.
pub fn assert_fixed_fields(original: &CampaignConfig, current: &CampaignConfig) {
    assert_eq!(
        original.candidate_count, current.candidate_count,
        "INV-5 violated: candidate_count changed"
    );
    assert_eq!(
        original.start_date, current.start_date,
        "INV-5 violated: start_date changed"
    );
}
