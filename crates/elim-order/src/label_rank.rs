//! Dense re-ranking of labelled vertices with a stable radix sort.

use elim_core::VertexId;

const RADIX: usize = 10;

/// Result of [`stable_label_rank`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedLabels {
    /// Vertices with their dense rank, sorted by rank descending.
    pub entries: Vec<(VertexId, u32)>,
    /// Number of distinct input labels; every rank lies in `1..=tiers`.
    pub tiers: usize,
}

/// Re-quantises arbitrary ordered labels into dense integer ranks.
///
/// The highest distinct label gets rank `k`, the lowest rank `1`, where `k` is
/// the number of distinct labels. Entries are then sorted by rank descending
/// with a base-10 LSD radix sort; each digit pass is a stable counting sort,
/// so entries sharing a label keep their input order.
pub fn stable_label_rank<L>(labelled: Vec<(VertexId, L)>) -> RankedLabels
where
    L: Ord + Copy,
{
    let mut distinct: Vec<L> = labelled.iter().map(|(_, label)| *label).collect();
    distinct.sort_unstable();
    distinct.dedup();
    let tiers = distinct.len();

    let mut entries: Vec<(VertexId, u32)> = labelled
        .into_iter()
        .map(|(vertex, label)| {
            // ascending position + 1 == dense rank
            let position = distinct.partition_point(|probe| *probe < label);
            (vertex, position as u32 + 1)
        })
        .collect();

    let max = entries.iter().map(|(_, rank)| *rank).max().unwrap_or(0) as u64;
    let mut exp = 1u64;
    while max / exp > 0 {
        counting_sort_descending(&mut entries, exp);
        exp *= RADIX as u64;
    }

    RankedLabels { entries, tiers }
}

fn digit(rank: u32, exp: u64) -> usize {
    ((rank as u64 / exp) % RADIX as u64) as usize
}

fn counting_sort_descending(entries: &mut Vec<(VertexId, u32)>, exp: u64) {
    // bucket 0 holds digit 9, so higher digits come first
    let mut count = [0usize; RADIX];
    for (_, rank) in entries.iter() {
        count[RADIX - 1 - digit(*rank, exp)] += 1;
    }
    let mut start = [0usize; RADIX];
    for bucket in 1..RADIX {
        start[bucket] = start[bucket - 1] + count[bucket - 1];
    }
    let mut output = entries.clone();
    for entry in entries.iter() {
        let bucket = RADIX - 1 - digit(entry.1, exp);
        output[start[bucket]] = *entry;
        start[bucket] += 1;
    }
    *entries = output;
}
