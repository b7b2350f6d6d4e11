use crate::segment::SegmentTable;
use rand::prelude::*;

/// Map a draw in `[0, total_weight)` to a segment index.
///
/// Walks the table accumulating weights and returns the first segment whose
/// cumulative weight reaches `draw`. Zero-weight segments are skipped, so a
/// draw of exactly `0.0` never lands on a slice that was configured off. A
/// draw past the total (float drift) resolves to the last weighted segment.
pub fn index_for_draw(table: &SegmentTable, draw: f64) -> usize {
    let mut cumulative = 0.0;
    let mut last_weighted = 0;
    for (i, seg) in table.iter().enumerate() {
        if seg.weight <= 0.0 {
            continue;
        }
        cumulative += seg.weight;
        last_weighted = i;
        if draw <= cumulative {
            return i;
        }
    }
    last_weighted
}

/// Draw one weighted index with a caller-provided RNG.
pub fn choose_index<R: Rng + ?Sized>(rng: &mut R, table: &SegmentTable) -> usize {
    let draw = rng.gen::<f64>() * table.total_weight();
    index_for_draw(table, draw)
}

/// Weighted outcome source owned by a wheel.
pub struct OutcomeSelector {
    rng: StdRng,
}

impl OutcomeSelector {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from OS entropy (`crypto.getRandomValues` on wasm).
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn choose(&mut self, table: &SegmentTable) -> usize {
        choose_index(&mut self.rng, table)
    }
}

impl Default for OutcomeSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}
