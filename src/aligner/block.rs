use std::{collections::HashMap, ops::Range};

/// Index from unit content to its ascending positions in the right sequence.
///
/// Built once per alignment so every longest-common-block search can walk
/// only the right positions that can actually extend a run, which keeps the
/// search at O(n·m) worst case without quadratic scanning per candidate. All
/// units participate; there is no junk heuristic.
pub struct BlockIndex<'a> {
    positions: HashMap<&'a str, Vec<usize>>,
}

impl<'a> BlockIndex<'a> {
    pub fn new(right: &'a [String]) -> Self {
        let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
        for (j, unit) in right.iter().enumerate() {
            positions.entry(unit.as_str()).or_default().push(j);
        }

        Self { positions }
    }

    fn positions_of(&self, unit: &str) -> &[usize] {
        self.positions.get(unit).map_or(&[], Vec::as_slice)
    }
}

impl std::fmt::Debug for BlockIndex<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockIndex")
            .field("distinct_units", &self.positions.len())
            .finish()
    }
}

/// A run of units common to both sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub left_start: usize,
    pub right_start: usize,
    pub len: usize,
}

/// Finds the longest contiguous run of units shared by `left[left_span]` and
/// the right span covered by `index`.
///
/// Ties are broken towards the smallest left offset, then the smallest right
/// offset. Returns a zero-length block anchored at the span starts when the
/// spans share nothing.
pub fn longest_common_block(
    left: &[String],
    left_span: Range<usize>,
    right_span: Range<usize>,
    index: &BlockIndex<'_>,
) -> Block {
    let mut best = Block {
        left_start: left_span.start,
        right_start: right_span.start,
        len: 0,
    };

    // run_lengths[j] is the length of the common run ending at the previous
    // left offset and right offset j.
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();

    for i in left_span {
        let mut next_run_lengths = HashMap::new();

        for &j in index.positions_of(&left[i]) {
            if j < right_span.start {
                continue;
            }
            if j >= right_span.end {
                break;
            }

            let len = j
                .checked_sub(1)
                .and_then(|previous| run_lengths.get(&previous))
                .copied()
                .unwrap_or(0)
                + 1;
            next_run_lengths.insert(j, len);

            // Strict comparison keeps the first maximal run found while
            // scanning left offsets ascending and right positions ascending,
            // which is exactly the documented tie-break.
            if len > best.len {
                best = Block {
                    left_start: i + 1 - len,
                    right_start: j + 1 - len,
                    len,
                };
            }
        }

        run_lengths = next_run_lengths;
    }

    best
}
