mod block;
mod region;

use std::ops::Range;

pub use region::{Region, RegionKind, RegionList};

use block::{BlockIndex, longest_common_block};

/// Aligns two sequences of units into an ordered list of contiguous regions.
///
/// The classic longest-matching-block recursion: the longest run of units
/// common to the spans under consideration becomes an [`RegionKind::Equal`]
/// region and the unmatched spans strictly before and after it are aligned
/// recursively. A span pair with no common run is emitted as one region:
/// [`RegionKind::Delete`] when the right span is empty,
/// [`RegionKind::Insert`] when the left span is empty, and a single paired
/// [`RegionKind::Replace`] otherwise. Replaces are deliberately not
/// decomposed further; one paired span per difference is what a merge
/// affordance needs.
///
/// Deterministic for identical input. Both sequences may be empty, in which
/// case the result is empty.
#[must_use]
pub fn align(left: &[String], right: &[String]) -> Vec<Region> {
    let index = BlockIndex::new(right);
    let mut regions = Vec::new();

    align_span(
        left,
        0..left.len(),
        right,
        0..right.len(),
        &index,
        &mut regions,
    );

    debug_assert!(
        covers_both_sequences(&regions, left.len(), right.len()),
        "regions must tile both sequences contiguously"
    );

    regions
}

fn align_span(
    left: &[String],
    left_span: Range<usize>,
    right: &[String],
    right_span: Range<usize>,
    index: &BlockIndex<'_>,
    regions: &mut Vec<Region>,
) {
    if left_span.is_empty() && right_span.is_empty() {
        return;
    }

    let block = longest_common_block(left, left_span.clone(), right_span.clone(), index);
    if block.len == 0 {
        let kind = if right_span.is_empty() {
            RegionKind::Delete
        } else if left_span.is_empty() {
            RegionKind::Insert
        } else {
            RegionKind::Replace
        };
        regions.push(Region::new(kind, left_span, right_span));
        return;
    }

    let left_block = block.left_start..block.left_start + block.len;
    let right_block = block.right_start..block.right_start + block.len;
    debug_assert_eq!(left[left_block.clone()], right[right_block.clone()]);

    align_span(
        left,
        left_span.start..block.left_start,
        right,
        right_span.start..block.right_start,
        index,
        regions,
    );
    regions.push(Region::new(RegionKind::Equal, left_block, right_block));
    align_span(
        left,
        block.left_start + block.len..left_span.end,
        right,
        block.right_start + block.len..right_span.end,
        index,
        regions,
    );
}

fn covers_both_sequences(regions: &[Region], left_len: usize, right_len: usize) -> bool {
    let mut left_cursor = 0;
    let mut right_cursor = 0;

    for region in regions {
        if region.left_start != left_cursor || region.right_start != right_cursor {
            return false;
        }
        left_cursor = region.left_end;
        right_cursor = region.right_end;
    }

    left_cursor == left_len && right_cursor == right_len
}
