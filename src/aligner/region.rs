use std::ops::{Index, Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of an aligned region.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// Both spans hold identical units.
    Equal,
    /// Units present on the left only; the right span is empty.
    Delete,
    /// Units present on the right only; the left span is empty.
    Insert,
    /// Both spans are non-empty and their units differ.
    Replace,
}

/// A contiguous span of both sequences, addressed by half-open unit offsets.
///
/// Regions are produced in strictly increasing order: the `left_end` of one
/// region is the `left_start` of the next (and symmetrically on the right),
/// so the left spans of a full region list concatenate to exactly the left
/// sequence and the right spans to exactly the right sequence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub kind: RegionKind,
    pub left_start: usize,
    pub left_end: usize,
    pub right_start: usize,
    pub right_end: usize,
}

impl Region {
    pub(crate) fn new(kind: RegionKind, left: Range<usize>, right: Range<usize>) -> Self {
        debug_assert!(
            match kind {
                RegionKind::Equal => left.len() == right.len(),
                RegionKind::Delete => !left.is_empty() && right.is_empty(),
                RegionKind::Insert => left.is_empty() && !right.is_empty(),
                RegionKind::Replace => !left.is_empty() && !right.is_empty(),
            },
            "span emptiness must match the region kind: {kind:?} {left:?} {right:?}"
        );

        Self {
            kind,
            left_start: left.start,
            left_end: left.end,
            right_start: right.start,
            right_end: right.end,
        }
    }

    /// The region's span of the left sequence.
    #[must_use]
    pub fn left_range(&self) -> Range<usize> { self.left_start..self.left_end }

    /// The region's span of the right sequence.
    #[must_use]
    pub fn right_range(&self) -> Range<usize> { self.right_start..self.right_end }
}

/// The aligned regions computed by one alignment pass.
///
/// A `RegionList` is a snapshot: any mutation of either sequence invalidates
/// it, and the owning [`Session`](crate::Session) replaces it wholesale
/// rather than patching offsets in place. The revision number identifies the
/// snapshot so that merge requests made against a superseded list can be
/// rejected instead of splicing at stale offsets.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionList {
    revision: u64,
    regions: Vec<Region>,
}

impl RegionList {
    pub(crate) fn new(revision: u64, regions: Vec<Region>) -> Self { Self { revision, regions } }

    /// The revision to echo back in [`Session::merge`](crate::Session::merge).
    #[must_use]
    pub fn revision(&self) -> u64 { self.revision }

    #[must_use]
    pub fn len(&self) -> usize { self.regions.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.regions.is_empty() }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Region> { self.regions.get(index) }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> { self.regions.iter() }
}

impl Index<usize> for RegionList {
    type Output = Region;

    fn index(&self, index: usize) -> &Region { &self.regions[index] }
}

impl<'a> IntoIterator for &'a RegionList {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
