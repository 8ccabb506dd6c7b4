mod error;
mod store;

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use error::SessionError;

use crate::{
    aligner::{RegionKind, RegionList, align},
    tokenizer::Granularity,
};

/// The direction a merge writes in: `ToRight` applies the left side's version
/// of a region onto the right sequence, `ToLeft` the opposite.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeDirection {
    ToLeft,
    ToRight,
}

impl Display for MergeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MergeDirection::ToLeft => write!(f, "to left"),
            MergeDirection::ToRight => write!(f, "to right"),
        }
    }
}

/// One side's live sequence of units together with its optional backing
/// store. The in-memory units are authoritative; the store is overwritten
/// with their concatenation after every merge.
#[derive(Debug, Clone)]
struct Sequence {
    units: Vec<String>,
    store: Option<PathBuf>,
}

impl Sequence {
    fn from_text(text: &str, granularity: Granularity, store: Option<PathBuf>) -> Self {
        Self {
            units: granularity.split(text),
            store,
        }
    }

    fn text(&self) -> String { self.units.concat() }
}

/// A live comparison between two text sources.
///
/// The session owns both sequences and the [`RegionList`] of the most recent
/// alignment. [`merge`](Session::merge) is the only mutating operation: it
/// splices one differing region across, persists both backing stores, and
/// realigns from scratch. Offsets are never patched incrementally; a merge
/// invalidates the previous region list entirely, which is why merge
/// requests must echo the revision of the list they index into.
///
/// Single-threaded and synchronous: every call runs to completion before the
/// next one is accepted, and a failed call leaves the session untouched.
#[derive(Debug)]
pub struct Session {
    granularity: Granularity,
    left: Sequence,
    right: Sequence,
    regions: RegionList,
    revision: u64,
}

impl Session {
    /// Starts a session over two file-backed sources.
    ///
    /// Both files are read fully before any state is kept, so a failure on
    /// either side leaves nothing behind.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if either file cannot be read and
    /// [`SessionError::Decode`] if either holds something other than UTF-8
    /// text.
    pub fn open(
        left_path: impl AsRef<Path>,
        right_path: impl AsRef<Path>,
        granularity: Granularity,
    ) -> Result<Self, SessionError> {
        let left_path = left_path.as_ref();
        let right_path = right_path.as_ref();

        let left_text = store::read_store(left_path)?;
        let right_text = store::read_store(right_path)?;

        Ok(Self::from_sequences(
            Sequence::from_text(&left_text, granularity, Some(left_path.to_path_buf())),
            Sequence::from_text(&right_text, granularity, Some(right_path.to_path_buf())),
            granularity,
        ))
    }

    /// Starts a session over two in-memory sources. Without backing stores,
    /// merges mutate the buffers but persist nothing.
    #[must_use]
    pub fn from_strings(left: &str, right: &str, granularity: Granularity) -> Self {
        Self::from_sequences(
            Sequence::from_text(left, granularity, None),
            Sequence::from_text(right, granularity, None),
            granularity,
        )
    }

    fn from_sequences(left: Sequence, right: Sequence, granularity: Granularity) -> Self {
        let regions = RegionList::new(0, align(&left.units, &right.units));

        Self {
            granularity,
            left,
            right,
            regions,
            revision: 0,
        }
    }

    /// The region list computed by the most recent alignment. Read-only; for
    /// re-rendering after non-mutating host events.
    #[must_use]
    pub fn regions(&self) -> &RegionList { &self.regions }

    /// The granularity this session compares at.
    #[must_use]
    pub fn granularity(&self) -> Granularity { self.granularity }

    /// Current content of the left source.
    #[must_use]
    pub fn left_text(&self) -> String { self.left.text() }

    /// Current content of the right source.
    #[must_use]
    pub fn right_text(&self) -> String { self.right.text() }

    /// Applies the content of region `region_index` from one side onto the
    /// other, persists both backing stores, realigns, and returns the fresh
    /// region list.
    ///
    /// `revision` must be the [`RegionList::revision`] of the list the index
    /// refers to; it guards against splicing at offsets that an earlier
    /// merge has already shifted.
    ///
    /// All-or-nothing: on any error the sequences, the region list, and the
    /// backing stores are left as they were.
    ///
    /// # Errors
    ///
    /// - [`SessionError::StaleRegion`] if `revision` is not the current one.
    /// - [`SessionError::RegionOutOfRange`] if `region_index` exceeds the
    ///   current list.
    /// - [`SessionError::NothingToMerge`] if the region is
    ///   [`RegionKind::Equal`].
    /// - [`SessionError::Io`] if a backing store cannot be rewritten.
    pub fn merge(
        &mut self,
        revision: u64,
        region_index: usize,
        direction: MergeDirection,
    ) -> Result<&RegionList, SessionError> {
        if revision != self.revision {
            return Err(SessionError::StaleRegion {
                provided: revision,
                current: self.revision,
            });
        }

        let region = self
            .regions
            .get(region_index)
            .ok_or(SessionError::RegionOutOfRange {
                index: region_index,
                len: self.regions.len(),
            })?;

        if region.kind == RegionKind::Equal {
            return Err(SessionError::NothingToMerge {
                index: region_index,
            });
        }

        let (source, target) = match direction {
            MergeDirection::ToRight => (&self.left, &self.right),
            MergeDirection::ToLeft => (&self.right, &self.left),
        };
        let (source_range, target_range) = match direction {
            MergeDirection::ToRight => (region.left_range(), region.right_range()),
            MergeDirection::ToLeft => (region.right_range(), region.left_range()),
        };

        // The spliced sequence is built aside and committed only once both
        // write-backs have succeeded, keeping failed merges side-effect-free
        // in memory. The untouched side is rewritten first, with its
        // unchanged content, so failing on the modified side's write leaves
        // both stores exactly as they were.
        let mut spliced = target.units.clone();
        spliced.splice(
            target_range,
            source.units[source_range].iter().cloned(),
        );

        let (untouched_store, untouched_text, modified_store) = match direction {
            MergeDirection::ToRight => (&self.left.store, self.left.text(), &self.right.store),
            MergeDirection::ToLeft => (&self.right.store, self.right.text(), &self.left.store),
        };
        if let Some(path) = untouched_store {
            store::write_store(path, &untouched_text)?;
        }
        if let Some(path) = modified_store {
            store::write_store(path, &spliced.concat())?;
        }

        match direction {
            MergeDirection::ToRight => self.right.units = spliced,
            MergeDirection::ToLeft => self.left.units = spliced,
        }
        self.revision += 1;
        self.regions = RegionList::new(self.revision, align(&self.left.units, &self.right.units));

        Ok(&self.regions)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    /// Merges every differing region in `direction` until both sides agree,
    /// always indexing into the freshest region list.
    fn merge_until_converged(session: &mut Session, direction: MergeDirection) {
        loop {
            let next = session
                .regions()
                .iter()
                .position(|region| region.kind != RegionKind::Equal);

            match next {
                Some(index) => {
                    let revision = session.regions().revision();
                    session.merge(revision, index, direction).unwrap();
                }
                None => return,
            }
        }
    }

    #[test]
    fn test_merge_replace_to_right() {
        let mut session = Session::from_strings("kitten", "sitting", Granularity::Character);

        // Region 0 is the k -> s replace; take the left version.
        session.merge(0, 0, MergeDirection::ToRight).unwrap();

        assert_eq!(session.left_text(), "kitten");
        assert_eq!(session.right_text(), "kitting");
    }

    #[test]
    fn test_merge_delete_to_right_inserts_into_right() {
        // "b\n" exists only on the left; applying it rightwards must insert
        // it at the aligned offset and realign to a single equal region.
        let mut session = Session::from_strings("a\nb\nc\n", "a\nc\n", Granularity::Line);

        let delete_index = session
            .regions()
            .iter()
            .position(|region| region.kind == RegionKind::Delete)
            .unwrap();
        let regions = session
            .merge(0, delete_index, MergeDirection::ToRight)
            .unwrap();

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].kind, RegionKind::Equal);
        assert_eq!(session.right_text(), "a\nb\nc\n");
    }

    #[test]
    fn test_merge_insert_to_right_removes_from_right() {
        let mut session = Session::from_strings("hello", "hel!lo", Granularity::Character);

        let insert_index = session
            .regions()
            .iter()
            .position(|region| region.kind == RegionKind::Insert)
            .unwrap();
        session
            .merge(0, insert_index, MergeDirection::ToRight)
            .unwrap();

        assert_eq!(session.right_text(), "hello");
    }

    #[test]
    fn test_merge_equal_region_is_rejected() {
        let mut session = Session::from_strings("same", "same", Granularity::Character);

        let result = session.merge(0, 0, MergeDirection::ToLeft);
        assert!(matches!(
            result,
            Err(SessionError::NothingToMerge { index: 0 })
        ));
        assert_eq!(session.left_text(), "same");
        assert_eq!(session.right_text(), "same");
    }

    #[test]
    fn test_stale_revision_is_rejected_and_state_unchanged() {
        let mut session = Session::from_strings("kitten", "sitting", Granularity::Character);

        session.merge(0, 0, MergeDirection::ToRight).unwrap();
        let left_before = session.left_text();
        let right_before = session.right_text();
        let regions_before = session.regions().clone();

        // Index 0 was valid for revision 0's list; the list has moved on.
        let result = session.merge(0, 0, MergeDirection::ToRight);

        assert!(matches!(
            result,
            Err(SessionError::StaleRegion {
                provided: 0,
                current: 1,
            })
        ));
        assert_eq!(session.left_text(), left_before);
        assert_eq!(session.right_text(), right_before);
        assert_eq!(*session.regions(), regions_before);
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut session = Session::from_strings("abc", "abc", Granularity::Character);

        let result = session.merge(0, 5, MergeDirection::ToLeft);
        assert!(matches!(
            result,
            Err(SessionError::RegionOutOfRange { index: 5, len: 1 })
        ));
    }

    #[test_case("kitten", "sitting", Granularity::Character)]
    #[test_case("the quick brown fox", "a slow brown dog", Granularity::Character)]
    #[test_case("a\nb\nc\n", "a\nx\ny\nc\n", Granularity::Line)]
    #[test_case("", "grown from nothing", Granularity::Character)]
    #[test_case("shrunk to nothing", "", Granularity::Character)]
    fn test_merging_everything_to_right_converges(
        left: &str,
        right: &str,
        granularity: Granularity,
    ) {
        let mut session = Session::from_strings(left, right, granularity);
        merge_until_converged(&mut session, MergeDirection::ToRight);

        assert_eq!(session.right_text(), left);
        assert_eq!(session.left_text(), left);

        let regions = session.regions();
        if left.is_empty() {
            assert!(regions.is_empty());
        } else {
            assert_eq!(regions.len(), 1);
            assert_eq!(regions[0].kind, RegionKind::Equal);
        }
    }

    #[test]
    fn test_merging_everything_to_left_converges() {
        let mut session =
            Session::from_strings("first\nshared\nlast\n", "other\nshared\n", Granularity::Line);
        merge_until_converged(&mut session, MergeDirection::ToLeft);

        assert_eq!(session.left_text(), "other\nshared\n");
        assert_eq!(session.right_text(), "other\nshared\n");
    }

    #[test]
    fn test_revision_advances_once_per_merge() {
        let mut session = Session::from_strings("ab", "ax", Granularity::Character);
        assert_eq!(session.regions().revision(), 0);

        let regions = session.merge(0, 1, MergeDirection::ToRight).unwrap();
        assert_eq!(regions.revision(), 1);
    }

    #[test]
    fn test_in_memory_session_reports_granularity() {
        let session = Session::from_strings("a", "b", Granularity::Line);
        assert_eq!(session.granularity(), Granularity::Line);
    }
}
