//! Two-way text comparison and selective merge.
//!
//! The crate aligns two text sources into a list of contiguous [`Region`]s
//! (equal, insert, delete, or replace) and lets a host apply any differing
//! region from one side onto the other. After every merge the alignment is
//! recomputed from scratch, so region offsets are never patched incrementally
//! and never go stale silently.
//!
//! ```
//! use collate_text::{Granularity, MergeDirection, RegionKind, Session};
//!
//! let mut session = Session::from_strings("abcdef", "abXdef", Granularity::Character);
//! assert_eq!(session.regions()[1].kind, RegionKind::Replace);
//!
//! let revision = session.regions().revision();
//! let regions = session.merge(revision, 1, MergeDirection::ToRight).unwrap();
//!
//! // Both sides now read "abcdef".
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].kind, RegionKind::Equal);
//! ```

mod aligner;
mod session;
mod tokenizer;

pub use aligner::{Region, RegionKind, RegionList, align};
pub use session::{MergeDirection, Session, SessionError};
pub use tokenizer::Granularity;
