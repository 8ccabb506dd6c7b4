use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can fail inside a comparison session.
///
/// Every failure is deterministic given the same input, so none of them
/// are worth retrying; each variant carries the detail the host needs to
/// present to the user.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A backing store could not be read or written.
    #[error("failed to access `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A backing store holds content that is not valid UTF-8 text.
    #[error("`{path}` does not contain valid UTF-8 text")]
    Decode { path: PathBuf },

    /// The caller indexed into a region list that has since been replaced
    /// by a newer alignment.
    #[error("region list revision {provided} is stale, the current revision is {current}")]
    StaleRegion { provided: u64, current: u64 },

    /// Merge was requested on an `Equal` region; both sides already agree.
    #[error("region {index} is identical on both sides, there is nothing to merge")]
    NothingToMerge { index: usize },

    /// The region index exceeds the current region list.
    #[error("region index {index} is out of range, the current list has {len} regions")]
    RegionOutOfRange { index: usize, len: usize },
}
