//! Resource mappings
//!
//! A mapping binds one virtual repository path to an ordered list of
//! filesystem paths; the first existing path wins at resolution time,
//! which happens in the repository manager, not here.

use serde::{Deserialize, Serialize};

/// A repository path bound to one or more filesystem paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceMapping {
    /// Virtual repository path, e.g. `/app`
    pub repository_path: String,

    /// Filesystem paths in priority order
    pub filesystem_paths: Vec<String>,
}

impl ResourceMapping {
    pub fn new(
        repository_path: impl Into<String>,
        filesystem_paths: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            repository_path: repository_path.into(),
            filesystem_paths: filesystem_paths.into_iter().map(Into::into).collect(),
        }
    }
}
