//! Errors that abort a build

use std::path::PathBuf;
use thiserror::Error;

/// Fatal site errors
#[derive(Debug, Error)]
pub enum SiteError {
    /// The YAML between the `---` lines could not be parsed
    #[error("invalid front matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A required page or template is missing
    #[error("required file not found: {0:?}")]
    MissingFile(PathBuf),
}
