//! Errors for the fallible parts of the compiler API.
//!
//! Problems in the markup itself are diagnostics, not errors.

use crate::options::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: wixbal_xml::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("an extension is already registered for namespace '{0}'")]
    DuplicateExtension(String),

    #[error("namespace '{0}' cannot be claimed by an extension")]
    ReservedNamespace(String),
}

pub type Result<T> = std::result::Result<T, Error>;
