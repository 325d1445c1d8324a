//! Compiler options.
//!
//! Options are usually read from a small TOML file:
//!
//! ```toml
//! warnings-as-errors = true
//! suppressed-warnings = ["B-5-1"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use wixbal_error_reporting::{DiagnosticKind, DiagnosticMessage};

/// How warnings are treated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CompilerOptions {
    /// Report every warning as an error
    pub warnings_as_errors: bool,

    /// Drop every warning
    pub suppress_all_warnings: bool,

    /// Warning codes to drop
    pub suppressed_warnings: BTreeSet<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read compiler options from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid compiler options: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CompilerOptions {
    /// Parse options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] for malformed text or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn suppress_warning(mut self, code: impl Into<String>) -> Self {
        self.suppressed_warnings.insert(code.into());
        self
    }

    /// Apply the warning policy to a diagnostic.
    ///
    /// Returns `None` if the diagnostic is suppressed. Suppression wins over
    /// escalation. Errors pass through untouched.
    pub fn apply(&self, mut diagnostic: DiagnosticMessage) -> Option<DiagnosticMessage> {
        if diagnostic.kind != DiagnosticKind::Warning {
            return Some(diagnostic);
        }

        let suppressed = self.suppress_all_warnings
            || diagnostic
                .code
                .as_ref()
                .is_some_and(|code| self.suppressed_warnings.contains(code));
        if suppressed {
            tracing::trace!(code = ?diagnostic.code, "Suppressed warning");
            return None;
        }

        if self.warnings_as_errors {
            diagnostic.kind = DiagnosticKind::Error;
        }
        Some(diagnostic)
    }
}
