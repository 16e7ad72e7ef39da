//!
//! The `solc --standard-json` output error.
//!

use serde::Deserialize;

///
/// The `solc --standard-json` output error.
///
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// The error severity: `error`, `warning`, or `info`.
    pub severity: String,
    /// The error message.
    pub message: String,
    /// The error message formatted with the source code location.
    #[serde(default)]
    pub formatted_message: Option<String>,
}

impl Error {
    ///
    /// Whether the error prevents the compilation.
    ///
    pub fn is_error(&self) -> bool {
        self.severity.as_str() == "error"
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.formatted_message
                .as_deref()
                .unwrap_or(self.message.as_str())
        )
    }
}
