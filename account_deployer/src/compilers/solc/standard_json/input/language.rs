//!
//! The `solc --standard-json` input language.
//!

use serde::Serialize;

///
/// The `solc --standard-json` input language.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Language {
    /// The Solidity language.
    Solidity,
}
