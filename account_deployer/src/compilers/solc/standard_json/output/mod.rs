//!
//! The `solc --standard-json` output.
//!

pub mod contract;
pub mod error;

use std::collections::BTreeMap;

use serde::Deserialize;

use self::contract::Contract;
use self::error::Error;

///
/// The `solc --standard-json` output.
///
#[derive(Debug, Deserialize, Clone)]
pub struct Output {
    /// The file-contract hashmap.
    #[serde(default)]
    pub contracts: Option<BTreeMap<String, BTreeMap<String, Contract>>>,
    /// The compilation errors and warnings.
    #[serde(default)]
    pub errors: Option<Vec<Error>>,
}

impl Output {
    ///
    /// Fails if the output contains errors, and returns the warnings otherwise.
    ///
    pub fn check_errors(&self) -> anyhow::Result<Vec<&Error>> {
        let errors = self.errors.as_deref().unwrap_or_default();

        let error_messages: Vec<String> = errors
            .iter()
            .filter(|error| error.is_error())
            .map(|error| error.to_string())
            .collect();
        if !error_messages.is_empty() {
            anyhow::bail!("`solc` errors found:\n{}", error_messages.join("\n"));
        }

        Ok(errors.iter().filter(|error| !error.is_error()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Output;

    #[test]
    fn errors_fail() {
        let output: Output = serde_json::from_str(
            r#"{
                "errors": [
                    {
                        "severity": "warning",
                        "message": "Unused variable.",
                        "formattedMessage": "Warning: Unused variable."
                    },
                    {
                        "severity": "error",
                        "message": "Expected ';'.",
                        "formattedMessage": "ParserError: Expected ';'."
                    }
                ]
            }"#,
        )
        .expect("Always valid");

        let error = output.check_errors().expect_err("Must fail");

        assert!(error.to_string().contains("ParserError: Expected ';'."));
        assert!(!error.to_string().contains("Unused variable"));
    }

    #[test]
    fn warnings_pass() {
        let output: Output = serde_json::from_str(
            r#"{
                "contracts": {
                    "contracts/A.sol": {
                        "A": {
                            "abi": [],
                            "evm": {
                                "bytecode": { "object": "6080" },
                                "deployedBytecode": { "object": "60" }
                            }
                        }
                    }
                },
                "errors": [
                    { "severity": "warning", "message": "Unused variable." }
                ]
            }"#,
        )
        .expect("Always valid");

        let warnings = output.check_errors().expect("Always valid");

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].to_string(), "Unused variable.");
    }
}
