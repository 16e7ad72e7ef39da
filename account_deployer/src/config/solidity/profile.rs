//!
//! The Solidity compiler profile.
//!

use itertools::Itertools;
use serde::Serialize;

use super::optimizer::Optimizer;

///
/// The Solidity compiler profile.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// The `solc` version.
    pub version: semver::Version,
    /// The optimizer settings.
    pub optimizer: Optimizer,
    /// Whether to compile via the Yul intermediate representation.
    #[serde(rename = "viaIR")]
    pub via_ir: bool,
}

impl Profile {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(version: semver::Version, optimizer: Optimizer, via_ir: bool) -> Self {
        Self {
            version,
            optimizer,
            via_ir,
        }
    }

    ///
    /// Checks if the profile's compiler satisfies the `pragma solidity` of the source code.
    ///
    /// Sources without the pragma are compatible with any version.
    /// A bare version pins the exact compiler, unlike the caret default of `semver`.
    ///
    pub fn matches_pragma(&self, source_code: &str) -> bool {
        match source_code.lines().find_map(|line| {
            let mut split = line.split_whitespace();
            if let (Some("pragma"), Some("solidity")) = (split.next(), split.next()) {
                let version = split
                    .map(|comparator| comparator.trim_end_matches(';'))
                    .filter(|comparator| !comparator.is_empty())
                    .map(|comparator| {
                        if comparator.starts_with(|character: char| character.is_ascii_digit()) {
                            format!("={comparator}")
                        } else {
                            comparator.to_owned()
                        }
                    })
                    .join(",");
                semver::VersionReq::parse(version.as_str()).ok()
            } else {
                None
            }
        }) {
            Some(pragma_version_req) => pragma_version_req.matches(&self.version),
            None => true,
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} {}",
            if self.via_ir { "I" } else { "E" },
            if self.optimizer.enabled {
                format!("+{}", self.optimizer.runs)
            } else {
                "-".to_owned()
            },
            self.version,
        )
    }
}
