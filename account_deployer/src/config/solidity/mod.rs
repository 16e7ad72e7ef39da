//!
//! The Solidity compiler configuration.
//!

pub mod optimizer;
pub mod profile;


use std::collections::BTreeMap;

use serde::Serialize;

use self::optimizer::Optimizer;
use self::profile::Profile;

///
/// The Solidity compiler configuration.
///
/// Holds at least one compiler profile. The first one is the default.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solidity {
    /// The compiler profiles, selected by the source code pragma.
    compilers: Vec<Profile>,
    /// The per-source-path profile overrides.
    overrides: BTreeMap<String, Profile>,
}

impl Solidity {
    /// The default compiler version.
    pub const DEFAULT_VERSION: semver::Version = semver::Version::new(0, 8, 15);

    /// The compiler version of the heavily optimized contracts.
    pub const OPTIMIZED_VERSION: semver::Version = semver::Version::new(0, 8, 17);

    /// The optimizer runs of all profiles.
    pub const OPTIMIZER_RUNS: u32 = 1_000_000;

    /// The heavily optimized contract sources.
    pub const OPTIMIZED_SOURCES: [&'static str; 2] = [
        "contracts/core/EntryPoint.sol",
        "contracts/samples/SimpleAccount.sol",
    ];

    ///
    /// A shortcut constructor.
    ///
    pub fn new(default: Profile) -> Self {
        Self {
            compilers: vec![default],
            overrides: BTreeMap::new(),
        }
    }

    ///
    /// Appends a compiler profile, selectable by the source code pragma.
    ///
    pub fn with_compiler(mut self, profile: Profile) -> Self {
        self.compilers.push(profile);
        self
    }

    ///
    /// Overrides the profile of the specified source path.
    ///
    pub fn with_override(mut self, path: &str, profile: Profile) -> Self {
        self.overrides.insert(path.to_owned(), profile);
        self
    }

    ///
    /// Creates the project configuration.
    ///
    pub fn project() -> Self {
        let default = Profile::new(
            Self::DEFAULT_VERSION,
            Optimizer::new(true, Self::OPTIMIZER_RUNS),
            false,
        );
        let optimized = Profile::new(
            Self::OPTIMIZED_VERSION,
            Optimizer::new(true, Self::OPTIMIZER_RUNS),
            true,
        );

        Self::OPTIMIZED_SOURCES
            .into_iter()
            .fold(Self::new(default), |solidity, path| {
                solidity.with_override(path, optimized.clone())
            })
    }

    ///
    /// Collapses the configuration to its default profile.
    ///
    /// The coverage instrumentation cannot handle multiple compilers or overrides.
    ///
    pub fn collapse_for_coverage(mut self) -> Self {
        self.compilers.truncate(1);
        self.overrides.clear();
        self
    }

    ///
    /// Returns the default profile.
    ///
    pub fn default_profile(&self) -> &Profile {
        &self.compilers[0]
    }

    ///
    /// Returns the compiler profiles.
    ///
    pub fn compilers(&self) -> &[Profile] {
        self.compilers.as_slice()
    }

    ///
    /// Returns the per-source-path overrides.
    ///
    pub fn overrides(&self) -> &BTreeMap<String, Profile> {
        &self.overrides
    }

    ///
    /// Returns the number of distinct profiles.
    ///
    pub fn profiles_count(&self) -> usize {
        let mut profiles: Vec<&Profile> =
            self.compilers.iter().chain(self.overrides.values()).collect();
        profiles.sort();
        profiles.dedup();
        profiles.len()
    }

    ///
    /// Selects the profile for the source file.
    ///
    /// The override wins if present. Otherwise, the first compiler satisfying
    /// the source code pragma is chosen.
    ///
    pub fn profile_for(&self, path: &str, source_code: &str) -> anyhow::Result<&Profile> {
        if let Some(profile) = self.overrides.get(path) {
            return Ok(profile);
        }

        self.compilers
            .iter()
            .find(|profile| profile.matches_pragma(source_code))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No configured compiler satisfies the pragma of `{}`. Configured versions: {}",
                    path,
                    self.compilers
                        .iter()
                        .map(|profile| profile.version.to_string())
                        .collect::<Vec<String>>()
                        .join(", ")
                )
            })
    }
}
