//!
//! The project paths.
//!

use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;

///
/// The project paths.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paths {
    /// The project root.
    pub root: PathBuf,
    /// The Solidity sources directory.
    pub sources: PathBuf,
    /// The compiled artifacts directory.
    pub artifacts: PathBuf,
    /// The deployment records directory.
    pub deployments: PathBuf,
    /// The downloaded compiler binaries directory.
    pub compilers: PathBuf,
    /// The dependency packages directory, searched for imports.
    pub packages: PathBuf,
}

impl Paths {
    /// The Solidity sources directory name.
    pub const SOURCES: &'static str = "contracts";

    /// The compiled artifacts directory name.
    pub const ARTIFACTS: &'static str = "artifacts";

    /// The deployment records directory name.
    pub const DEPLOYMENTS: &'static str = "deployments";

    /// The downloaded compiler binaries directory name.
    pub const COMPILERS: &'static str = "solc-bin";

    /// The dependency packages directory name.
    pub const PACKAGES: &'static str = "node_modules";

    ///
    /// Creates the default layout rooted at `root`.
    ///
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_owned(),
            sources: root.join(Self::SOURCES),
            artifacts: root.join(Self::ARTIFACTS),
            deployments: root.join(Self::DEPLOYMENTS),
            compilers: root.join(Self::COMPILERS),
            packages: root.join(Self::PACKAGES),
        }
    }
}
