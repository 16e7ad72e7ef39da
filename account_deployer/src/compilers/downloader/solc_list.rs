//!
//! The Solidity compiler JSON list metadata.
//!

use std::collections::BTreeMap;

use serde::Deserialize;

///
/// The Solidity compiler JSON list metadata.
///
#[derive(Debug, Deserialize)]
pub struct SolcList {
    /// The collection of compiler releases: version to binary file name.
    pub releases: BTreeMap<String, String>,
}

impl SolcList {
    ///
    /// Downloads the list.
    ///
    pub fn download(http_client: &reqwest::blocking::Client, url: reqwest::Url) -> anyhow::Result<Self> {
        http_client
            .get(url.clone())
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.json())
            .map_err(|error| anyhow::anyhow!("solc-bin JSON list `{url}` downloading error: {error}"))
    }

    ///
    /// Returns the binary file name of the version.
    ///
    pub fn binary_name(&self, version: &semver::Version) -> anyhow::Result<&str> {
        self.releases
            .get(version.to_string().as_str())
            .map(String::as_str)
            .ok_or_else(|| anyhow::anyhow!("Binary for version v{version} not found in the solc-bin JSON list"))
    }
}
