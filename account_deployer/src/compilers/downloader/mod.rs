//!
//! The Solidity compiler downloader.
//!

pub mod solc_list;

use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::path::PathBuf;

use crate::compilers::solc::Compiler as SolcCompiler;
use crate::console::Console;

use self::solc_list::SolcList;

///
/// The Solidity compiler downloader.
///
#[derive(Debug)]
pub struct Downloader {
    /// The `reqwest` HTTP client.
    http_client: reqwest::blocking::Client,
    /// The solc-bin JSON list metadata, downloaded on the first use.
    solc_list: Option<SolcList>,
    /// The console output.
    console: Console,
}

impl Downloader {
    /// The solc-bin mirror URL.
    pub const SOLC_BIN_URL: &'static str = "https://binaries.soliditylang.org";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(http_client: reqwest::blocking::Client, console: Console) -> Self {
        Self {
            http_client,
            solc_list: None,
            console,
        }
    }

    ///
    /// Returns the remote platform directory name of the host.
    ///
    pub fn platform_directory() -> anyhow::Result<&'static str> {
        Ok(if cfg!(target_os = "linux") {
            "linux-amd64"
        } else if cfg!(target_os = "macos") {
            "macosx-amd64"
        } else {
            anyhow::bail!("Unsupported platform!")
        })
    }

    ///
    /// Downloads the compiler of the version into the directory, unless it is already there.
    ///
    pub fn download(&mut self, version: &semver::Version, directory: &Path) -> anyhow::Result<PathBuf> {
        let destination_path = directory.join(SolcCompiler::executable_name(version));
        if destination_path.exists() {
            return Ok(destination_path);
        }

        let platform_url = reqwest::Url::parse(
            format!("{}/{}/", Self::SOLC_BIN_URL, Self::platform_directory()?).as_str(),
        )?;

        let solc_list = match self.solc_list.take() {
            Some(solc_list) => solc_list,
            None => {
                let url = platform_url.join("list.json")?;
                self.console
                    .status("Downloading", format!("solc-bin JSON `{url}`"));
                SolcList::download(&self.http_client, url)?
            }
        };
        let binary_name = solc_list.binary_name(version).map(str::to_owned);
        self.solc_list = Some(solc_list);

        let source_url = platform_url.join(binary_name?.as_str())?;
        self.console.status(
            "Downloading",
            format!("binary `{source_url}` => {destination_path:?}"),
        );
        let data = self
            .http_client
            .get(source_url.clone())
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.bytes())
            .map_err(|error| anyhow::anyhow!("Binary `{source_url}` downloading error: {error}"))?;

        std::fs::create_dir_all(directory)?;
        std::fs::write(&destination_path, data)?;
        std::fs::set_permissions(&destination_path, std::fs::Permissions::from_mode(0o755))?;

        Ok(destination_path)
    }
}
