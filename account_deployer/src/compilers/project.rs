//!
//! The Solidity project compiler.
//!

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::artifacts::Artifact;
use crate::config::solidity::profile::Profile;
use crate::config::solidity::Solidity;
use crate::config::Config;
use crate::console::Console;

use super::downloader::Downloader;
use super::solc::standard_json::input::Input as SolcStandardJsonInput;
use super::solc::standard_json::output::Output as SolcStandardJsonOutput;
use super::solc::Compiler as SolcCompiler;

///
/// The Solidity project compiler.
///
/// Runs one `solc` job per compiler profile and writes the artifacts.
///
pub struct Project<'a> {
    /// The project configuration.
    config: &'a Config,
    /// The console output.
    console: Console,
}

impl<'a> Project<'a> {
    /// The Solidity source file extension.
    pub const EXTENSION_SOLIDITY: &'static str = "sol";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: &'a Config, console: Console) -> Self {
        Self { config, console }
    }

    ///
    /// Reads all sources of the project, keyed by their normalized path relative to the root.
    ///
    pub fn sources(&self) -> anyhow::Result<BTreeMap<String, String>> {
        let paths = &self.config.paths;
        let pattern = paths
            .sources
            .join("**")
            .join(format!("*.{}", Self::EXTENSION_SOLIDITY));
        let pattern = pattern.to_string_lossy();

        let mut sources = BTreeMap::new();
        for entry in glob::glob(pattern.as_ref())
            .map_err(|error| anyhow::anyhow!("Sources pattern `{pattern}` error: {error}"))?
        {
            let path = entry?;
            let content = std::fs::read_to_string(path.as_path())
                .map_err(|error| anyhow::anyhow!("Source {path:?} reading error: {error}"))?;
            let relative = path.strip_prefix(paths.root.as_path()).unwrap_or(path.as_path());
            sources.insert(crate::utils::path_to_string_normalized(relative), content);
        }
        Ok(sources)
    }

    ///
    /// Groups the sources by the compiler profile they are compiled with.
    ///
    pub fn plan(
        solidity: &Solidity,
        sources: &BTreeMap<String, String>,
    ) -> anyhow::Result<BTreeMap<Profile, Vec<String>>> {
        let mut jobs: BTreeMap<Profile, Vec<String>> = BTreeMap::new();
        for (path, source_code) in sources.iter() {
            let profile = solidity.profile_for(path.as_str(), source_code.as_str())?;
            jobs.entry(profile.to_owned())
                .or_default()
                .push(path.to_owned());
        }
        Ok(jobs)
    }

    ///
    /// Compiles the project and returns the number of written artifacts.
    ///
    pub fn compile(&self, download: bool) -> anyhow::Result<usize> {
        let sources = self.sources()?;
        if sources.is_empty() {
            self.console.warning(format!(
                "No Solidity sources found in {:?}",
                self.config.paths.sources
            ));
            return Ok(0);
        }

        let jobs = Self::plan(&self.config.solidity, &sources)?;
        let owners: BTreeMap<&str, &Profile> = jobs
            .iter()
            .flat_map(|(profile, paths)| paths.iter().map(move |path| (path.as_str(), profile)))
            .collect();

        let mut downloader = if download {
            Some(Downloader::new(
                reqwest::blocking::Client::new(),
                self.console,
            ))
        } else {
            None
        };

        let mut artifacts_count = 0;
        for (profile, paths) in jobs.iter() {
            if profile.via_ir && profile.version < SolcCompiler::FIRST_VIA_IR_VERSION {
                anyhow::bail!(
                    "`viaIR` is not supported by solc v{}. The minimal version is v{}",
                    profile.version,
                    SolcCompiler::FIRST_VIA_IR_VERSION
                );
            }

            let compiler =
                match SolcCompiler::find(self.config.paths.compilers.as_path(), &profile.version) {
                    Ok(compiler) => compiler,
                    Err(error) => match downloader.as_mut() {
                        Some(downloader) => SolcCompiler::new(downloader.download(
                            &profile.version,
                            self.config.paths.compilers.as_path(),
                        )?)?,
                        None => return Err(error),
                    },
                };

            self.console.status(
                "Compiling",
                format!("{} source(s) with solc {}", paths.len(), profile),
            );
            for path in paths.iter() {
                self.console.detail("Source", path);
            }

            let input = SolcStandardJsonInput::from_sources(
                paths
                    .iter()
                    .filter_map(|path| Some((path.to_owned(), sources.get(path)?.to_owned())))
                    .collect(),
                profile,
            );
            let output = compiler.standard_json(
                input,
                Some(self.config.paths.root.as_path()),
                self.include_paths(&profile.version).as_slice(),
                None,
            )?;
            for warning in output.check_errors()? {
                self.console.detail("Warning", warning);
            }

            artifacts_count += self.write_artifacts(output, profile, &owners)?;
        }

        self.console.status(
            "Finished",
            format!("{artifacts_count} artifact(s) in {:?}", self.config.paths.artifacts),
        );
        Ok(artifacts_count)
    }

    ///
    /// Writes the artifacts of the contracts owned by the job's profile.
    ///
    /// Imported sources outside the project are owned by the profile they would be
    /// compiled with on their own, so each of them is written by exactly one job.
    ///
    fn write_artifacts(
        &self,
        output: SolcStandardJsonOutput,
        profile: &Profile,
        owners: &BTreeMap<&str, &Profile>,
    ) -> anyhow::Result<usize> {
        let files = output
            .contracts
            .ok_or_else(|| anyhow::anyhow!("Solidity contracts not found in the output"))?;

        let mut count = 0;
        for (source_name, contracts) in files.into_iter() {
            let owner = match owners.get(source_name.as_str()) {
                Some(owner) => *owner,
                None => self.dependency_profile(source_name.as_str())?,
            };
            if owner != profile {
                continue;
            }

            for (contract_name, contract) in contracts.into_iter() {
                let path = format!("{source_name}:{contract_name}");
                let evm = contract
                    .evm
                    .ok_or_else(|| anyhow::anyhow!("EVM object of the contract `{path}` not found"))?;
                let bytecode = evm
                    .bytecode
                    .ok_or_else(|| anyhow::anyhow!("EVM bytecode of the contract `{path}` not found"))?;
                let deployed_bytecode = evm.deployed_bytecode.ok_or_else(|| {
                    anyhow::anyhow!("EVM runtime bytecode of the contract `{path}` not found")
                })?;

                let artifact = Artifact::new(
                    contract_name,
                    source_name.clone(),
                    contract.abi.unwrap_or_else(|| serde_json::json!([])),
                    bytecode.object.as_str(),
                    deployed_bytecode.object.as_str(),
                );
                let artifact_path = artifact.write(self.config.paths.artifacts.as_path())?;
                self.console.detail("Writing", format!("{artifact_path:?}"));
                count += 1;
            }
        }
        Ok(count)
    }

    ///
    /// Returns the profile of an imported source outside the project sources.
    ///
    /// The source code is looked up in the project root and the packages directory
    /// to match its pragma. An unreadable source gets the default profile.
    ///
    fn dependency_profile(&self, source_name: &str) -> anyhow::Result<&Profile> {
        let paths = &self.config.paths;
        let source_code = [paths.root.join(source_name), paths.packages.join(source_name)]
            .into_iter()
            .find_map(|path| std::fs::read_to_string(path).ok());
        match source_code {
            Some(source_code) => self
                .config
                .solidity
                .profile_for(source_name, source_code.as_str()),
            None => Ok(self.config.solidity.default_profile()),
        }
    }

    ///
    /// Returns the import search paths supported by the compiler version.
    ///
    fn include_paths(&self, version: &semver::Version) -> Vec<PathBuf> {
        let packages = self.config.paths.packages.as_path();
        if packages.is_dir() && *version >= SolcCompiler::FIRST_INCLUDE_PATH_VERSION {
            vec![packages.to_owned()]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::Path;

    use super::Project;
    use super::SolcStandardJsonOutput;
    use crate::artifacts::Artifact;
    use crate::config::Config;
    use crate::console::Console;
    use crate::environment::Environment;

    const PRAGMA: &str = "// SPDX-License-Identifier: GPL-3.0\npragma solidity ^0.8.12;\n";

    fn sources() -> BTreeMap<String, String> {
        [
            "contracts/core/EntryPoint.sol",
            "contracts/core/StakeManager.sol",
            "contracts/samples/SimpleAccount.sol",
            "contracts/samples/SimpleAccountFactory.sol",
        ]
        .into_iter()
        .map(|path| (path.to_owned(), PRAGMA.to_owned()))
        .collect()
    }

    #[test]
    fn plan_with_overrides() {
        let config = Config::new(Path::new("."), &Environment::default());

        let jobs = Project::plan(&config.solidity, &sources()).expect("Always valid");

        assert_eq!(jobs.len(), 2);
        let default = jobs
            .get(config.solidity.default_profile())
            .expect("Always exists");
        assert_eq!(
            default,
            &vec![
                "contracts/core/StakeManager.sol".to_owned(),
                "contracts/samples/SimpleAccountFactory.sol".to_owned(),
            ]
        );
        let optimized = jobs
            .iter()
            .find(|(profile, _)| profile.via_ir)
            .map(|(_, paths)| paths)
            .expect("Always exists");
        assert_eq!(
            optimized,
            &vec![
                "contracts/core/EntryPoint.sol".to_owned(),
                "contracts/samples/SimpleAccount.sol".to_owned(),
            ]
        );
    }

    #[test]
    fn plan_in_coverage_mode() {
        let environment = Environment {
            coverage: true,
            ..Environment::default()
        };
        let config = Config::new(Path::new("."), &environment);

        let jobs = Project::plan(&config.solidity, &sources()).expect("Always valid");

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs.values().next().map(Vec::len), Some(4));
    }

    #[test]
    fn sources_discovery() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let samples = directory.path().join("contracts").join("samples");
        std::fs::create_dir_all(samples.as_path()).expect("Always valid");
        std::fs::write(samples.join("SimpleAccountFactory.sol"), PRAGMA).expect("Always valid");
        std::fs::write(samples.join("README.md"), "# Samples").expect("Always valid");
        let config = Config::new(directory.path(), &Environment::default());

        let sources = Project::new(&config, Console::quiet())
            .sources()
            .expect("Always valid");

        assert_eq!(
            sources.keys().collect::<Vec<&String>>(),
            vec!["contracts/samples/SimpleAccountFactory.sol"]
        );
    }

    fn output(source_name: &str, bytecode: &str) -> SolcStandardJsonOutput {
        serde_json::from_value(serde_json::json!({
            "contracts": {
                source_name: {
                    "Address": {
                        "abi": [],
                        "evm": {
                            "bytecode": { "object": bytecode },
                            "deployedBytecode": { "object": bytecode }
                        }
                    }
                }
            }
        }))
        .expect("Always valid")
    }

    #[test]
    fn dependency_written_by_its_own_profile() {
        const SOURCE_NAME: &str = "@openzeppelin/contracts/utils/Address.sol";

        let directory = tempfile::tempdir().expect("Temporary directory");
        let config = Config::new(directory.path(), &Environment::default());
        let dependency = config.paths.packages.join(SOURCE_NAME);
        std::fs::create_dir_all(dependency.parent().expect("Always exists")).expect("Always valid");
        std::fs::write(dependency, PRAGMA).expect("Always valid");

        let project = Project::new(&config, Console::quiet());
        let default = config.solidity.default_profile();
        let optimized = config
            .solidity
            .overrides()
            .values()
            .next()
            .expect("Always exists");
        let owners = BTreeMap::new();

        let written = project
            .write_artifacts(output(SOURCE_NAME, "aa"), default, &owners)
            .expect("Always valid");
        let skipped = project
            .write_artifacts(output(SOURCE_NAME, "bb"), optimized, &owners)
            .expect("Always valid");

        assert_eq!(written, 1);
        assert_eq!(skipped, 0);
        let artifact = Artifact::read(
            Artifact::path(config.paths.artifacts.as_path(), SOURCE_NAME, "Address").as_path(),
        )
        .expect("Always valid");
        assert_eq!(artifact.bytecode, "0xaa");
    }

    #[test]
    fn compile_without_sources() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let config = Config::new(directory.path(), &Environment::default());

        let count = Project::new(&config, Console::quiet())
            .compile(false)
            .expect("Always valid");

        assert_eq!(count, 0);
    }
}
