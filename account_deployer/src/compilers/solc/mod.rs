//!
//! The Solidity compiler.
//!

pub mod standard_json;

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use self::standard_json::input::Input as StandardJsonInput;
use self::standard_json::output::Output as StandardJsonOutput;

///
/// The Solidity compiler.
///
#[derive(Debug)]
pub struct Compiler {
    /// The executable path.
    pub executable: PathBuf,
}

impl Compiler {
    /// The first version of `solc`, where `--via-ir` codegen mode is supported.
    pub const FIRST_VIA_IR_VERSION: semver::Version = semver::Version::new(0, 8, 13);

    /// The first version of `solc`, where `--include-path` is supported.
    pub const FIRST_INCLUDE_PATH_VERSION: semver::Version = semver::Version::new(0, 8, 8);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: PathBuf) -> anyhow::Result<Self> {
        if let Err(error) = which::which(executable.as_path()) {
            anyhow::bail!(
                "The `{}` executable not found in ${{PATH}}: {}",
                executable.to_string_lossy(),
                error
            );
        }
        Ok(Self { executable })
    }

    ///
    /// Returns the executable file name of the version.
    ///
    pub fn executable_name(version: &semver::Version) -> String {
        format!("solc-{version}")
    }

    ///
    /// Finds the compiler of the version.
    ///
    /// The binaries directory is checked first, then `${PATH}`.
    ///
    pub fn find(directory: &Path, version: &semver::Version) -> anyhow::Result<Self> {
        let local = directory.join(Self::executable_name(version));
        if local.is_file() {
            return Self::new(local);
        }
        Self::new(PathBuf::from(Self::executable_name(version)))
    }

    ///
    /// Compiles the Solidity `--standard-json` input.
    ///
    pub fn standard_json(
        &self,
        input: StandardJsonInput,
        base_path: Option<&Path>,
        include_paths: &[PathBuf],
        allow_paths: Option<&Path>,
    ) -> anyhow::Result<StandardJsonOutput> {
        let executable = self.executable.to_string_lossy();

        let mut command = std::process::Command::new(self.executable.as_path());
        command.stdin(std::process::Stdio::piped());
        command.stdout(std::process::Stdio::piped());
        command.stderr(std::process::Stdio::piped());
        command.arg("--standard-json");

        if let Some(base_path) = base_path {
            command.arg("--base-path");
            command.arg(base_path);
        }
        for include_path in include_paths.iter() {
            command.arg("--include-path");
            command.arg(include_path);
        }
        if let Some(allow_paths) = allow_paths {
            command.arg("--allow-paths");
            command.arg(allow_paths);
        }

        let input_json = serde_json::to_vec(&input)
            .map_err(|error| anyhow::anyhow!("{executable} input serialization error: {error}"))?;

        let mut process = command
            .spawn()
            .map_err(|error| anyhow::anyhow!("{executable} subprocess spawning error: {error:?}"))?;
        process
            .stdin
            .take()
            .ok_or_else(|| anyhow::anyhow!("{executable} stdin getting error"))?
            .write_all(input_json.as_slice())
            .map_err(|error| anyhow::anyhow!("{executable} stdin writing error: {error:?}"))?;

        let output = process
            .wait_with_output()
            .map_err(|error| anyhow::anyhow!("{executable} subprocess output error: {error:?}"))?;
        if !output.status.success() {
            anyhow::bail!(
                "{} error: {}",
                executable,
                String::from_utf8_lossy(output.stderr.as_slice())
            );
        }

        serde_json::from_slice(output.stdout.as_slice()).map_err(|error| {
            anyhow::anyhow!(
                "{} subprocess output parsing error: {}\n{}",
                executable,
                error,
                String::from_utf8_lossy(output.stdout.as_slice()),
            )
        })
    }
}
