//!
//! The console status output.
//!

use colored::Colorize;

///
/// The console status output.
///
/// Prints `cargo`-style right-aligned status lines.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    /// Whether the detailed output is enabled.
    verbose: bool,
    /// Whether the status output is suppressed.
    quiet: bool,
}

impl Console {
    /// The status verb column width.
    const VERB_WIDTH: usize = 12;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    ///
    /// Creates a console which prints nothing.
    ///
    pub fn quiet() -> Self {
        Self::new(false, true)
    }

    ///
    /// Prints a status line.
    ///
    pub fn status(&self, verb: &str, message: impl std::fmt::Display) {
        if self.quiet {
            return;
        }
        println!(
            "{} {}",
            format!("{verb:>width$}", width = Self::VERB_WIDTH)
                .bright_green()
                .bold(),
            message
        );
    }

    ///
    /// Prints a status line in the verbose mode only.
    ///
    pub fn detail(&self, verb: &str, message: impl std::fmt::Display) {
        if !self.verbose {
            return;
        }
        self.status(verb, message);
    }

    ///
    /// Prints a warning to the standard error.
    ///
    pub fn warning(&self, message: impl std::fmt::Display) {
        if self.quiet {
            return;
        }
        eprintln!(
            "{} {}",
            format!("{:>width$}", "Warning", width = Self::VERB_WIDTH)
                .bright_yellow()
                .bold(),
            message
        );
    }
}
