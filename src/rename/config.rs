//! Configuration for regex rename operations.
//!
//! Settings are read from the `[rxrename]` section of the user config file
//! (`~/.config/rx-rename.toml`) and combined with CLI arguments.
//!
//! # Example config file section
//!
//! ```toml
//! [rxrename]
//! dryrun = false
//! force = false
//! ignore_case = false
//! quiet = false
//! replace_all = false
//! verbose = false
//! ```

use std::path::PathBuf;
use std::{fmt, fs};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::rename::{Pattern, Substitution, SubstitutionMode};

/// Config from the user config file.
#[derive(Debug, Default, Deserialize)]
pub struct RxRenameConfig {
    #[serde(default)]
    pub dryrun: bool,
    #[serde(default)]
    pub force: bool,
    #[serde(default)]
    pub ignore_case: bool,
    #[serde(default)]
    pub quiet: bool,
    #[serde(default)]
    pub replace_all: bool,
    #[serde(default)]
    pub verbose: bool,
}

/// Wrapper needed for parsing the config section.
#[derive(Debug, Default, Deserialize)]
struct UserConfig {
    #[serde(default)]
    rxrename: RxRenameConfig,
}

/// Final config created from CLI arguments and user config file.
#[derive(Debug, Default, Clone)]
pub struct RenameConfig {
    /// Regular expression to search for.
    pub pattern: String,
    /// Replacement template with `$N` and `$&` group references.
    pub replacement: String,
    /// Directory whose entries are renamed.
    pub root: PathBuf,
    pub dryrun: bool,
    pub force: bool,
    pub ignore_case: bool,
    pub insert_after: bool,
    pub insert_before: bool,
    pub quiet: bool,
    pub replace_all: bool,
    pub verbose: bool,
}

impl RxRenameConfig {
    /// Try to read user config from the file if it exists.
    /// Otherwise, fall back to default config.
    ///
    /// # Errors
    /// Returns an error if config file exists but cannot be read or parsed.
    pub fn get_user_config() -> Result<Self> {
        let Some(path) = crate::config::config_path() else {
            return Ok(Self::default());
        };

        match fs::read_to_string(path) {
            Ok(content) => {
                Self::from_toml_str(&content).map_err(|e| anyhow!("Failed to parse config file {}:\n{e}", path.display()))
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(anyhow!("Failed to read config file {}: {error}", path.display())),
        }
    }

    /// Parse config from a TOML string.
    ///
    /// # Errors
    /// Returns an error if the TOML string is invalid.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str::<UserConfig>(toml_str)
            .map(|config| config.rxrename)
            .with_context(|| "Failed to parse config TOML")
    }
}

impl RenameConfig {
    /// Combine user config with values given on the command line.
    /// Boolean flags are enabled if either source enables them.
    #[must_use]
    pub fn with_user_config(self, user_config: &RxRenameConfig) -> Self {
        Self {
            dryrun: self.dryrun || user_config.dryrun,
            force: self.force || user_config.force,
            ignore_case: self.ignore_case || user_config.ignore_case,
            quiet: self.quiet || user_config.quiet,
            replace_all: self.replace_all || user_config.replace_all,
            verbose: self.verbose || user_config.verbose,
            ..self
        }
    }

    #[must_use]
    pub const fn mode(&self) -> SubstitutionMode {
        SubstitutionMode::from_flags(self.replace_all, self.insert_before, self.insert_after)
    }

    /// Compile the pattern and build the substitution engine.
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regular expression
    /// or both insert modes are enabled.
    pub fn substitution(&self) -> Result<Substitution> {
        if self.insert_before && self.insert_after {
            anyhow::bail!("Insert before and insert after cannot be used together");
        }
        let pattern = Pattern::new(&self.pattern, self.ignore_case, self.replace_all)?;
        Ok(Substitution::new(pattern, self.replacement.clone(), self.mode()))
    }
}

impl fmt::Display for RenameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Config:")?;
        writeln!(f, "  pattern: '{}'", self.pattern)?;
        writeln!(f, "  replacement: '{}'", self.replacement)?;
        writeln!(f, "  root: {}", self.root.display())?;
        writeln!(f, "  mode: {}", self.mode())?;
        writeln!(f, "  dryrun: {}", self.dryrun)?;
        writeln!(f, "  force: {}", self.force)?;
        writeln!(f, "  ignore_case: {}", self.ignore_case)?;
        writeln!(f, "  quiet: {}", self.quiet)?;
        write!(f, "  verbose: {}", self.verbose)
    }
}
