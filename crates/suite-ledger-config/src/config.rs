// crates/suite-ledger-config/src/config.rs
// ============================================================================
// Module: Suite Ledger Configuration
// Description: Configuration loading and validation for Suite Ledger.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: suite-ledger-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section is optional and falls back to defaults that reproduce the
//! conventional Node.js corpus layout. Relative paths resolve against the
//! directory holding the config file.
//!
//! ## Invariants
//! - Commands always name a program.
//! - `layout.corpus` and `layout.corpus_tests` stay below their parents, so
//!   the scan root is always inside the corpus.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use suite_ledger_core::Layout;
use suite_ledger_core::LogFormat;
use suite_ledger_core::TextRewrite;
use suite_ledger_core::runtime::DEFAULT_SCRIPT_EXTENSIONS;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "suite-ledger.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "SUITE_LEDGER_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of argv entries in a command.
pub(crate) const MAX_COMMAND_ARGS: usize = 64;

// ============================================================================
// SECTION: Source
// ============================================================================

/// Where configuration is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    /// Config file path.
    pub path: PathBuf,
    /// When false, a missing file yields the built-in defaults.
    pub required: bool,
}

impl ConfigSource {
    /// Resolves the config path from the CLI, the environment, or the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the environment path exceeds limits.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Ok(Self::required(path));
        }
        if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
            if env_path.len() > MAX_TOTAL_PATH_LENGTH {
                return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
            }
            if !env_path.trim().is_empty() {
                return Ok(Self::required(Path::new(&env_path)));
            }
        }
        Ok(Self {
            path: PathBuf::from(DEFAULT_CONFIG_NAME),
            required: false,
        })
    }

    /// Returns a source whose file must exist.
    #[must_use]
    pub fn required(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            required: true,
        }
    }
}

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Suite Ledger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteLedgerConfig {
    /// Filesystem layout.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Corpus scan settings.
    #[serde(default)]
    pub scan: ScanConfig,
    /// Corpus checkout command.
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
    /// Source formatter command.
    #[serde(default)]
    pub formatter: FormatterConfig,
    /// Literal rewrites applied before formatting, in order.
    #[serde(default = "default_rewrites")]
    pub rewrites: Vec<TextRewrite>,
    /// Test runtime command.
    #[serde(default)]
    pub runtime: RuntimeConfig,
    /// Report text and CI markdown settings.
    #[serde(default)]
    pub report: ReportConfig,
    /// Progress log settings.
    #[serde(default)]
    pub log: LogConfig,
    /// Directory relative paths resolve against (not serialized).
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for SuiteLedgerConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            scan: ScanConfig::default(),
            bootstrap: BootstrapConfig::default(),
            formatter: FormatterConfig::default(),
            rewrites: default_rewrites(),
            runtime: RuntimeConfig::default(),
            report: ReportConfig::default(),
            log: LogConfig::default(),
            base_dir: PathBuf::from("."),
        }
    }
}

impl SuiteLedgerConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(&ConfigSource::resolve(path)?)
    }

    /// Loads configuration from an explicit source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load_from(source: &ConfigSource) -> Result<Self, ConfigError> {
        validate_path(&source.path)?;
        let base_dir = match source.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !source.required && !source.path.exists() {
            let config = Self {
                base_dir,
                ..Self::default()
            };
            config.validate()?;
            return Ok(config);
        }
        let bytes = fs::read(&source.path)
            .map_err(|err| ConfigError::Io(format!("{}: {err}", source.path.display())))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content, &base_dir)
    }

    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.base_dir = base_dir.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        self.scan.validate()?;
        self.bootstrap.validate()?;
        validate_command("formatter.command", &self.formatter.command)?;
        for (index, rewrite) in self.rewrites.iter().enumerate() {
            if rewrite.from.is_empty() {
                return Err(ConfigError::Invalid(format!("rewrites[{index}].from must be non-empty")));
            }
        }
        self.runtime.validate()?;
        self.report.validate()
    }

    /// Resolves the filesystem layout against the config directory.
    #[must_use]
    pub fn resolve_layout(&self) -> Layout {
        let test_root = self.base_dir.join(&self.layout.root);
        let corpus_root = test_root.join(&self.layout.corpus);
        Layout {
            scan_root: corpus_root.join(&self.layout.corpus_tests),
            corpus_root,
            manifest_path: test_root.join(&self.layout.manifest),
            summary_path: test_root.join(&self.layout.summary),
            test_root,
        }
    }

    /// Returns the bootstrap argv, or `None` when bootstrapping is disabled.
    #[must_use]
    pub fn bootstrap_command(&self) -> Option<&[String]> {
        self.bootstrap.enabled.then_some(self.bootstrap.command.as_slice())
    }

    /// Returns the directory the bootstrap command runs from.
    #[must_use]
    pub fn bootstrap_working_dir(&self) -> PathBuf {
        match &self.bootstrap.working_dir {
            Some(dir) => self.base_dir.join(dir),
            None => self.base_dir.clone(),
        }
    }

    /// Returns the directory the test runtime runs from; the test root by default.
    #[must_use]
    pub fn runtime_working_dir(&self) -> PathBuf {
        match &self.runtime.working_dir {
            Some(dir) => self.base_dir.join(dir),
            None => self.base_dir.join(&self.layout.root),
        }
    }
}

// ============================================================================
// SECTION: Layout
// ============================================================================

/// Filesystem layout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Test root holding groups, manifest, and summary.
    pub root: String,
    /// Corpus checkout directory, relative to the root.
    pub corpus: String,
    /// Scanned corpus subdirectory, relative to the corpus.
    pub corpus_tests: String,
    /// Manifest filename, relative to the root.
    pub manifest: String,
    /// Summary filename, relative to the root.
    pub summary: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            root: "test".to_string(),
            corpus: "node".to_string(),
            corpus_tests: "test".to_string(),
            manifest: "tests.json".to_string(),
            summary: "summary.json".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Validates layout paths.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_path_string("layout.root", &self.root)?;
        validate_nested_path("layout.corpus", &self.corpus)?;
        validate_nested_path("layout.corpus_tests", &self.corpus_tests)?;
        validate_path_string("layout.manifest", &self.manifest)?;
        validate_path_string("layout.summary", &self.summary)
    }
}

// ============================================================================
// SECTION: Scan
// ============================================================================

/// Corpus scan configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Accepted script extensions, without dots.
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_SCRIPT_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
        }
    }
}

impl ScanConfig {
    /// Validates extension entries.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::Invalid("scan.extensions must be non-empty".to_string()));
        }
        for ext in &self.extensions {
            if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
                return Err(ConfigError::Invalid(format!(
                    "scan.extensions entry {ext:?} must be a bare extension"
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Corpus checkout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Run the command when the corpus is missing.
    pub enabled: bool,
    /// Fetch command argv.
    pub command: Vec<String>,
    /// Working directory, relative to the config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: argv(&[
                "git",
                "submodule",
                "update",
                "--init",
                "--recursive",
                "--progress",
                "--depth=1",
                "--checkout",
                "test/node",
            ]),
            working_dir: None,
        }
    }
}

impl BootstrapConfig {
    /// Validates the fetch command when enabled.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled {
            validate_command("bootstrap.command", &self.command)?;
        }
        if let Some(dir) = &self.working_dir {
            validate_path_string("bootstrap.working_dir", dir)?;
        }
        Ok(())
    }
}

/// Source formatter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    /// Formatter argv; source is piped on stdin.
    pub command: Vec<String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            command: argv(&["bunx", "prettier", "--stdin", "--parser=babel"]),
        }
    }
}

/// Test runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Runtime argv; the test path is appended.
    pub command: Vec<String>,
    /// Working directory, relative to the config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command: argv(&["bun", "test"]),
            working_dir: None,
        }
    }
}

impl RuntimeConfig {
    /// Validates the runtime command.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_command("runtime.command", &self.command)?;
        if let Some(dir) = &self.working_dir {
            validate_path_string("runtime.working_dir", dir)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Report And Log
// ============================================================================

/// Report configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Markdown heading.
    pub title: String,
    /// Label printed before the run totals.
    pub suite_label: String,
    /// Environment variable naming the markdown destination.
    pub markdown_env: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Node.js Tests".to_string(),
            suite_label: "Node.js tests".to_string(),
            markdown_env: "GITHUB_STEP_SUMMARY".to_string(),
        }
    }
}

impl ReportConfig {
    /// Validates report labels and the env var name.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid("report.title must be non-empty".to_string()));
        }
        if self.suite_label.trim().is_empty() {
            return Err(ConfigError::Invalid("report.suite_label must be non-empty".to_string()));
        }
        let valid_env = !self.markdown_env.is_empty()
            && self.markdown_env.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
        if !valid_env {
            return Err(ConfigError::Invalid(
                "report.markdown_env must be an environment variable name".to_string(),
            ));
        }
        Ok(())
    }
}

/// Progress log configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Output format.
    pub format: LogFormat,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading config.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the default rewrite list.
fn default_rewrites() -> Vec<TextRewrite> {
    vec![TextRewrite::assert_ok()]
}

/// Builds an owned argv list.
fn argv(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates a path that must stay below its parent directory.
fn validate_nested_path(field: &str, value: &str) -> Result<(), ConfigError> {
    validate_path_string(field, value)?;
    let escapes = Path::new(value.trim())
        .components()
        .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(ConfigError::Invalid(format!("{field} must be a relative path without '..'")));
    }
    Ok(())
}

/// Validates a command argv.
fn validate_command(field: &str, command: &[String]) -> Result<(), ConfigError> {
    let Some(program) = command.first() else {
        return Err(ConfigError::Invalid(format!("{field} must name a program")));
    };
    if program.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} program must be non-empty")));
    }
    if command.len() > MAX_COMMAND_ARGS {
        return Err(ConfigError::Invalid(format!("{field} has too many arguments")));
    }
    Ok(())
}
