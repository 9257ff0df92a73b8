// crates/suite-ledger-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Provides message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings for consistent console reports.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! The Suite Ledger CLI stores user-facing strings in a small translation
//! catalog. All runtime output should be routed through the [`t!`](crate::t)
//! macro. Progress lines from the event log are not translated; they are a
//! stable machine-greppable format.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported CLI locales.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    En,
    /// Catalan.
    Ca,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ca => "ca",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_', '.']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "ca" => Some(Self::Ca),
            _ => None,
        }
    }
}

/// A formatted message argument captured by the [`macro@crate::t`] macro.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"count"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Global locale selection for CLI output.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "suite-ledger {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config valid."),
    ("config.command_invalid", "Invalid {field}: {error}"),
    ("manifest.load_failed", "Failed to load test manifest: {error}"),
    ("import.failed", "Import failed: {error}"),
    ("import.summary.header", "======= Summary ======="),
    ("import.summary.total", "Total tests: {count}"),
    ("import.summary.ignored", "Ignored tests: {count}"),
    ("import.summary.added", "Added tests: {count}"),
    ("import.summary.percent", "Added percentage: {percent} %"),
    ("import.summary.footer", "======================="),
    ("run.failed", "Run failed: {error}"),
    ("run.summary.suite", "{label}: {count}"),
    ("run.summary.passed", "Passed: {count}"),
    ("run.summary.failed", "Failed: {count}"),
    ("run.summary.percent", "Percent: {percent} %"),
    (
        "run.aborted",
        "Stopped at the first failure ({passed} passed, {failed} failed); the summary was not \
         updated.",
    ),
    ("run.markdown_env_invalid", "Invalid value for {env}: not valid unicode."),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'ca'."),
    (
        "i18n.disclaimer.machine_translated",
        "Note: non-English output is machine-translated and may be inaccurate.",
    ),
];

/// Static Catalan catalog entries.
const CATALOG_CA: &[(&str, &str)] = &[
    ("main.version", "suite-ledger {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "sortida"),
    ("output.write_failed", "No s'ha pogut escriure a {stream}: {error}"),
    ("config.load_failed", "No s'ha pogut carregar la configuració: {error}"),
    ("config.validate.ok", "Configuració vàlida."),
    ("config.command_invalid", "{field} no vàlid: {error}"),
    ("manifest.load_failed", "No s'ha pogut carregar el manifest de proves: {error}"),
    ("import.failed", "La importació ha fallat: {error}"),
    ("import.summary.header", "======= Resum ======="),
    ("import.summary.total", "Proves totals: {count}"),
    ("import.summary.ignored", "Proves ignorades: {count}"),
    ("import.summary.added", "Proves afegides: {count}"),
    ("import.summary.percent", "Percentatge afegit: {percent} %"),
    ("import.summary.footer", "====================="),
    ("run.failed", "L'execució ha fallat: {error}"),
    ("run.summary.suite", "{label}: {count}"),
    ("run.summary.passed", "Superades: {count}"),
    ("run.summary.failed", "Fallades: {count}"),
    ("run.summary.percent", "Percentatge: {percent} %"),
    (
        "run.aborted",
        "Aturat a la primera fallada ({passed} superades, {failed} fallades); el resum no s'ha \
         actualitzat.",
    ),
    ("run.markdown_env_invalid", "Valor no vàlid per a {env}: no és unicode vàlid."),
    ("i18n.lang.invalid_env", "Valor no vàlid per a {env}: {value}. S'esperava 'en' o 'ca'."),
    (
        "i18n.disclaimer.machine_translated",
        "Nota: la sortida que no és en anglès està traduïda automàticament i pot ser inexacta.",
    ),
];

/// Returns the message catalog for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_CA_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::Ca => CATALOG_CA_MAP.get_or_init(|| CATALOG_CA.iter().copied().collect()),
    }
}

/// Returns every catalog key missing from the Catalan catalog.
#[must_use]
pub fn missing_translations() -> Vec<&'static str> {
    let catalan = catalog_for(Locale::Ca);
    CATALOG_EN.iter().map(|(key, _)| *key).filter(|key| !catalan.contains_key(key)).collect()
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the selected locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let locale = current_locale();
    let template = catalog_for(locale)
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key);

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
