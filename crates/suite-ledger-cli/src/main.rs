// crates/suite-ledger-cli/src/main.rs
// ============================================================================
// Module: Suite Ledger CLI Entry Point
// Description: Command dispatcher for the import and run phases.
// Purpose: Wire configuration, subprocess services, and console reports.
// Dependencies: clap, suite-ledger-config, suite-ledger-core, suite-ledger-process, thiserror.
// ============================================================================

//! ## Overview
//! `suite-ledger import` materializes the external corpus into groups and
//! writes the summary; `suite-ledger run` executes the materialized tests and
//! merges the results. Each subcommand is a separate process; the two only
//! share the tree and the summary file. All user-facing strings are routed
//! through the i18n catalog.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env::VarError;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use suite_ledger_cli::i18n::Locale;
use suite_ledger_cli::i18n::set_locale;
use suite_ledger_cli::t;
use suite_ledger_config::SuiteLedgerConfig;
use suite_ledger_config::config_toml_example;
use suite_ledger_core::EventLog;
use suite_ledger_core::ImportPipeline;
use suite_ledger_core::Layout;
use suite_ledger_core::RunOptions;
use suite_ledger_core::RunPhaseOutcome;
use suite_ledger_core::Summary;
use suite_ledger_core::TestManifest;
use suite_ledger_core::run_phase;
use suite_ledger_process::CommandBootstrap;
use suite_ledger_process::CommandFormatter;
use suite_ledger_process::CommandLine;
use suite_ledger_process::CommandRuntime;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable selecting the output language.
const LANG_ENV: &str = "SUITE_LEDGER_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "suite-ledger", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `SUITE_LEDGER_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Import the external corpus into the group layout.
    Import(ImportCommand),
    /// Run the imported tests and merge the results into the summary.
    Run(RunCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for `import`.
#[derive(Args, Debug)]
struct ImportCommand {
    /// Optional config file path (defaults to suite-ledger.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `run`.
#[derive(Args, Debug)]
struct RunCommand {
    /// Optional config file path (defaults to suite-ledger.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Stop at the first failing test.
    #[arg(long, action = ArgAction::SetTrue)]
    bail: bool,
    /// Treat the first COUNT listed tests as already handled.
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    skip: usize,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a configuration file.
    Validate(ConfigValidateCommand),
    /// Print a canonical example configuration.
    Example,
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to suite-ledger.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Import(command) => command_import(&command),
        Commands::Run(command) => command_run(&command),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

/// Prints the top-level help text.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Import Command
// ============================================================================

/// Executes the `import` command.
fn command_import(command: &ImportCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let layout = config.resolve_layout();
    let manifest = load_manifest(&layout)?;
    let rules = manifest.group_rules();

    let bootstrap_command = match config.bootstrap_command() {
        Some(argv) => {
            Some(command_line("bootstrap.command", argv)?.in_dir(config.bootstrap_working_dir()))
        }
        None => None,
    };
    let bootstrap = CommandBootstrap::new(bootstrap_command);
    let formatter =
        CommandFormatter::new(command_line("formatter.command", &config.formatter.command)?);
    let sink = EventLog::new(std::io::stdout(), config.log.format);

    let summary = ImportPipeline::new(&layout, &rules, &config.scan.extensions, &config.rewrites)
        .run(&bootstrap, &formatter, &sink)
        .map_err(|err| CliError::new(t!("import.failed", error = err)))?;
    write_import_report(&summary)?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the import console report.
fn write_import_report(summary: &Summary) -> CliResult<()> {
    let lines = [
        String::new(),
        t!("import.summary.header"),
        t!("import.summary.total", count = summary.total),
        t!("import.summary.ignored", count = summary.ignored),
        t!("import.summary.added", count = summary.added),
        t!("import.summary.percent", percent = summary.added_percent()),
        t!("import.summary.footer"),
    ];
    write_stdout_lines(&lines)
}

// ============================================================================
// SECTION: Run Command
// ============================================================================

/// Executes the `run` command.
fn command_run(command: &RunCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let layout = config.resolve_layout();
    let manifest = load_manifest(&layout)?;
    let markdown = markdown_destination(&config.report.markdown_env)?;

    let runtime = CommandRuntime::new(
        command_line("runtime.command", &config.runtime.command)?
            .in_dir(config.runtime_working_dir()),
    );
    let sink = EventLog::new(std::io::stdout(), config.log.format);
    let options = RunOptions {
        bail: command.bail,
        skip: command.skip,
    };

    let outcome = run_phase(
        &layout,
        &manifest,
        options,
        &runtime,
        &sink,
        &config.report.title,
        markdown.as_deref(),
    )
    .map_err(|err| CliError::new(t!("run.failed", error = err)))?;

    match outcome {
        RunPhaseOutcome::Completed {
            summary,
            ..
        } => {
            write_run_report(&config.report.suite_label, &summary)?;
            Ok(ExitCode::SUCCESS)
        }
        RunPhaseOutcome::Aborted {
            counters,
            ..
        } => {
            write_stderr_line(&t!("run.aborted", passed = counters.pass, failed = counters.fail))
                .map_err(|err| CliError::new(output_error("stderr", &err)))?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Prints the run console report.
fn write_run_report(label: &str, summary: &Summary) -> CliResult<()> {
    let lines = [
        String::new(),
        t!("run.summary.suite", label = label, count = summary.total),
        t!("run.summary.passed", count = summary.pass.unwrap_or_default()),
        t!("run.summary.failed", count = summary.fail.unwrap_or_default()),
        t!("run.summary.percent", percent = summary.percent.unwrap_or_default()),
    ];
    write_stdout_lines(&lines)
}

/// Reads the markdown destination from `name`; unset or empty means none.
fn markdown_destination(name: &str) -> CliResult<Option<PathBuf>> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(PathBuf::from(value))),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => {
            Err(CliError::new(t!("run.markdown_env_invalid", env = name)))
        }
    }
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
        ConfigCommand::Example => command_config_example(),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = load_config(command.config.as_deref())?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the canonical example configuration.
fn command_config_example() -> CliResult<ExitCode> {
    let mut stdout = std::io::stdout();
    stdout
        .write_all(config_toml_example().as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Shared Helpers
// ============================================================================

/// Loads and validates configuration.
fn load_config(path: Option<&Path>) -> CliResult<SuiteLedgerConfig> {
    SuiteLedgerConfig::load(path).map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Loads the test manifest named by the layout.
fn load_manifest(layout: &Layout) -> CliResult<TestManifest> {
    TestManifest::load(&layout.manifest_path)
        .map_err(|err| CliError::new(t!("manifest.load_failed", error = err)))
}

/// Builds a command line from a configured argv.
fn command_line(field: &str, argv: &[String]) -> CliResult<CommandLine> {
    CommandLine::from_argv(argv)
        .map_err(|err| CliError::new(t!("config.command_invalid", field = field, error = err)))
}

/// Resolves the output locale from the flag, then the environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes several lines to stdout.
fn write_stdout_lines(lines: &[String]) -> CliResult<()> {
    for line in lines {
        write_stdout_line(line).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(())
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
