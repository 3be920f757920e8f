use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bytelens_core::{
    DEFAULT_ERROR_SENTINEL, MemorySource, Registry, Report, Selection, inspect_file,
    inspect_source, render_table,
};
use clap::{ArgAction, Args, Parser, Subcommand};
use flexi_logger::{Logger, LoggerHandle};
use glob::glob;
use log::debug;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("BYTELENS_BUILD_COMMIT"),
    ", ",
    env!("BYTELENS_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "bytelens")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Render a byte selection as integers, floats, bits, LEB128 and text, all at once.",
    long_about = None,
    after_help = "Examples:\n  bytelens inspect firmware.bin --offset 0x40 --length 4\n  bytelens hex \"e5 8e 26\"\n  bytelens hex 40490fdb --format \"Float BE\"\n  bytelens formats"
)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG applies otherwise
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a byte range of a file with every registered format.
    #[command(
        after_help = "Examples:\n  bytelens inspect dump.bin\n  bytelens inspect dump.bin --offset 0x10 --length 8 --json\n  bytelens inspect 'dumps/*.bin' --length 2 -o report.json"
    )]
    Inspect {
        /// Path to the input file (a quoted glob must match exactly one file)
        input: PathBuf,

        /// First selected byte (decimal or 0x-prefixed hex)
        #[arg(long, value_parser = parse_number)]
        offset: Option<u64>,

        /// Number of selected bytes (defaults to the rest of the file)
        #[arg(long, value_parser = parse_number)]
        length: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Decode bytes given as a hex string.
    #[command(
        after_help = "Examples:\n  bytelens hex e58e26\n  bytelens hex \"0x9b 0xf1 0x59\"\n  bytelens hex de:ad:be:ef --json"
    )]
    Hex {
        /// Hex digits; whitespace, ':' and '-' separators and 0x prefixes are ignored
        bytes: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// List format names in display order.
    Formats,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Write the JSON report to stdout instead of a table
    #[arg(long, conflicts_with = "report")]
    json: bool,

    /// Write the JSON report to a file
    #[arg(short = 'o', long)]
    report: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Text shown in the table for rows that failed to decode
    #[arg(long, default_value = DEFAULT_ERROR_SENTINEL)]
    sentinel: String,

    /// Only show the named format (repeatable)
    #[arg(long = "format", value_name = "NAME")]
    formats: Vec<String>,

    /// Exit with a non-zero code if any shown format failed to decode
    #[arg(long)]
    strict: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _logger = init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Inspect {
            input,
            offset,
            length,
            output,
        } => cmd_inspect(input, offset, length, output),
        Commands::Hex { bytes, output } => cmd_hex(&bytes, output),
        Commands::Formats => cmd_formats(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

fn init_logging(verbose: u8) -> Option<LoggerHandle> {
    let logger = match verbose {
        0 => Logger::try_with_env_or_str("warn"),
        1 => Logger::try_with_str("debug"),
        _ => Logger::try_with_str("trace"),
    };
    match logger.and_then(|logger| logger.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("warning: logging disabled: {}", err);
            None
        }
    }
}

fn cmd_inspect(
    input: PathBuf,
    offset: Option<u64>,
    length: Option<u64>,
    output: OutputArgs,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;
    if let Some(report_path) = output.report.as_ref() {
        ensure_report_differs(&resolved_input, report_path)?;
    }

    let meta = fs::metadata(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    let selection = build_selection(offset, length, meta.len())?;
    debug!(
        "inspecting {} ({} bytes), selection {:?}",
        resolved_input.display(),
        meta.len(),
        selection
    );

    let registry = Registry::with_default_formats();
    let rep = inspect_file(&resolved_input, selection, &registry).context("inspection failed")?;
    emit(rep, &registry, &output)
}

fn cmd_hex(bytes: &str, output: OutputArgs) -> Result<(), CliError> {
    let data = parse_hex_bytes(bytes)?;
    debug!("decoding {} bytes from hex input", data.len());

    let registry = Registry::with_default_formats();
    let rep = inspect_source("<hex>", MemorySource::new(data), None, &registry)
        .context("inspection failed")?;
    emit(rep, &registry, &output)
}

fn cmd_formats() -> Result<(), CliError> {
    let registry = Registry::with_default_formats();
    for name in registry.names() {
        println!("{}", name);
    }
    Ok(())
}

fn emit(mut rep: Report, registry: &Registry, output: &OutputArgs) -> Result<(), CliError> {
    if !output.formats.is_empty() {
        if let Some(unknown) = output
            .formats
            .iter()
            .find(|name| !registry.contains(name.as_str()))
        {
            return Err(CliError::new(
                format!("unknown format '{}'", unknown),
                Some("run `bytelens formats` to list format names".to_string()),
            ));
        }
        rep.rows.retain(|row| output.formats.contains(&row.name));
    }

    if let Some(report) = output.report.as_ref() {
        let json = serialize_report(&rep, output.pretty, output.compact)?;
        if let Some(parent) = report.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
        }
        fs::write(report, json)
            .with_context(|| format!("Failed to write report: {}", report.display()))?;
        if !output.quiet {
            eprintln!("OK: report written -> {}", report.display());
        }
    } else if output.json {
        let json = serialize_report(&rep, output.pretty, output.compact)?;
        println!("{}", json);
    } else {
        print!("{}", render_table(&rep.rows, &output.sentinel));
    }

    if output.strict && rep.rows.iter().any(|row| row.is_failed()) {
        return Err(CliError::new(
            "one or more formats failed to decode",
            Some("use --format to pick formats that apply to this selection".to_string()),
        ));
    }
    Ok(())
}

fn serialize_report(rep: &Report, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn build_selection(
    offset: Option<u64>,
    length: Option<u64>,
    available: u64,
) -> Result<Option<Selection>, CliError> {
    let hint = || Some(format!("the input has {} bytes", available));
    let selection = match (offset, length) {
        (None, None) => return Ok(None),
        (offset, Some(length)) => Selection::from_offset_len(offset.unwrap_or(0), length),
        (Some(offset), None) => Selection::new(offset, available),
    }
    .map_err(|err| CliError::new(format!("invalid selection: {}", err), hint()))?;
    selection
        .check_within(available)
        .map_err(|err| CliError::new(format!("invalid selection: {}", err), hint()))?;
    Ok(Some(selection))
}

fn parse_number(value: &str) -> Result<u64, String> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|err| format!("invalid number '{}': {}", value, err))
}

fn parse_hex_bytes(input: &str) -> Result<Vec<u8>, CliError> {
    let mut digits = String::with_capacity(input.len());
    for token in input.split(|c: char| c.is_whitespace() || c == ':' || c == '-') {
        let token = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        digits.push_str(token);
    }

    let hint = || Some("expected pairs of hex digits, e.g. \"e5 8e 26\"".to_string());
    if digits.len() % 2 != 0 {
        return Err(CliError::new(
            format!("odd number of hex digits in '{}'", input),
            hint(),
        ));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(CliError::new(
            format!("invalid hex digit '{}' in '{}'", bad, input),
            hint(),
        ));
    }

    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            // Pairs are ASCII hex digits, checked above.
            let text = std::str::from_utf8(pair).map_err(|_| CliError::new("invalid hex", hint()))?;
            u8::from_str_radix(text, 16).map_err(|_| CliError::new("invalid hex", hint()))
        })
        .collect()
}

fn ensure_report_differs(input: &Path, report_path: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let report_abs = report_path
        .parent()
        .map(|parent| {
            if parent.as_os_str().is_empty() {
                fs::canonicalize(".")
            } else {
                fs::canonicalize(parent)
            }
        })
        .transpose();
    // A missing output directory is created later, so it cannot hold the input.
    let Ok(Some(report_dir)) = report_abs else {
        return Ok(());
    };
    let file_name = report_path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid report path: {}", report_path.display()))?;
    if report_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!(
                "report path must differ from input: {}",
                report_path.display()
            ),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("check the path or quote a glob pattern".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a regular file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let hint = "pass a single input file, or run once per file".to_string();
        let mut message = format!(
            "multiple files match pattern '{}' ({} matches)",
            pattern,
            matches.len()
        );
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>();
        message.push_str("; matches: ");
        message.push_str(&listed.join(", "));
        if matches.len() > 3 {
            message.push_str(", ...");
        }
        return Err(CliError::new(message, Some(hint)));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
