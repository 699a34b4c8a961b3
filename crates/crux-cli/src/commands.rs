//! Subcommand handlers.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use crux_config::{BackendKind, CruxConfig};
use crux_parser::{
    BundledGrammar, GrammarBackend, ParseError, ParseOptions, ParseResult, ParserEngine,
    ParserError, Severity, StandaloneGrammar,
};
use tracing::debug;

use crate::cli::{CheckArgs, ExtractionArgs, ParseArgs};
use crate::output;

/// Everything one parse needs after flags and config are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub backend: BackendKind,
    pub options: ParseOptions,
    pub crate_name: String,
}

impl Settings {
    /// Config values, with command-line flags taking precedence.
    pub fn resolve(
        config: &CruxConfig,
        extraction: Option<&ExtractionArgs>,
        crate_name: Option<&str>,
    ) -> Self {
        let mut settings = Self {
            backend: config.parser.backend,
            options: config.parser.to_options(),
            crate_name: crate_name.map_or_else(|| config.parser.crate_name.clone(), str::to_string),
        };
        if let Some(args) = extraction {
            if let Some(backend) = args.backend {
                settings.backend = backend.into();
            }
            if args.no_private {
                settings.options.include_private_items = false;
            }
            if args.no_docs {
                settings.options.include_doc_comments = false;
            }
            if args.max_depth.is_some() {
                settings.options.max_depth = args.max_depth;
            }
        }
        settings
    }
}

/// `crux parse`: print the full result as JSON.
pub fn parse(args: &ParseArgs, config: &CruxConfig) -> anyhow::Result<()> {
    let source = read_source(&args.file)?;
    let settings = Settings::resolve(config, Some(&args.extraction), args.crate_name.as_deref());
    let pretty = config.output.pretty && !args.compact;

    let started = Instant::now();
    match run(&settings, &source) {
        Ok(result) => output::print_json(&result, pretty),
        Err(error) => {
            output::print_json(&ParseResult::failed(&error, started.elapsed()), pretty)?;
            Err(error).with_context(|| format!("failed to parse {}", args.file.display()))
        }
    }
}

/// `crux check`: print diagnostics, report whether the file is clean.
pub fn check(args: &CheckArgs, config: &CruxConfig) -> anyhow::Result<bool> {
    let source = read_source(&args.file)?;
    let mut settings = Settings::resolve(config, None, None);
    if let Some(backend) = args.backend {
        settings.backend = backend.into();
    }
    let result = run(&settings, &source)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;

    let label = source_label(&args.file);
    for finding in &result.errors {
        println!("{}", format_finding(&label, finding));
    }
    let errors = result.errors.iter().filter(|e| e.is_error()).count();
    let warnings = result.errors.len() - errors;
    println!("{label}: {errors} error(s), {warnings} warning(s)");
    Ok(result.success)
}

/// Parse with the configured backend; the engine lives for one call.
pub fn run(settings: &Settings, source: &str) -> Result<ParseResult, ParserError> {
    debug!(backend = ?settings.backend, crate_name = %settings.crate_name, "parsing");
    match settings.backend {
        BackendKind::Bundled => run_with(BundledGrammar, settings, source),
        BackendKind::Standalone => run_with(StandaloneGrammar, settings, source),
    }
}

fn run_with<B: GrammarBackend>(
    backend: B,
    settings: &Settings,
    source: &str,
) -> Result<ParseResult, ParserError> {
    let mut engine = ParserEngine::with_options(backend, settings.options.clone());
    engine.initialize()?;
    let result = engine.parse_string(source, &settings.crate_name);
    engine.dispose();
    result
}

/// Read a file, or stdin when the path is `-`.
pub fn read_source(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read source from stdin")?;
        return Ok(source);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn source_label(path: &Path) -> String {
    if path == Path::new("-") {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn format_finding(label: &str, finding: &ParseError) -> String {
    let severity = match finding.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };
    finding.location.map_or_else(
        || format!("{label}: {severity}: {}", finding.message),
        |loc| {
            format!(
                "{label}:{}:{}: {severity}: {}",
                loc.start_line, loc.start_column, finding.message
            )
        },
    )
}
