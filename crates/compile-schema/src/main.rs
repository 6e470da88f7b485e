//! compile-schema - compile a JSON Schema document and report problems

use anyhow::{Context, Result};
use clap::Parser;
use json_schema_parse::{SchemaParseOptions, compile_str};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod outline;

#[derive(Parser, Debug)]
#[command(name = "compile-schema")]
#[command(version)]
#[command(about = "Compile a JSON Schema (draft-04) document and report problems")]
struct Args {
    /// Schema file (JSON)
    #[arg(long, value_name = "FILE")]
    schema: PathBuf,

    /// TOML file with parser options
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report keywords repeated within one schema object
    #[arg(long)]
    strict: bool,

    /// Maximum nesting of parse contexts
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Print diagnostics as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Print an outline of the compiled validators
    #[arg(long)]
    outline: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "compile_schema=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let options = load_options(args.config.as_deref(), args.strict, args.max_depth)?;

    let text = fs::read_to_string(&args.schema)
        .with_context(|| format!("Failed to read schema file: {}", args.schema.display()))?;
    let compiled = compile_str(&text, options)
        .with_context(|| format!("Failed to parse {}", args.schema.display()))?;

    info!(
        schema = %args.schema.display(),
        errors = compiled.diagnostics.len(),
        definitions = compiled.definitions.borrow().len(),
        "compiled"
    );

    let messages = compiled.diagnostic_messages();
    if args.json {
        let values: Vec<serde_json::Value> = messages.iter().map(|m| m.to_json()).collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for message in &messages {
            eprint!("{}", message.to_text());
        }
    }

    if args.outline {
        if let Some(validator) = &compiled.validator {
            print!("{}", outline::render(validator));
        }
        let definitions = compiled.definitions.borrow();
        for name in definitions.names() {
            if let Some(validator) = definitions.lookup(name) {
                print!("{}", outline::render_named(&format!("#/definitions/{}", name), &validator));
            }
        }
    }

    if compiled.has_errors() || compiled.validator.is_none() {
        std::process::exit(1);
    }

    Ok(())
}

/// Options from the config file, if any, with command-line flags on top.
fn load_options(
    config: Option<&Path>,
    strict: bool,
    max_depth: Option<usize>,
) -> Result<SchemaParseOptions> {
    let mut options = match config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Invalid config file: {}", path.display()))?
        }
        None => SchemaParseOptions::default(),
    };

    if strict {
        options.reject_duplicate_keywords = true;
    }
    if let Some(max_depth) = max_depth {
        options = options.with_max_depth(max_depth);
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let options = load_options(None, true, Some(8)).unwrap();
        assert!(options.reject_duplicate_keywords);
        assert_eq!(options.max_depth, 8);

        let options = load_options(None, false, None).unwrap();
        assert_eq!(options, SchemaParseOptions::default());
    }

    #[test]
    fn test_missing_config_file() {
        let path = Path::new("/nonexistent/options.toml");
        let err = load_options(Some(path), false, None).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "compile-schema",
            "--schema",
            "s.json",
            "--strict",
            "--max-depth",
            "4",
        ])
        .unwrap();
        assert_eq!(args.schema, PathBuf::from("s.json"));
        assert!(args.strict);
        assert_eq!(args.max_depth, Some(4));
        assert!(!args.json && !args.outline);
    }
}
