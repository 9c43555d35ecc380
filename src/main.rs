use clap::Parser;
use include_completion::logging::{LogConfig, init_logging};
use include_completion::{
    CompletionConfig, IncludeCompletionProvider, ResolvedPathSet, StaticLibraryPaths,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Query include completions for a line of C/C++ source
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Workspace root containing the include-path configuration (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Configuration file relative to the workspace root
    #[arg(long, value_name = "PATH")]
    config_file: Option<PathBuf>,

    /// Platform identifier matched against configuration section names
    #[arg(long, value_name = "ID")]
    platform: Option<String>,

    /// Default library directory (repeatable)
    #[arg(long = "default-path", value_name = "DIR")]
    default_paths: Vec<PathBuf>,

    /// Cursor column, 0-based in characters (defaults to end of line)
    #[arg(long, value_name = "N")]
    column: Option<usize>,

    /// Print the search roots and every indexed header name instead of running a query
    #[arg(long)]
    list: bool,

    /// Log level (overrides RUST_LOG env var)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log file path (overrides INCLUDE_COMPLETION_LOG_FILE env var)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Line of source text to complete
    #[arg(value_name = "LINE", required_unless_present = "list")]
    line: Option<String>,
}

#[derive(Serialize)]
struct Candidate<'a> {
    name: &'a str,
    kind: &'static str,
    /// Name starts with the text typed after the delimiter
    prefix_match: bool,
    /// Character that closes the directive
    closing: Option<char>,
}

#[derive(Serialize)]
struct IndexListing<'a> {
    roots: &'a ResolvedPathSet,
    headers: Vec<&'a str>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_config = LogConfig::from_env().with_overrides(args.log_level, args.log_file);
    if let Err(e) = init_logging(log_config) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let mut builder = CompletionConfig::builder().with_env().workspace_root(root);
    if let Some(config_file) = args.config_file {
        builder = builder.config_file(config_file);
    }
    if let Some(platform) = args.platform {
        builder = builder.platform(platform);
    }
    let config = builder.build()?;

    info!(
        "Using configuration {:?} for platform {}",
        config.config_file_path(),
        config.platform
    );

    let provider = IncludeCompletionProvider::new(
        config,
        Arc::new(StaticLibraryPaths::new(args.default_paths)),
    );

    if args.list {
        let index = provider.snapshot();
        let listing = IndexListing {
            roots: index.roots(),
            headers: index.sorted_names(),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let line = args.line.unwrap_or_default();
    let column = args.column.unwrap_or_else(|| line.chars().count());

    let context = provider.include_context(&line, column);
    let partial = context.as_ref().map_or("", |context| context.partial.as_str());
    let closing = context.as_ref().map(|context| context.delimiter.closing());

    match provider.complete(&line, column) {
        Some(items) => {
            let mut candidates: Vec<Candidate<'_>> = items
                .iter()
                .map(|item| Candidate {
                    name: &item.label,
                    kind: "file",
                    prefix_match: item.label.starts_with(partial),
                    closing,
                })
                .collect();
            // Names continuing what was typed come first
            candidates.sort_by(|a, b| {
                b.prefix_match
                    .cmp(&a.prefix_match)
                    .then_with(|| a.name.cmp(b.name))
            });
            println!("{}", serde_json::to_string_pretty(&candidates)?);
        }
        None => println!("no match"),
    }

    Ok(())
}
