use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sml::{ChildrenIndex, Element, LogSink, ParserConfig, parse_document_with};

mod files;
mod logging;

use logging::{LoggingConfig, init_logging};

/// Parse-check `.sml` files.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Files or directories (searched recursively for *.sml)
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Use the dialect without boolean literals
    #[arg(long)]
    legacy: bool,

    /// Wrap parse error messages at this many characters
    #[arg(long, value_name = "N", default_value_t = 100)]
    wrap: usize,

    /// Print the allowed-children index built from the parsed files
    #[arg(long)]
    index: bool,

    /// Log filter, `env_logger` syntax (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

impl Cli {
    fn parser_config(&self) -> ParserConfig {
        let base = if self.legacy { ParserConfig::legacy() } else { ParserConfig::default() };
        base.with_wrap_width(self.wrap)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig { env_filter: cli.log.clone(), ..LoggingConfig::default() });

    let config = cli.parser_config();
    let files = files::collect_sml_files(&cli.paths)?;

    let mut roots: Vec<Element> = Vec::new();
    let mut failed = 0usize;
    for path in &files {
        let src = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        match parse_document_with(&src, &config) {
            Ok(doc) => {
                if doc.root_count() > 1 {
                    log::warn!(
                        "{}: {} top-level elements, only the first is used",
                        path.display(),
                        doc.root_count()
                    );
                }
                println!("{}: ok", path.display());
                roots.push(doc.into_root());
            }
            Err(err) => {
                failed += 1;
                println!("{}: {err}", path.display());
            }
        }
    }

    if cli.index {
        print_index(&ChildrenIndex::build(&roots, &mut LogSink));
    }

    log::info!("checked {} file(s), {} failed", files.len(), failed);
    if failed > 0 {
        anyhow::bail!("{failed} of {} file(s) failed to parse", files.len());
    }
    Ok(())
}

fn print_index(index: &ChildrenIndex) {
    for root in index.roots() {
        println!("{root}: {}", index.sorted(root).join(", "));
    }
}
