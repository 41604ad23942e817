//! Command-line front end: search the bundled exam material or a JSON corpus
//! and print grouped, highlighted hits.

use anyhow::{Context as _, Result};
use clap::Parser;
use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};
use tolerant_search::{Corpus, SearchResults, Searcher};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "tolerant-search")]
#[command(about = "Typo- and transliteration-tolerant search over short multilingual passages")]
struct Args {
    /// Text to look for. Leave empty to list every record
    #[arg(default_value = "")]
    query: String,

    /// JSON corpus to search instead of the bundled one
    #[arg(short, long)]
    corpus: Option<PathBuf>,

    /// Render highlights as HTML `<mark>` elements
    #[arg(long)]
    html: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so results can be piped
    let builder = FmtSubscriber::builder()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();
    if args.debug {
        builder.with_max_level(Level::DEBUG).init();
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        builder.with_env_filter(filter).init();
    }

    let corpus = match &args.corpus {
        Some(path) => Corpus::from_path(path)
            .with_context(|| format!("loading corpus from {}", path.display()))?,
        None => Corpus::builtin().context("loading bundled corpus")?,
    };
    let searcher = Searcher::new(corpus);

    let results = searcher.search(&args.query);
    info!(hits = results.len(), "query `{}`", results.query());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    print_results(&mut out, &results, args.html)?;
    out.flush()?;
    Ok(())
}

fn print_results(out: &mut impl Write, results: &SearchResults<'_>, html: bool) -> io::Result<()> {
    let show_all = results.query().is_empty();
    for group in results.groups() {
        writeln!(out, "== {} ==", group.name)?;
        for hit in group.hits {
            writeln!(out, "{}", hit.id())?;
            for field in &hit.fields {
                if !(show_all || field.matched || field.highlight.is_highlighted()) {
                    continue;
                }
                let rendered = if html {
                    field.highlight.to_html()
                } else {
                    field.highlight.to_string()
                };
                writeln!(out, "  {}: {}", field.field.name(), rendered)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
