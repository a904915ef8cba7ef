use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use concordance::reader::{self, ReaderConfig};
use concordance::Concordance;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `<label>. <word>\t{<frequency>:<sentences>}` per line
    Text,
    /// JSON array of labeled entries
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "concordance")]
#[command(about = "Builds an alphabetical concordance with word frequencies and sentence numbers")]
#[command(version)]
struct Args {
    /// Text document to index
    file: PathBuf,

    /// Use memory-mapped I/O instead of async buffered
    #[arg(long)]
    use_mmap: bool,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Stats output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Log progress at info level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::INFO } else { Level::WARN })
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let document = if args.use_mmap {
        reader::read_document_mmap(&args.file)?
    } else {
        reader::read_document(&args.file, &ReaderConfig::default()).await?
    };

    let concordance = Concordance::from_text(&document.text).with_source(document.stats.file_path);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.format {
        OutputFormat::Text => {
            for line in concordance.report() {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &concordance.report())?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    if let Some(stats_out) = &args.stats_out {
        let json = serde_json::to_string_pretty(concordance.stats())?;
        tokio::fs::write(stats_out, json)
            .await
            .with_context(|| format!("Failed to write stats to {}", stats_out.display()))?;
        info!("Wrote run statistics to {}", stats_out.display());
    }

    Ok(())
}
