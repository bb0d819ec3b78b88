use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use unicode_decomposing::{DecompositionMode, DecompositionTable, Normalizer, DEFAULT_TABLE_PATH};

/// декомпозиция UTF-8 файла и приведение A-Z к нижнему регистру
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args
{
    /// исходный файл
    #[arg(default_value = "test_file.txt")]
    input: PathBuf,

    /// куда записать результат (по умолчанию - исходный файл с расширением .nfd)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// UnicodeData.txt из UCD
    #[arg(long, default_value = DEFAULT_TABLE_PATH)]
    table: PathBuf,

    /// раскладывать элементы декомпозиции, пока это возможно
    #[arg(long)]
    full: bool,
}

fn main() -> anyhow::Result<()>
{
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let table = DecompositionTable::from_file(&args.table)?;
    let input = fs::read(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;

    let mode = match args.full {
        true => DecompositionMode::Full,
        false => DecompositionMode::Single,
    };

    let (result, report) = Normalizer::with_mode(&table, mode).normalize_with_report(&input);

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("nfd"));

    fs::write(&output, &result)
        .with_context(|| format!("cannot write {}", output.display()))?;

    tracing::info!(
        input = %args.input.display(),
        output = %output.display(),
        bytes = result.len(),
        invalid_bytes = report.invalid_bytes,
        unencodable = report.unencodable,
        "done"
    );

    Ok(())
}
