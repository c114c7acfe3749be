use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use hebtok_scanner::{tokenize, Token};

#[derive(Parser)]
#[command(author, version, about = "Splits lines of mixed Hebrew/Latin text into typed tokens")]
struct Cli {
    /// Input file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Output file; writes stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output shape per input line
    #[arg(long, value_enum, default_value = "plain")]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Token surface texts joined by single spaces
    Plain,
    /// One CATEGORY<TAB>text row per token, blank line between input lines
    Tsv,
    /// One JSON array of tokens per input line
    Json,
}

fn render(tokens: &[Token], format: Format) -> anyhow::Result<String> {
    let rendered = match format {
        Format::Plain => tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        Format::Tsv => {
            let mut out = String::new();
            for token in tokens {
                out.push_str(token.category.as_str());
                out.push('\t');
                out.push_str(&token.text);
                out.push('\n');
            }
            out
        }
        Format::Json => serde_json::to_string(tokens)?,
    };
    Ok(rendered)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {:?}", path))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {:?}", path))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed reading line {}", index + 1))?;
        // A line that cannot be tokenized is a table bug; abort loudly
        // rather than emit a partial result
        let tokens =
            tokenize(&line).with_context(|| format!("failed tokenizing line {}", index + 1))?;
        writeln!(writer, "{}", render(&tokens, cli.format)?)?;
    }
    writer.flush()?;

    Ok(())
}
