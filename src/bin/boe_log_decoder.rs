//! BOE Session Log Decoder
//!
//! Membaca file `.summary` (satu message base64 per baris, diawali prefix
//! 32 karakter) dan menulis hasil decode ke `<nama file>.txt`.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin boe_log_decoder -- session.summary
//! cargo run --release --bin boe_log_decoder -- logs/ --journal frames.dat
//! ```
//!
//! # Options
//!
//! - `PATH` - File `.summary` atau directory berisi file `.summary`
//! - `--journal FILE` - Simpan juga setiap frame ke journal mmap
//! - `--fix` - Tulis message sebagai FIX tag=value (SOH ditampilkan `|`)

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};

use b3_boe::core::FrameJournal;
use b3_boe::protocol::log::decode_log_line;
use b3_boe::protocol::FrameEncoder;

const SUMMARY_EXTENSION: &str = "summary";
const JOURNAL_CAPACITY: usize = 64 * 1024 * 1024;

#[derive(Parser)]
#[command(name = "boe_log_decoder")]
#[command(about = "Decode B3 BOE session logs into readable text")]
#[command(override_usage = "boe_log_decoder [SummaryFileName|DirectoryName]")]
struct Cli {
    /// Summary file or directory with summary files
    path: PathBuf,

    /// Also append every decoded frame to this journal
    #[arg(long)]
    journal: Option<PathBuf>,

    /// Render messages as FIX tag=value instead of field dumps
    #[arg(long)]
    fix: bool,
}

/// Output file of `input`: same name, `.txt` extension.
fn output_path(input: &Path) -> PathBuf {
    input.with_extension("txt")
}

fn summary_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path).with_context(|| format!("cannot read '{}'", path.display()))? {
        let file = entry?.path();
        if file.is_file() && file.extension().is_some_and(|ext| ext == SUMMARY_EXTENSION) {
            files.push(file);
        }
    }
    files.sort();
    Ok(files)
}

struct Sink {
    encoder: FrameEncoder,
    journal: FrameJournal,
}

impl Sink {
    fn open(path: &Path) -> Result<Self> {
        let journal = FrameJournal::open(path, JOURNAL_CAPACITY)
            .with_context(|| format!("cannot open journal '{}'", path.display()))?;
        Ok(Self {
            encoder: FrameEncoder::new(u16::MAX as usize),
            journal,
        })
    }

    fn store(&mut self, sbe: &[u8]) -> Result<()> {
        self.encoder.reset();
        let frame = self.encoder.encode(sbe)?;
        self.journal.append(frame)?;
        Ok(())
    }
}

/// Decodes one file; returns the number of messages.
fn decode_file(input: &Path, fix: bool, mut sink: Option<&mut Sink>) -> Result<usize> {
    let reader = BufReader::new(
        File::open(input).with_context(|| format!("cannot open '{}'", input.display()))?,
    );
    let output = output_path(input);
    let mut writer = BufWriter::new(
        File::create(&output).with_context(|| format!("cannot create '{}'", output.display()))?,
    );

    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let decoded = decode_log_line(&line).and_then(|record| {
            let text = if fix { record.render_fix()? } else { record.render()? };
            Ok((record, text))
        });
        let (record, text) = match decoded {
            Ok(decoded) => decoded,
            Err(err) => {
                eprintln!("Cannot decode '{line}'");
                return Err(err).with_context(|| format!("in '{}'", input.display()));
            }
        };

        println!("{text}\n");
        writeln!(writer, "{text}\n")?;
        if let Some(sink) = sink.as_deref_mut() {
            sink.store(record.sbe_bytes())?;
        }
        count += 1;
    }
    writer.flush()?;

    debug!(input = %input.display(), output = %output.display(), count, "file decoded");
    Ok(count)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if !cli.path.exists() {
        bail!("'{}' does not exist", cli.path.display());
    }

    let files = summary_files(&cli.path)?;
    let mut sink = cli.journal.as_deref().map(Sink::open).transpose()?;

    let mut messages = 0;
    for file in &files {
        messages += decode_file(file, cli.fix, sink.as_mut())?;
    }

    if let Some(sink) = &sink {
        sink.journal.flush()?;
        info!(
            records = sink.journal.records().count(),
            used = sink.journal.used(),
            "journal updated"
        );
    }

    println!("{messages} messages in {} file(s) are decoded.", files.len());
    Ok(())
}
