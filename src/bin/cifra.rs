// Cifra CLI
// Command-line front end for the alphabet-aware Caesar engine

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;

use cifra_core::{CipherConfig, CipherEngine, FixtureFile};

/// Alphabet-aware Caesar cipher
#[derive(Parser, Debug)]
#[command(name = "cifra")]
#[command(version)]
#[command(about = "Alphabet-aware Caesar cipher", long_about = None)]
struct Args {
    /// Text to encrypt
    #[arg(short, long, value_name = "TEXT", conflicts_with = "decrypt")]
    encrypt: Option<String>,

    /// Text to decrypt
    #[arg(short, long, value_name = "TEXT")]
    decrypt: Option<String>,

    /// Shift amount
    #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
    shift: i64,

    /// Alphabet name
    #[arg(short, long, default_value = "es")]
    alphabet: String,

    /// Save result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Run round-trip checks from a JSON fixture file and exit
    #[arg(long, value_name = "FILE")]
    fixture: Option<PathBuf>,

    /// List registered alphabets and exit
    #[arg(long)]
    list_alphabets: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let engine = CipherEngine::new(CipherConfig::default());

    if args.list_alphabets {
        for alphabet in engine.alphabets() {
            println!("{}: {} letters", alphabet.name(), alphabet.len());
        }
        return Ok(());
    }

    if let Some(path) = &args.fixture {
        return run_fixture(&engine, path);
    }

    if !engine.has_alphabet(&args.alphabet) {
        bail!("unknown alphabet: {}", args.alphabet);
    }

    let result = match (&args.encrypt, &args.decrypt) {
        (Some(text), None) => engine.encrypt(text, args.shift, &args.alphabet),
        (None, Some(text)) => engine.decrypt(text, args.shift, &args.alphabet),
        _ => bail!("exactly one of --encrypt or --decrypt is required"),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &result).with_context(|| format!("writing {}", path.display()))?;
            println!("Saved to {}", path.display());
        }
        None => println!("{result}"),
    }

    Ok(())
}

/// Run every case of a fixture file through the round-trip contract.
fn run_fixture(engine: &CipherEngine, path: &Path) -> anyhow::Result<()> {
    let fixture =
        FixtureFile::from_path(path).with_context(|| format!("loading {}", path.display()))?;

    let started = Instant::now();
    let mut failures = 0usize;
    for (index, case) in fixture.tests.iter().enumerate() {
        if case.check(engine) {
            log::debug!("case {index} ok: input={:?} shift={}", case.input, case.shift);
        } else {
            failures += 1;
            eprintln!(
                "case {index} failed: input={:?} shift={} alphabet={}",
                case.input,
                case.shift,
                case.alphabet_or(engine.default_alphabet()),
            );
        }
    }

    println!(
        "Ran {} case(s) in {:.3?}. Failures: {failures}",
        fixture.tests.len(),
        started.elapsed(),
    );
    if failures > 0 {
        bail!("{failures} fixture case(s) failed");
    }
    Ok(())
}
