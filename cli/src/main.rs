//! refrng - print reference PRNG streams
//!
//! Emits MT19937-64 and xoshiro256** streams (or their SHA-256 digests) so a
//! random facility written in any language can be diffed against them.

use std::fs;
use std::num::ParseIntError;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use reference_rng_core::{
    generate_stream, published_vectors, stream_digest, Draw, DrawKind, GeneratorConfig,
    StreamConfig,
};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(StructOpt)]
struct OutputOpt {
    #[structopt(short = "n", long = "count", default_value = "10")]
    /// Number of draws to print.
    count: usize,

    #[structopt(long = "skip", default_value = "0")]
    /// Draws to discard before printing.
    skip: usize,

    #[structopt(long = "json")]
    /// Print the stream as a JSON array.
    json: bool,

    #[structopt(long = "digest", conflicts_with = "json")]
    /// Print only the SHA-256 digest of the stream.
    digest: bool,
}

#[derive(StructOpt)]
struct MtOpt {
    #[structopt(short = "s", long = "seed", parse(try_from_str = parse_word))]
    /// Scalar seed (default 5489).
    seed: Option<u64>,

    #[structopt(
        short = "k",
        long = "key",
        conflicts_with = "seed",
        use_delimiter = true,
        parse(try_from_str = parse_word)
    )]
    /// Comma-separated seed key, e.g. 0x12345,0x23456.
    key: Vec<u64>,

    #[structopt(short = "d", long = "draw", default_value = "u64")]
    /// One of u64, i63, real_closed01, real_half_open01, real_open01.
    draw: DrawKind,

    #[structopt(flatten)]
    output: OutputOpt,
}

#[derive(StructOpt)]
struct XoshiroOpt {
    #[structopt(long = "state", use_delimiter = true, parse(try_from_str = parse_word))]
    /// Four comma-separated state words.
    state: Vec<u64>,

    #[structopt(long = "splitmix", conflicts_with = "state", parse(try_from_str = parse_word))]
    /// Expand a single seed into the state with SplitMix64.
    splitmix: Option<u64>,

    #[structopt(flatten)]
    output: OutputOpt,
}

#[derive(StructOpt)]
#[structopt(name = "refrng", about = "Reference PRNG streams for validating other generators.")]
enum RefOpt {
    /// MT19937-64 stream.
    Mt64(MtOpt),

    /// xoshiro256** stream.
    Xoshiro(XoshiroOpt),

    /// Run a stream described by a JSON config file.
    Config {
        path: PathBuf,

        #[structopt(long = "json")]
        /// Print the stream as a JSON array.
        json: bool,

        #[structopt(long = "digest", conflicts_with = "json")]
        /// Print only the SHA-256 digest of the stream.
        digest: bool,
    },

    /// Check every published reference vector.
    Verify,
}

/// Decimal or 0x-prefixed hexadecimal word.
fn parse_word(s: &str) -> Result<u64, ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    }
}

fn stream_config(generator: GeneratorConfig, draw: DrawKind, output: &OutputOpt) -> StreamConfig {
    StreamConfig::new(generator, draw, output.count).with_skip(output.skip)
}

fn mt64(opt: MtOpt) -> Result<()> {
    let generator = if opt.key.is_empty() {
        GeneratorConfig::Mt19937_64 {
            seed: opt.seed.unwrap_or(reference_rng_core::rng::MT_DEFAULT_SEED),
        }
    } else {
        GeneratorConfig::Mt19937_64Array { key: opt.key }
    };

    let config = stream_config(generator, opt.draw, &opt.output);
    run(&config, opt.output.json, opt.output.digest)
}

fn xoshiro(opt: XoshiroOpt) -> Result<()> {
    let generator = match (opt.state.as_slice(), opt.splitmix) {
        (&[s0, s1, s2, s3], None) => GeneratorConfig::Xoshiro256StarStar {
            state: [s0, s1, s2, s3],
        },
        ([], Some(seed)) => GeneratorConfig::Xoshiro256StarStarSplitMix { seed },
        ([], None) => bail!("either --state or --splitmix is required"),
        (words, _) => bail!("--state needs exactly 4 words, got {}", words.len()),
    };

    let config = stream_config(generator, DrawKind::U64, &opt.output);
    run(&config, opt.output.json, opt.output.digest)
}

fn config_file(path: PathBuf, json: bool, digest: bool) -> Result<()> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = StreamConfig::from_json(&text)
        .with_context(|| format!("invalid stream config in {}", path.display()))?;
    run(&config, json, digest)
}

fn run(config: &StreamConfig, json: bool, digest: bool) -> Result<()> {
    let draws = generate_stream(config)?;
    tracing::info!(draws = draws.len(), "stream generated");
    print_draws(&draws, json, digest)
}

fn print_draws(draws: &[Draw], json: bool, digest: bool) -> Result<()> {
    if digest {
        println!("{}", stream_digest(draws));
    } else if json {
        println!("{}", serde_json::to_string(draws)?);
    } else {
        for draw in draws {
            println!("{}", draw);
        }
    }
    Ok(())
}

fn verify() -> Result<()> {
    let mut failures = 0;
    for vector in published_vectors() {
        match vector.verify() {
            Ok(()) => println!("ok    {}", vector.name),
            Err(e) => {
                tracing::warn!(vector = %vector.name, error = %e, "reference vector failed");
                println!("FAIL  {}: {}", vector.name, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} reference vector(s) failed", failures);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match RefOpt::from_args() {
        RefOpt::Mt64(opt) => mt64(opt),
        RefOpt::Xoshiro(opt) => xoshiro(opt),
        RefOpt::Config { path, json, digest } => config_file(path, json, digest),
        RefOpt::Verify => verify(),
    }
}
