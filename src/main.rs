mod urandom;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use twister_clone::{observed, MersenneTwister, StateRecoveryStream, WordBytes, STATE_WORDS};

#[derive(Parser, Debug)]
#[command(
    name = "twister-clone",
    version,
    about = "Recover an MT19937 state from 624 outputs and predict what follows"
)]
struct Opts {
    /// File of observed outputs, one per line (decimal or 0x hex). Without it,
    /// a hidden generator is cloned and every prediction is checked.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Seed for the hidden generator (default: from /dev/urandom)
    #[arg(long)]
    seed: Option<u32>,

    /// Outputs the hidden generator discards before it is observed
    /// (default: random, below 10000)
    #[arg(long)]
    skip: Option<usize>,

    /// Number of outputs to predict
    #[arg(long, default_value_t = 1000)]
    predict: usize,

    /// Also print this many predicted keystream bytes
    #[arg(long, default_value_t = 0)]
    keystream: usize,

    /// Print words as big-endian hex
    #[arg(long, action = ArgAction::SetTrue)]
    hex: bool,
}

fn format_word(word: u32, as_hex: bool) -> String {
    if as_hex {
        hex::encode(word.to_be_bytes())
    } else {
        word.to_string()
    }
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn keystream(stream: &StateRecoveryStream, length: usize) -> Result<Vec<u8>> {
    Ok(WordBytes::new(stream.continuation()?).take(length).collect())
}

fn print_keystream(stream: &StateRecoveryStream, length: usize) -> Result<()> {
    if length == 0 {
        return Ok(());
    }

    println!("keystream: {}", hex::encode(keystream(stream, length)?));

    Ok(())
}

fn load_observations(text: &str) -> Result<StateRecoveryStream> {
    let values = observed::parse(text)?;

    let mut stream = StateRecoveryStream::with_capacity(values.len());
    stream.append_observed_wide(&values)?;

    info!(observed = stream.len(), "observations loaded");

    if stream.len() > STATE_WORDS {
        info!(
            unused = stream.len() - STATE_WORDS,
            "predicting from the last {} observations", STATE_WORDS
        );
    }

    Ok(stream)
}

fn predict_from_file(opts: &Opts, path: &Path) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;

    let stream = load_observations(&text).with_context(|| format!("load {}", path.display()))?;

    for word in stream.get_continuation(opts.predict)? {
        println!("{}", format_word(word, opts.hex));
    }

    print_keystream(&stream, opts.keystream)
}

/// Outcome of cloning a hidden generator and checking the predictions.
struct CloneCheck {
    stream: StateRecoveryStream,
    predicted: Vec<u32>,
    mismatches: usize,
}

fn check_clone(seed: u32, skip: usize, predict: usize) -> Result<CloneCheck> {
    let mut hidden = MersenneTwister::new(seed);

    for _ in 0..skip {
        hidden.next_u32();
    }

    let tapped: Vec<u32> = hidden.by_ref().take(STATE_WORDS).collect();

    let mut stream = StateRecoveryStream::new();
    stream.append_observed(&tapped);

    let predicted = stream.get_continuation(predict)?;

    let mismatches = predicted
        .iter()
        .zip(hidden.by_ref())
        .filter(|(guess, actual)| *guess != actual)
        .count();

    if mismatches > 0 {
        warn!(mismatches, "predictions diverged from the hidden generator");
    }

    Ok(CloneCheck {
        stream,
        predicted,
        mismatches,
    })
}

fn clone_hidden_generator(opts: &Opts) -> Result<()> {
    let seed = match opts.seed {
        Some(seed) => seed,
        None => urandom::word().context("read /dev/urandom")?,
    };

    let skip = match opts.skip {
        Some(skip) => skip,
        None => urandom::range(0, 10_000).context("read /dev/urandom")? as usize,
    };

    let check = check_clone(seed, skip, opts.predict)?;

    println!("seed:       {}", format_word(seed, opts.hex));
    println!("skipped:    {}", skip);
    println!("tapped:     {}", check.stream.len());
    println!("predicted:  {}", check.predicted.len());
    println!("mismatches: {}", check.mismatches);

    if let Some(next) = check.predicted.first() {
        println!("next:       {}", format_word(*next, opts.hex));
    }

    print_keystream(&check.stream, opts.keystream)
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    let opts = Opts::parse();

    match &opts.input {
        Some(path) => predict_from_file(&opts, path),
        None => clone_hidden_generator(&opts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twister_clone::RecoveryError;

    #[test]
    fn log_level_defaults_to_warn() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(Some("")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn log_level_follows_rust_log() {
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("twister_clone=trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn hidden_generator_is_predicted_exactly() {
        for (seed, skip) in [(0, 0), (5489, 1), (0xdead_beef, 3000)] {
            let check = check_clone(seed, skip, 1500).unwrap();

            assert_eq!(check.stream.len(), STATE_WORDS);
            assert_eq!(check.predicted.len(), 1500);
            assert_eq!(check.mismatches, 0);
        }
    }

    #[test]
    fn keystream_follows_the_prediction() {
        let check = check_clone(17, 40, 2).unwrap();

        let bytes = keystream(&check.stream, 8).unwrap();

        assert_eq!(&bytes[..4], &check.predicted[0].to_be_bytes());
        assert_eq!(&bytes[4..], &check.predicted[1].to_be_bytes());
    }

    #[test]
    fn observations_from_text_predict_the_generator() {
        let outputs: Vec<u32> = MersenneTwister::new(99).take(STATE_WORDS + 10).collect();

        let mut text = String::from("# tapped outputs\n");
        for (i, output) in outputs[..STATE_WORDS].iter().enumerate() {
            if i % 2 == 0 {
                text.push_str(&format!("{}\n", output));
            } else {
                text.push_str(&format!("0x{:08x}\n", output));
            }
        }

        let stream = load_observations(&text).unwrap();

        assert_eq!(
            stream.get_continuation(10).unwrap(),
            &outputs[STATE_WORDS..]
        );
    }

    #[test]
    fn out_of_range_text_is_rejected() {
        let err = load_observations("1\n4294967296\n").unwrap_err();

        assert_eq!(
            err.downcast_ref::<RecoveryError>(),
            Some(&RecoveryError::DomainRange {
                index: 1,
                value: 1 << 32
            })
        );
    }

    #[test]
    fn format_word_hex_is_big_endian() {
        assert_eq!(format_word(0x0102_0304, true), "01020304");
        assert_eq!(format_word(0x0102_0304, false), "16909060");
    }
}
