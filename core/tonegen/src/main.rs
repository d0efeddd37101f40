use std::process::ExitCode;

use clap::Parser;
use tonegen::engine::PlaybackEngine;

/// Exit status for failed startup, the `-1` of a C `main`.
const EXIT_FAILURE: u8 = 255;

/// Tone generator - demo project for real-time audio playback.
#[derive(Debug, Parser)]
#[command(version = "0.1", about)]
struct Cli {
    /// Sample rate to use
    #[arg(short = 's', long = "samplerate", default_value_t = 44100)]
    sample_rate: u32,

    /// Number of channels to use
    #[arg(short, long, default_value_t = 1)]
    channels: u16,

    /// Tone generator to use (0=sine - default, 1=square, 2=white noise)
    #[arg(short = 't', long = "tonegen", default_value_t = 0)]
    tone_gen: u32,

    /// Frames per buffer to request from the driver
    #[arg(short, long)]
    frames: Option<u32>,

    /// Seed for the white noise generator
    #[arg(long)]
    seed: Option<u64>,
}

/// `--help` and `--version` also come back from clap as errors; those
/// print to stdout and exit cleanly.
fn parse_exit_status(e: &clap::Error) -> u8 {
    if e.use_stderr() { EXIT_FAILURE } else { 0 }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(err) = e.print() {
                log::error!("Failed to print usage: {err}");
            }
            return ExitCode::from(parse_exit_status(&e));
        }
    };
    log::debug!("{cli:?}");

    let mut engine = PlaybackEngine::new()
        .with_seed(cli.seed)
        .with_frames_per_buffer(cli.frames);

    if !engine.init(cli.sample_rate, cli.channels, cli.tone_gen) {
        return ExitCode::from(EXIT_FAILURE);
    }

    if engine.start() {
        println!("Now playing.\n Press <enter> to quit...");

        let mut input = String::new();
        if let Err(e) = std::io::stdin().read_line(&mut input) {
            log::error!("Failed to read from stdin: {e}");
        }

        engine.stop();
    }

    ExitCode::SUCCESS
}
