//! `avl-visualizer`: build an AVL tree and render it.
//!
//! Usage:
//!   avl-visualizer build --nodes 3 --values "3 2 1"
//!   avl-visualizer random --count 15 --seed 7 --format text
//!   avl-visualizer session < commands.txt
//!
//! Output goes to stdout unless `--output` names a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use avl_visualizer::cli::{render, Format, Session};
use avl_visualizer::fuzzer::KeyFuzzer;
use avl_visualizer::{VisualizerConfig, VisualizerState};
use clap::{ArgAction, Parser, Subcommand};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(name = "avl-visualizer", about = "Build an AVL tree and render it")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Output format: svg, json or text.
    #[arg(long, global = true, default_value = "svg")]
    format: Format,
    /// JSON file overriding layout and theme defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Write output here instead of stdout.
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(long, short, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build from a declared node count and whitespace-separated values.
    Build {
        #[arg(long)]
        nodes: String,
        #[arg(long, allow_hyphen_values = true)]
        values: String,
    },
    /// Build from randomly drawn distinct keys.
    Random {
        #[arg(long)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = -99, allow_hyphen_values = true)]
        min: i32,
        #[arg(long, default_value_t = 99, allow_hyphen_values = true)]
        max: i32,
    },
    /// Read build/show/reset commands from stdin.
    Session,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("failed to initialise logging")?;

    let config = match &cli.config {
        Some(path) => VisualizerConfig::load(path)?,
        None => VisualizerConfig::default(),
    };

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let mut state = VisualizerState::new();
    match cli.command {
        Commands::Build { nodes, values } => {
            if let Err(e) = state.build(&nodes, &values) {
                bail!("{e}");
            }
        }
        Commands::Random {
            count,
            seed,
            min,
            max,
        } => {
            let mut fuzzer = KeyFuzzer::new(seed);
            let keys = fuzzer.distinct_keys(count, min, max);
            info!("seed {}: {:?}", fuzzer.seed, keys);
            state.build_from_keys(keys);
        }
        Commands::Session => {
            let mut session = Session::new(config, cli.format);
            session.run(io::stdin().lock(), out)?;
            return Ok(());
        }
    }

    let rendered = render(state.tree(), cli.format, &config)?;
    writeln!(out, "{}", rendered.trim_end())?;
    out.flush()?;
    Ok(())
}
