use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum, ValueHint};
use tracing_subscriber::EnvFilter;

use kemeny_anneal::anneal::{AcceptanceRule, AnnealConfig, AnnealRunner};
use kemeny_anneal::io::read_tournament;
use kemeny_anneal::ranking::Ranking;
use kemeny_anneal::report::Standings;

/// Rank tournament participants by minimizing the weighted Kemeny score
#[derive(Parser, Debug)]
#[command(name = "kemeny-anneal", version, about)]
struct Cli {
    /// Tournament file: participant count, `id,name` lines, a summary line,
    /// then `weight,preferred,over` lines
    #[arg(value_hint = ValueHint::FilePath)]
    tournament: PathBuf,

    /// Starting temperature
    #[arg(long, default_value_t = 1.0)]
    initial_temperature: f64,

    /// Temperature multiplier applied after each level, in (0, 1)
    #[arg(long, default_value_t = 0.95)]
    cooling_ratio: f64,

    /// Proposals evaluated per temperature level
    #[arg(long, default_value_t = 10)]
    temperature_length: usize,

    /// Worsening proposals tolerated before stopping
    #[arg(long, default_value_t = 8000)]
    stall_limit: usize,

    /// Hard cap on proposals (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_proposals: usize,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Acceptance rule for worsening proposals
    #[arg(long, value_enum, default_value_t = Acceptance::AbsoluteCost)]
    acceptance: Acceptance,

    /// Which ranking to print
    #[arg(long, value_enum, default_value_t = Report::Final)]
    report: Report,

    /// Keep searching after a zero-cost ranking is reached
    #[arg(long)]
    no_stop_at_zero: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum Acceptance {
    AbsoluteCost,
    Metropolis,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum Report {
    /// The ranking the search ended on
    Final,
    /// The lowest-cost ranking visited
    Best,
}

impl Cli {
    fn config(&self) -> AnnealConfig {
        let acceptance = match self.acceptance {
            Acceptance::AbsoluteCost => AcceptanceRule::AbsoluteCost,
            Acceptance::Metropolis => AcceptanceRule::Metropolis,
        };
        let config = AnnealConfig::default()
            .with_initial_temperature(self.initial_temperature)
            .with_cooling_ratio(self.cooling_ratio)
            .with_temperature_length(self.temperature_length)
            .with_stall_limit(self.stall_limit)
            .with_max_proposals(self.max_proposals)
            .with_acceptance(acceptance)
            .with_stop_at_zero_cost(!self.no_stop_at_zero);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let timer = Instant::now();
    let tournament = read_tournament(&cli.tournament)
        .with_context(|| format!("loading {}", cli.tournament.display()))?;

    let config = cli.config();
    let initial = Ranking::identity(&tournament.participants);
    let result = AnnealRunner::run(initial, &tournament.weights, &config)
        .context("invalid annealing configuration")?;

    let (ranking, cost) = match cli.report {
        Report::Final => (&result.ranking, result.cost),
        Report::Best => (&result.best_ranking, result.best_cost),
    };
    print!(
        "{}",
        Standings::new(&tournament.participants, ranking, cost).with_elapsed(timer.elapsed())
    );
    Ok(())
}
