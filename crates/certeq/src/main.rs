use certeq::{App, init_logging};
use certeq_core::RateBounds;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "certeq")]
#[command(about = "Certainty-equivalent discount rates for long-horizon infrastructure analysis")]
struct Args {
    /// Lower bound of the annual discount rate interval
    #[arg(long, default_value_t = RateBounds::INFRASTRUCTURE_BASELINE.min_rate)]
    min_rate: f64,

    /// Upper bound of the annual discount rate interval
    #[arg(long, default_value_t = RateBounds::INFRASTRUCTURE_BASELINE.max_rate)]
    max_rate: f64,

    /// Monte Carlo trials per horizon for the smoothed band
    #[arg(long, default_value_t = 1_000)]
    trials: usize,

    /// Seed for the random source (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let bounds = RateBounds::new(args.min_rate, args.max_rate)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, trials = args.trials, "computing rate curve");

    let mut app = App::new(bounds, args.trials, seed)?;

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
