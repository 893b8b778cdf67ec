//! crash-sim: plays rounds end-to-end from the command line.
//!
//! Loads an optional TOML config (`--config` / `CRASH_CONFIG`), plays
//! `--rounds` / `CRASH_ROUNDS` rounds (default 5) using the configured human
//! inputs, and logs each settlement. Stop points come from a separate seeded
//! stream so the run is reproducible.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use rust_crash::core::{GameRng, SessionConfig, UniformSource};
use rust_crash::display;
use rust_crash::session::Session;

/// Play crash rounds against synthetic opponents and log the results.
#[derive(Parser, Debug)]
#[command(name = "crash-sim", version, about)]
struct Args {
    /// Session config file (TOML). Defaults apply when omitted.
    #[arg(short, long, env = "CRASH_CONFIG")]
    config: Option<PathBuf>,

    /// Number of rounds to play.
    #[arg(short, long, env = "CRASH_ROUNDS", default_value_t = 5)]
    rounds: u32,

    /// Emit logs as JSON lines.
    #[arg(long, env = "CRASH_LOG_JSON")]
    log_json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_json);

    let config = match &args.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => SessionConfig::default(),
    };

    let mut stop_points = GameRng::new(config.seed).for_context("stop-point");
    let max_multiplier = config.max_multiplier;
    let mut session = Session::new(config).context("Invalid session config")?;

    info!(
        balance = session.balance(),
        participants = session.participants().len(),
        rounds = args.rounds,
        speed = session.speed(),
        seed = session.config().seed,
        stop_point_seed = stop_points.seed(),
        "crash-sim starting"
    );

    for _ in 0..args.rounds {
        if let Err(e) = session.start_with_inputs() {
            warn!(error = %e, "Cannot start another round");
            break;
        }

        let stop_point = draw_stop_point(&mut stop_points, max_multiplier);
        let result = session.stop_round(stop_point)?;

        for row in display::ranking_rows(&session) {
            info!(
                position = row.position,
                name = %row.name,
                score = %row.score,
                "Ranking"
            );
        }
        info!(
            stop_point = format!("{:.2}x", result.stop_point),
            human_score = result.human_score,
            balance = result.balance_after,
            "Round complete"
        );
    }

    info!(
        balance = session.balance(),
        rounds = session.rounds_started(),
        "crash-sim finished"
    );
    Ok(())
}

/// Draw a stop point with the usual crash shape: `1 / (1 - u)`, capped.
fn draw_stop_point<R: UniformSource>(source: &mut R, max_multiplier: f64) -> f64 {
    let u = source.draw_uniform(0.0, 1.0);
    let point = (1.0 / (1.0 - u)).min(max_multiplier);
    (point * 100.0).floor() / 100.0
}

/// Initialise the `tracing` subscriber.
fn init_logging(json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rust_crash=info,crash_sim=info"));

    if json {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        fmt().with_env_filter(env_filter).with_target(true).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_crash::core::ScriptedSource;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_defaults_and_flags() {
        let args = Args::try_parse_from(["crash-sim"]).unwrap();
        assert_eq!(args.rounds, 5);
        assert!(args.config.is_none());

        let args =
            Args::try_parse_from(["crash-sim", "--rounds", "1", "--config", "crash.toml"]).unwrap();
        assert_eq!(args.rounds, 1);
        assert_eq!(args.config, Some(PathBuf::from("crash.toml")));
    }

    #[test]
    fn test_args_reject_bad_round_count() {
        assert!(Args::try_parse_from(["crash-sim", "--rounds", "two"]).is_err());
    }

    #[test]
    fn test_stop_point_shape() {
        let mut source = ScriptedSource::new([0.0, 0.5, 0.75, 0.999, 1.0]);

        assert_eq!(draw_stop_point(&mut source, 10.0), 1.0);
        assert_eq!(draw_stop_point(&mut source, 10.0), 2.0);
        assert_eq!(draw_stop_point(&mut source, 10.0), 4.0);
        assert_eq!(draw_stop_point(&mut source, 10.0), 10.0);
        assert_eq!(draw_stop_point(&mut source, 10.0), 10.0);
    }
}
