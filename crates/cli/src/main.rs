use std::path::PathBuf;

use clap::{Parser, Subcommand};

use windage_shared::*;
use windage_sim::analyzer;
use windage_sim::marksmen::{LullMarksman, ReaderMarksman, SnapMarksman};
use windage_sim::{run_session, HoldFire, Marksman};

mod sweep;
mod transcript;

#[derive(Parser)]
#[command(name = "windage", about = "Wind-hold marksmanship trainer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a training session with one marksman
    Run {
        /// Trigger policy (snap, lull, reader, hold_fire)
        #[arg(long, default_value = "snap")]
        marksman: String,

        /// Random seed for the session
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Number of targets in the batch
        #[arg(long, default_value_t = 20)]
        targets: usize,

        /// Practice mode: a single fixed near target
        #[arg(long)]
        practice: bool,

        /// Baseline wind speed, m/s
        #[arg(long, default_value_t = 5.0)]
        base_speed: f32,

        /// Largest gust above the baseline, m/s
        #[arg(long, default_value_t = 3.0)]
        max_gust: f32,

        /// Deepest lull below the baseline, m/s
        #[arg(long, default_value_t = 2.0)]
        max_lull: f32,

        /// Largest heading swing per reroll, degrees
        #[arg(long, default_value_t = 15.0)]
        max_dir_swing: f32,

        /// Output path for transcript JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Compare marksmen over a common set of seeds
    Drill {
        /// Comma-separated list of marksman names
        #[arg(long, default_value = "snap,lull,reader")]
        marksmen: String,

        /// Sessions per marksman (seeds 0..rounds)
        #[arg(long, default_value_t = 20)]
        rounds: u64,

        /// Targets per session
        #[arg(long, default_value_t = 20)]
        targets: usize,
    },

    /// Sweep wind parameters and measure their effect on accuracy
    Sweep {
        /// Parameter to sweep (default: all)
        #[arg(long)]
        param: Option<String>,

        /// Values per parameter, linearly spaced
        #[arg(long, default_value_t = 5)]
        steps: usize,

        /// Seeds per value and marksman
        #[arg(long, default_value_t = 10)]
        seeds: u64,

        /// Comma-separated list of marksman names
        #[arg(long, default_value = "snap,lull,reader")]
        marksmen: String,

        /// Targets per session
        #[arg(long, default_value_t = 20)]
        targets: usize,

        /// Output path for CSV
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Analyze a saved transcript
    Analyze {
        /// Path to a transcript JSON written by `run --output`
        transcript: PathBuf,
    },
}

/// Resolve a marksman name to a boxed trait object.
pub fn resolve_marksman(name: &str) -> Box<dyn Marksman> {
    match name {
        "snap" => Box::new(SnapMarksman::new()),
        "lull" => Box::new(LullMarksman::new()),
        "reader" => Box::new(ReaderMarksman::new()),
        "hold_fire" => Box::new(HoldFire),
        other => {
            eprintln!(
                "Unknown marksman '{}'. Valid options: snap, lull, reader, hold_fire.",
                other
            );
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            marksman,
            seed,
            targets,
            practice,
            base_speed,
            max_gust,
            max_lull,
            max_dir_swing,
            output,
        } => cmd_run(
            &marksman,
            seed,
            targets,
            practice,
            WindSettings {
                base_speed,
                max_gust,
                max_lull,
                max_dir_swing,
            },
            output,
        ),

        Commands::Drill {
            marksmen,
            rounds,
            targets,
        } => cmd_drill(&marksmen, rounds, targets),

        Commands::Sweep {
            param,
            steps,
            seeds,
            marksmen,
            targets,
            output,
        } => sweep::cmd_sweep(param.as_deref(), steps, seeds, &marksmen, targets, output),

        Commands::Analyze { transcript } => cmd_analyze(&transcript),
    }
}

fn cmd_run(
    marksman_name: &str,
    seed: u64,
    targets: usize,
    practice: bool,
    wind: WindSettings,
    output: Option<PathBuf>,
) {
    let mut marksman = resolve_marksman(marksman_name);

    let config = SessionConfig {
        seed,
        marksman: marksman.name().to_string(),
        total_targets: targets.max(1),
        mode: if practice {
            SessionMode::Practice
        } else {
            SessionMode::Competition
        },
        wind: wind.sanitized(),
        max_ticks: MAX_SESSION_TICKS,
    };

    println!(
        "Running session: {} ({}, seed={}, wind base {:.1} m/s)",
        config.marksman, config.mode, seed, config.wind.base_speed
    );

    let transcript = run_session(&config, marksman.as_mut());
    let result = &transcript.result;

    println!();
    println!("=== Session Result ===");
    println!("Score:      {} / {}", result.score, result.max_score);
    println!(
        "Zones:      {} hits, {} splits, {} misses",
        result.hits, result.splits, result.misses
    );
    println!(
        "Duration:   {:.1}s ({} ticks), {:?}",
        result.final_tick as f32 / TICK_RATE as f32,
        result.final_tick,
        result.reason
    );
    println!();
    println!(
        "{:>3} {:<10} {:>7} {:>9} {:>16} {:>9} {:>7}",
        "#", "target", "range", "bearing", "wind", "drift", "zone"
    );
    println!("{:-<68}", "");
    for shot in &transcript.shots {
        println!(
            "{:>3} {:<10} {:>6.1}m {:>8.1}\u{00b0} {:>16} {:>+8.1}px {:>7}{}",
            shot.target_index + 1,
            shot.silhouette.to_string(),
            shot.distance_m,
            shot.bearing_deg,
            shot.wind.to_string(),
            shot.impact_offset.x,
            shot.zone.to_string(),
            if shot.forced { " (clock)" } else { "" },
        );
    }

    if let Some(path) = output {
        match serde_json::to_string_pretty(&transcript) {
            Ok(json) => match std::fs::write(&path, json) {
                Ok(()) => println!("\nTranscript written to {}", path.display()),
                Err(e) => eprintln!("\nFailed to write transcript: {}", e),
            },
            Err(e) => eprintln!("\nFailed to serialize transcript: {}", e),
        }
    }
}

fn cmd_drill(marksmen_str: &str, rounds: u64, targets: usize) {
    let names: Vec<&str> = marksmen_str.split(',').map(|s| s.trim()).collect();

    if names.is_empty() || rounds == 0 {
        eprintln!("Drill requires at least one marksman and one round.");
        std::process::exit(1);
    }

    println!(
        "Drill: {} marksmen, {} rounds of {} targets",
        names.len(),
        rounds,
        targets
    );
    println!();

    struct Standing {
        name: String,
        total_score: u32,
        max_score: u32,
        hits: u32,
        shots: u32,
        forced: u32,
    }

    let mut standings: Vec<Standing> = Vec::new();

    for name in &names {
        let mut total_score = 0;
        let mut max_score = 0;
        let mut hits = 0;
        let mut shots = 0;
        let mut forced = 0;

        for seed in 0..rounds {
            let mut marksman = resolve_marksman(name);
            let config = SessionConfig {
                seed,
                marksman: marksman.name().to_string(),
                total_targets: targets.max(1),
                mode: SessionMode::Competition,
                wind: WindSettings::default(),
                max_ticks: MAX_SESSION_TICKS,
            };
            let transcript = run_session(&config, marksman.as_mut());
            total_score += transcript.result.score;
            max_score += transcript.result.max_score;
            hits += transcript.result.hits;
            shots += transcript.shots.len() as u32;
            forced += transcript.shots.iter().filter(|s| s.forced).count() as u32;
        }

        standings.push(Standing {
            name: name.to_string(),
            total_score,
            max_score,
            hits,
            shots,
            forced,
        });
    }

    standings.sort_by(|a, b| b.total_score.cmp(&a.total_score));

    println!(
        "{:<12} {:>8} {:>8} {:>8} {:>8}",
        "Marksman", "Score", "Score%", "Hit%", "Clock%"
    );
    println!("{:-<48}", "");
    for s in &standings {
        println!(
            "{:<12} {:>8} {:>7.1}% {:>7.1}% {:>7.1}%",
            s.name,
            s.total_score,
            100.0 * s.total_score as f32 / s.max_score.max(1) as f32,
            100.0 * s.hits as f32 / s.shots.max(1) as f32,
            100.0 * s.forced as f32 / s.shots.max(1) as f32,
        );
    }
}

fn cmd_analyze(path: &PathBuf) {
    let transcript = match transcript::load(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to load transcript {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let metrics = analyzer::analyze(&transcript);

    println!("=== Transcript: {} ===", path.display());
    println!(
        "Marksman: {} (seed={}, {} targets, {})",
        transcript.config.marksman,
        transcript.config.seed,
        transcript.config.total_targets,
        transcript.config.mode,
    );
    println!();
    println!("Score:            {} / {}", transcript.result.score, transcript.result.max_score);
    println!("Hit rate:         {:>6.1}%", metrics.hit_rate * 100.0);
    println!("Split rate:       {:>6.1}%", metrics.split_rate * 100.0);
    println!("Miss rate:        {:>6.1}%", metrics.miss_rate * 100.0);
    println!("Mean hold:        {:>6.2}s", metrics.mean_hold_secs);
    println!("Mean |drift|:     {:>6.1}px", metrics.mean_abs_drift);
    println!("Speed at shot:    {:>6.2} m/s", metrics.mean_speed_at_shot);
    println!("Clock-forced:     {:>6.1}%", metrics.forced_rate * 100.0);
    println!("Wind speed std:   {:>6.2} m/s", metrics.speed_stddev);
    println!("Heading span:     {:>6.1}\u{00b0}", metrics.direction_span);
    println!("Discipline score: {:>6.1} / 100", metrics.discipline_score);
}
