use std::io::Write;
use std::path::PathBuf;

use rayon::prelude::*;

use windage_shared::*;
use windage_sim::analyzer::{self, DrillMetrics};
use windage_sim::run_session;

use crate::resolve_marksman;

/// A sweepable wind parameter with its name, range, and accessor.
struct SweepParam {
    name: &'static str,
    min: f32,
    default: f32,
    max: f32,
    /// Apply this parameter value to a WindSettings.
    apply: fn(&mut WindSettings, f32),
}

const SWEEP_PARAMS: &[SweepParam] = &[
    SweepParam {
        name: "base_speed",
        min: 0.0,
        default: 5.0,
        max: 12.0,
        apply: |w, v| w.base_speed = v,
    },
    SweepParam {
        name: "max_gust",
        min: 0.0,
        default: 3.0,
        max: 8.0,
        apply: |w, v| w.max_gust = v,
    },
    SweepParam {
        name: "max_lull",
        min: 0.0,
        default: 2.0,
        max: 5.0,
        apply: |w, v| w.max_lull = v,
    },
    SweepParam {
        name: "max_dir_swing",
        min: 0.0,
        default: 15.0,
        max: 60.0,
        apply: |w, v| w.max_dir_swing = v,
    },
];

/// Aggregated metrics for one parameter value across all marksmen and seeds.
struct AggResult {
    value: f32,
    mean_score_pct: f32,
    mean_hit_rate: f32,
    mean_abs_drift: f32,
    mean_hold_secs: f32,
    mean_discipline: f32,
    session_count: u32,
}

/// A single session job to be run in parallel.
struct SessionJob {
    marksman: String,
    seed: u64,
    targets: usize,
    wind: WindSettings,
}

fn run_job(job: &SessionJob) -> (DrillMetrics, f32) {
    let mut marksman = resolve_marksman(&job.marksman);
    let config = SessionConfig {
        seed: job.seed,
        marksman: job.marksman.clone(),
        total_targets: job.targets,
        mode: SessionMode::Competition,
        wind: job.wind,
        max_ticks: MAX_SESSION_TICKS,
    };
    let transcript = run_session(&config, marksman.as_mut());
    let score_pct = if transcript.result.max_score > 0 {
        100.0 * transcript.result.score as f32 / transcript.result.max_score as f32
    } else {
        0.0
    };
    (analyzer::analyze(&transcript), score_pct)
}

fn sweep_param(
    param: &SweepParam,
    steps: usize,
    seeds: u64,
    marksmen: &[&str],
    targets: usize,
) -> Vec<AggResult> {
    // Linearly-spaced values
    let values: Vec<f32> = if steps == 1 {
        vec![param.default]
    } else {
        (0..steps)
            .map(|i| param.min + (param.max - param.min) * i as f32 / (steps - 1) as f32)
            .collect()
    };

    values
        .iter()
        .map(|&value| {
            let jobs: Vec<SessionJob> = marksmen
                .iter()
                .flat_map(|name| {
                    (0..seeds).map(move |seed| {
                        let mut wind = WindSettings::default();
                        (param.apply)(&mut wind, value);
                        SessionJob {
                            marksman: name.to_string(),
                            seed,
                            targets,
                            wind,
                        }
                    })
                })
                .collect();

            let results: Vec<(DrillMetrics, f32)> = jobs.par_iter().map(run_job).collect();

            let n = results.len() as f32;
            AggResult {
                value,
                mean_score_pct: results.iter().map(|(_, pct)| pct).sum::<f32>() / n,
                mean_hit_rate: results.iter().map(|(m, _)| m.hit_rate).sum::<f32>() / n,
                mean_abs_drift: results.iter().map(|(m, _)| m.mean_abs_drift).sum::<f32>() / n,
                mean_hold_secs: results.iter().map(|(m, _)| m.mean_hold_secs).sum::<f32>() / n,
                mean_discipline: results.iter().map(|(m, _)| m.discipline_score).sum::<f32>() / n,
                session_count: results.len() as u32,
            }
        })
        .collect()
}

fn print_param_table(param_name: &str, results: &[AggResult]) {
    println!("\n--- {} ---", param_name);
    println!(
        "{:>10} {:>8} {:>8} {:>9} {:>8} {:>9}",
        "value", "score%", "hit%", "drift", "hold", "disciplin"
    );
    println!("{:-<58}", "");

    // Mark the hardest setting that still scores: lowest mean score%.
    let hardest_idx = results
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.mean_score_pct.partial_cmp(&b.mean_score_pct).unwrap())
        .map(|(i, _)| i);

    for (i, r) in results.iter().enumerate() {
        let marker = if Some(i) == hardest_idx { " *" } else { "" };
        println!(
            "{:>10.2} {:>7.1}% {:>7.1}% {:>7.1}px {:>7.2}s {:>9.1}{}",
            r.value,
            r.mean_score_pct,
            r.mean_hit_rate * 100.0,
            r.mean_abs_drift,
            r.mean_hold_secs,
            r.mean_discipline,
            marker,
        );
    }
}

fn write_csv(path: &std::path::Path, all_results: &[(&str, Vec<AggResult>)]) {
    let mut file = match std::fs::File::create(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to create CSV {}: {}", path.display(), e);
            return;
        }
    };

    let mut write_all = || -> std::io::Result<()> {
        writeln!(
            file,
            "parameter,value,score_pct,hit_rate,mean_abs_drift,mean_hold_secs,discipline,session_count"
        )?;
        for (param_name, results) in all_results {
            for r in results {
                writeln!(
                    file,
                    "{},{:.4},{:.2},{:.4},{:.2},{:.3},{:.2},{}",
                    param_name,
                    r.value,
                    r.mean_score_pct,
                    r.mean_hit_rate,
                    r.mean_abs_drift,
                    r.mean_hold_secs,
                    r.mean_discipline,
                    r.session_count,
                )?;
            }
        }
        Ok(())
    };

    match write_all() {
        Ok(()) => println!("\nCSV written to {}", path.display()),
        Err(e) => eprintln!("\nFailed to write CSV: {}", e),
    }
}

pub fn cmd_sweep(
    param_filter: Option<&str>,
    steps: usize,
    seeds: u64,
    marksmen_str: &str,
    targets: usize,
    output: Option<PathBuf>,
) {
    let marksmen: Vec<&str> = marksmen_str.split(',').map(|s| s.trim()).collect();

    if marksmen.is_empty() || steps == 0 || seeds == 0 {
        eprintln!("Sweep requires at least one marksman, one step and one seed.");
        std::process::exit(1);
    }

    // Filter to requested parameter(s)
    let params_to_sweep: Vec<&SweepParam> = if let Some(name) = param_filter {
        match SWEEP_PARAMS.iter().find(|p| p.name == name) {
            Some(p) => vec![p],
            None => {
                eprintln!(
                    "Unknown parameter '{}'. Available: {}",
                    name,
                    SWEEP_PARAMS
                        .iter()
                        .map(|p| p.name)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                std::process::exit(1);
            }
        }
    } else {
        SWEEP_PARAMS.iter().collect()
    };

    let sessions_per_param = marksmen.len() * seeds as usize * steps;
    println!(
        "=== Wind Sweep ===\nMarksmen: {} | Steps: {} | Seeds: {} | Targets: {}\nParams: {} | Total sessions: {}",
        marksmen.join(", "),
        steps,
        seeds,
        targets,
        params_to_sweep.len(),
        params_to_sweep.len() * sessions_per_param,
    );

    let start = std::time::Instant::now();

    let mut all_results: Vec<(&str, Vec<AggResult>)> = Vec::new();
    let mut hardest_per_param: Vec<(&str, f32, f32)> = Vec::new();

    for param in &params_to_sweep {
        let results = sweep_param(param, steps, seeds, &marksmen, targets);

        if let Some(hardest) = results
            .iter()
            .min_by(|a, b| a.mean_score_pct.partial_cmp(&b.mean_score_pct).unwrap())
        {
            hardest_per_param.push((param.name, hardest.value, hardest.mean_score_pct));
        }

        print_param_table(param.name, &results);
        all_results.push((param.name, results));
    }

    let elapsed = start.elapsed();
    println!("\n=== Summary ({:.1}s) ===", elapsed.as_secs_f32());
    println!("{:<16} {:>14} {:>10}", "Parameter", "Hardest Value", "Score%");
    println!("{:-<42}", "");
    for (name, value, score_pct) in &hardest_per_param {
        println!("{:<16} {:>14.2} {:>9.1}%", name, value, score_pct);
    }

    if let Some(path) = &output {
        write_csv(path, &all_results);
    }
}
