use windage_shared::*;

/// Aggregate metrics quantifying one session's marksmanship quality.
#[derive(Debug, Clone)]
pub struct DrillMetrics {
    /// Hits / shots taken.
    pub hit_rate: f32,
    /// Splits / shots taken.
    pub split_rate: f32,
    /// Misses / shots taken.
    pub miss_rate: f32,
    /// Mean aiming time before the trigger broke, seconds.
    pub mean_hold_secs: f32,
    /// Mean |lateral drift| at impact, px.
    pub mean_abs_drift: f32,
    /// Mean wind speed locked at the trigger pull, m/s.
    pub mean_speed_at_shot: f32,
    /// Fraction of rounds fired by the shot clock rather than the shooter.
    pub forced_rate: f32,
    /// Standard deviation of wind speed across the session.
    pub speed_stddev: f32,
    /// Total unwrapped heading span the wind covered, degrees.
    pub direction_span: f32,
    /// Score / maximum score.
    pub score_efficiency: f32,
    /// Weighted composite 0-100.
    pub discipline_score: f32,
}

/// Analyze a transcript and compute drill metrics.
pub fn analyze(transcript: &Transcript) -> DrillMetrics {
    let shots = &transcript.shots;
    if shots.is_empty() {
        return DrillMetrics {
            hit_rate: 0.0,
            split_rate: 0.0,
            miss_rate: 0.0,
            mean_hold_secs: 0.0,
            mean_abs_drift: 0.0,
            mean_speed_at_shot: 0.0,
            forced_rate: 0.0,
            speed_stddev: 0.0,
            direction_span: 0.0,
            score_efficiency: 0.0,
            discipline_score: 0.0,
        };
    }

    let n = shots.len() as f32;

    // --- Per-shot statistics ---
    let mut hits = 0u32;
    let mut splits = 0u32;
    let mut misses = 0u32;
    let mut hold_sum = 0.0f32;
    let mut drift_sum = 0.0f32;
    let mut speed_sum = 0.0f32;
    let mut forced = 0u32;

    for shot in shots {
        match shot.zone {
            Zone::Hit => hits += 1,
            Zone::Split => splits += 1,
            Zone::Miss => misses += 1,
        }
        hold_sum += shot.hold_ticks as f32 * DT;
        drift_sum += shot.impact_offset.x.abs();
        speed_sum += shot.wind.speed;
        if shot.forced {
            forced += 1;
        }
    }

    let hit_rate = hits as f32 / n;
    let split_rate = splits as f32 / n;
    let miss_rate = misses as f32 / n;
    let mean_hold_secs = hold_sum / n;
    let mean_abs_drift = drift_sum / n;
    let mean_speed_at_shot = speed_sum / n;
    let forced_rate = forced as f32 / n;

    // --- Wind field statistics from the sampled frames ---
    let frames = &transcript.wind_frames;
    let mut speed_stddev = 0.0;
    let mut direction_span = 0.0;
    if frames.len() > 1 {
        let m = frames.len() as f32;
        let mean = frames.iter().map(|f| f.speed).sum::<f32>() / m;
        let sq = frames.iter().map(|f| f.speed * f.speed).sum::<f32>() / m;
        speed_stddev = (sq - mean * mean).max(0.0).sqrt();

        // Unwrap the circular heading to measure the total swing covered.
        let mut unwrapped = frames[0].direction;
        let mut min_dir = unwrapped;
        let mut max_dir = unwrapped;
        for pair in frames.windows(2) {
            let mut d = pair[1].direction - pair[0].direction;
            while d > 180.0 {
                d -= 360.0;
            }
            while d < -180.0 {
                d += 360.0;
            }
            unwrapped += d;
            min_dir = min_dir.min(unwrapped);
            max_dir = max_dir.max(unwrapped);
        }
        direction_span = max_dir - min_dir;
    }

    let score_efficiency = if transcript.result.max_score > 0 {
        transcript.result.score as f32 / transcript.result.max_score as f32
    } else {
        0.0
    };

    // --- Discipline score (weighted composite 0-100) ---
    // Accuracy carries half the weight.
    let accuracy_score = score_efficiency * 50.0;
    // Tighter wind holds = better (capped at 20px mean drift).
    let drift_score = (1.0 - (mean_abs_drift / 20.0).min(1.0)) * 20.0;
    // Firing below the base speed means the shooter waited for lulls.
    let base = transcript.config.wind.base_speed;
    let lull_score = if base > 0.0 {
        ((base - mean_speed_at_shot) / base).clamp(0.0, 1.0) * 15.0
    } else {
        0.0
    };
    // Needing the shot clock is the opposite of discipline.
    let patience_score = (1.0 - forced_rate) * 15.0;

    let discipline_score = accuracy_score + drift_score + lull_score + patience_score;

    DrillMetrics {
        hit_rate,
        split_rate,
        miss_rate,
        mean_hold_secs,
        mean_abs_drift,
        mean_speed_at_shot,
        forced_rate,
        speed_stddev,
        direction_span,
        score_efficiency,
        discipline_score,
    }
}
