use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use windage_shared::*;

use crate::ballistics;
use crate::wind::WindProcess;

/// One scored run over a batch of targets.
///
/// The index only moves forward, the score only grows, and each target is
/// resolved at most once. Out-of-phase calls are silent no-ops so duplicate
/// input events (double trigger pulls, advance spam) are harmless.
pub struct CompetitionSession {
    pub targets: Vec<Target>,
    pub current: usize,
    pub score: u32,
    pub mode: SessionMode,
    pub phase: SessionPhase,
    rng: Pcg64,
}

impl CompetitionSession {
    /// Build the target batch and arm the first target. Competition mode
    /// rolls `total_targets` random silhouettes; practice mode sets up the
    /// single fixed near target.
    pub fn new(config: &SessionConfig, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let targets = match config.mode {
            SessionMode::Competition => build_targets(config.total_targets, &mut rng),
            SessionMode::Practice => vec![practice_target()],
        };
        let phase = if targets.is_empty() {
            SessionPhase::Finished
        } else {
            SessionPhase::Active
        };
        Self {
            targets,
            current: 0,
            score: 0,
            mode: config.mode,
            phase,
            rng,
        }
    }

    pub fn current_target(&self) -> Option<&Target> {
        self.targets.get(self.current)
    }

    /// Fire at the current target. Freezes the wind, resolves the impact
    /// against the frozen sample, scores it, and moves to Resolved.
    ///
    /// Returns `None` without side effects unless the session is Active with
    /// an unshot current target (the idempotent one-shot-per-target guard).
    pub fn submit_shot(&mut self, wind: &mut WindProcess) -> Option<ShotOutcome> {
        if self.phase != SessionPhase::Active {
            return None;
        }
        let Some(target) = self.targets.get(self.current) else {
            return None;
        };
        if target.shot_taken {
            return None;
        }

        let sample = wind.freeze();
        let jitter = self.rng.gen_range(-VERTICAL_JITTER_PX..=VERTICAL_JITTER_PX);
        let outcome = ballistics::resolve(target, sample, jitter);

        let target = &mut self.targets[self.current];
        target.shot_taken = true;
        target.result = Some(outcome.zone);
        self.score += outcome.zone.points();
        self.phase = SessionPhase::Resolved;
        Some(outcome)
    }

    /// Move on from a resolved target. The last target finishes the session;
    /// otherwise the index advances and the wind is re-initialized for the
    /// next lane. Returns true when a new target went active.
    pub fn advance(&mut self, wind: &mut WindProcess, now: u32) -> bool {
        if self.phase != SessionPhase::Resolved {
            return false;
        }
        if self.current + 1 >= self.targets.len() {
            self.phase = SessionPhase::Finished;
            return false;
        }
        self.current += 1;
        wind.unfreeze();
        wind.initialize(now);
        self.phase = SessionPhase::Active;
        true
    }

    /// Player-initiated early termination. The accumulated score stands.
    pub fn end(&mut self) {
        self.phase = SessionPhase::Finished;
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            mode: self.mode,
            current: self.current,
            total_targets: self.targets.len(),
            score: self.score,
            results: self.targets.iter().map(|t| t.result).collect(),
        }
    }
}

fn build_targets(count: usize, rng: &mut Pcg64) -> Vec<Target> {
    (0..count)
        .map(|i| {
            let distance_m = rng.gen_range(MIN_TARGET_DISTANCE_M..MAX_TARGET_DISTANCE_M);
            Target {
                silhouette: Silhouette::for_index(i),
                distance_m,
                bearing_deg: rng.gen_range(-MAX_TARGET_BEARING_DEG..MAX_TARGET_BEARING_DEG),
                kill_radius: ballistics::kill_radius_for(distance_m),
                shot_taken: false,
                result: None,
            }
        })
        .collect()
}

fn practice_target() -> Target {
    Target {
        silhouette: Silhouette::Rat,
        distance_m: PRACTICE_DISTANCE_M,
        bearing_deg: 0.0,
        kill_radius: ballistics::kill_radius_for(PRACTICE_DISTANCE_M),
        shot_taken: false,
        result: None,
    }
}
