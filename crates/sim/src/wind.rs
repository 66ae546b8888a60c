use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use windage_shared::*;

/// Continuously evolving wind vector: exponential smoothing toward gust/lull
/// and heading targets that are re-rolled at random 1-3s intervals.
///
/// Deterministic given its seed. The tick counter is the only clock; callers
/// pull `retarget_if_due(now)` once per tick instead of the wind running its
/// own timer.
pub struct WindProcess {
    pub(crate) settings: WindSettings,
    pub(crate) rng: Pcg64,
    pub(crate) direction: f32, // degrees, wrapped to [0, 360)
    pub(crate) speed: f32,     // m/s, never negative
    pub(crate) target_direction: f32,
    pub(crate) target_speed: f32,
    pub(crate) last_retarget: u32,
    pub(crate) next_retarget_in: u32,
    pub(crate) frozen: bool,
    pub(crate) frozen_sample: Option<WindSample>,
}

impl WindProcess {
    pub fn new(settings: WindSettings, seed: u64) -> Self {
        let mut wind = Self {
            settings,
            rng: Pcg64::seed_from_u64(seed),
            direction: 0.0,
            speed: 0.0,
            target_direction: 0.0,
            target_speed: 0.0,
            last_retarget: 0,
            next_retarget_in: 0,
            frozen: false,
            frozen_sample: None,
        };
        wind.initialize(0);
        wind
    }

    /// Reset to a fresh breeze: base speed, random heading, targets pinned to
    /// the current state, first reroll scheduled. Called once per target.
    pub fn initialize(&mut self, now: u32) {
        self.speed = self.settings.base_speed;
        self.direction = self.rng.gen_range(0.0..360.0);
        self.target_speed = self.speed;
        self.target_direction = self.direction;
        self.frozen = false;
        self.frozen_sample = None;
        self.last_retarget = now;
        self.next_retarget_in = self.rng.gen_range(RETARGET_MIN_TICKS..=RETARGET_MAX_TICKS);
    }

    /// Re-roll the gust/heading targets once the current interval has elapsed.
    /// Each interval is drawn fresh; past intervals carry no memory.
    pub fn retarget_if_due(&mut self, now: u32) {
        if self.frozen {
            return;
        }
        if now.saturating_sub(self.last_retarget) < self.next_retarget_in {
            return;
        }

        let s = self.settings;
        self.target_speed = (s.base_speed + self.rng.gen_range(-s.max_lull..=s.max_gust)).max(0.0);
        self.target_direction = self.direction + self.rng.gen_range(-s.max_dir_swing..=s.max_dir_swing);
        self.last_retarget = now;
        self.next_retarget_in = self.rng.gen_range(RETARGET_MIN_TICKS..=RETARGET_MAX_TICKS);
    }

    /// One smoothing step toward the current targets. Heading always takes
    /// the shortest angular path, so a 350 -> 10 target crosses 0 rather than
    /// spinning the long way around.
    pub fn advance(&mut self) {
        if self.frozen {
            return;
        }

        let delta = angle_delta(self.target_direction, self.direction);
        self.direction = wrap_degrees(self.direction + delta * WIND_SMOOTHING);
        self.speed += (self.target_speed - self.speed) * WIND_SMOOTHING;
        self.speed = self.speed.max(0.0);
    }

    /// Lock the current reading for shot resolution. Until `unfreeze`,
    /// `advance`/`retarget_if_due` are no-ops and `sample` returns this value.
    pub fn freeze(&mut self) -> WindSample {
        let sample = self.sample();
        self.frozen_sample = Some(sample);
        self.frozen = true;
        sample
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
        self.frozen_sample = None;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn base_speed(&self) -> f32 {
        self.settings.base_speed
    }

    /// Current reading: the frozen sample while frozen, live state otherwise.
    pub fn sample(&self) -> WindSample {
        match self.frozen_sample {
            Some(sample) if self.frozen => sample,
            _ => WindSample {
                direction: self.direction,
                speed: self.speed,
            },
        }
    }

    pub fn snapshot(&self) -> WindSnapshot {
        let sample = self.sample();
        WindSnapshot {
            direction: sample.direction,
            speed: sample.speed,
            frozen: self.frozen,
        }
    }
}

/// Shortest angular difference target-current, wrapped into [-180, 180].
fn angle_delta(target: f32, current: f32) -> f32 {
    let mut d = target - current;
    while d > 180.0 {
        d -= 360.0;
    }
    while d < -180.0 {
        d += 360.0;
    }
    d
}

/// Wrap a heading into [0, 360).
fn wrap_degrees(mut deg: f32) -> f32 {
    while deg >= 360.0 {
        deg -= 360.0;
    }
    while deg < 0.0 {
        deg += 360.0;
    }
    deg
}
