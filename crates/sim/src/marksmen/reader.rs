use windage_shared::DRIFT_SCALE;

use crate::ballistics;
use crate::observation::RangeView;
use crate::policy::Marksman;

use super::{PATIENCE_TICKS, SIGHT_ACQUIRE_TICKS};

/// Reads the wind against the lane bearing and holds until the estimated
/// drift falls inside a tolerance. Timing-only: it still aims dead center,
/// it just refuses to break the shot while the flags disagree with it.
pub struct ReaderMarksman {
    tolerance_px: f32,
    patience: u32,
}

impl ReaderMarksman {
    pub fn new() -> Self {
        Self {
            tolerance_px: 8.0,
            patience: PATIENCE_TICKS,
        }
    }
}

impl Default for ReaderMarksman {
    fn default() -> Self {
        Self::new()
    }
}

impl Marksman for ReaderMarksman {
    fn name(&self) -> &str {
        "reader"
    }

    fn act(&mut self, view: &RangeView) -> bool {
        if view.ticks_on_target < SIGHT_ACQUIRE_TICKS {
            return false;
        }
        let drift = ballistics::crosswind_component(view.wind, view.target_bearing_deg)
            * view.target_distance_m
            * DRIFT_SCALE;
        if drift.abs() <= self.tolerance_px {
            return true;
        }
        view.ticks_on_target >= self.patience
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windage_shared::*;

    fn view(direction: f32, speed: f32, ticks: u32) -> RangeView {
        RangeView {
            wind: WindSample { direction, speed },
            base_speed: 5.0,
            target_distance_m: 40.0,
            target_bearing_deg: 0.0,
            ticks_on_target: ticks,
        }
    }

    #[test]
    fn test_reader_fires_on_calm_axis() {
        let mut m = ReaderMarksman::new();
        // Straight downwind: zero drift estimate no matter the speed.
        assert!(m.act(&view(0.0, 9.0, SIGHT_ACQUIRE_TICKS)));
    }

    #[test]
    fn test_reader_holds_in_full_crosswind() {
        let mut m = ReaderMarksman::new();
        // 6 m/s at 90 degrees over 40m estimates 48px of drift.
        assert!(!m.act(&view(90.0, 6.0, 200)));
    }

    #[test]
    fn test_reader_patience_expires() {
        let mut m = ReaderMarksman::new();
        assert!(m.act(&view(90.0, 6.0, PATIENCE_TICKS)));
    }
}
