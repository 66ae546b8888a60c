use crate::observation::RangeView;
use crate::policy::Marksman;

use super::{PATIENCE_TICKS, SIGHT_ACQUIRE_TICKS};

/// Waits for the breeze to die down before committing: fires once the live
/// speed dips under a fraction of the base speed, or when patience runs out.
pub struct LullMarksman {
    lull_fraction: f32,
    patience: u32,
}

impl LullMarksman {
    pub fn new() -> Self {
        Self {
            lull_fraction: 0.8,
            patience: PATIENCE_TICKS,
        }
    }
}

impl Default for LullMarksman {
    fn default() -> Self {
        Self::new()
    }
}

impl Marksman for LullMarksman {
    fn name(&self) -> &str {
        "lull"
    }

    fn act(&mut self, view: &RangeView) -> bool {
        if view.ticks_on_target < SIGHT_ACQUIRE_TICKS {
            return false;
        }
        if view.wind.speed <= view.base_speed * self.lull_fraction {
            return true;
        }
        view.ticks_on_target >= self.patience
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windage_shared::*;

    fn view(speed: f32, ticks: u32) -> RangeView {
        RangeView {
            wind: WindSample { direction: 45.0, speed },
            base_speed: 5.0,
            target_distance_m: 25.0,
            target_bearing_deg: 10.0,
            ticks_on_target: ticks,
        }
    }

    #[test]
    fn test_lull_holds_in_steady_wind() {
        let mut m = LullMarksman::new();
        assert!(!m.act(&view(5.0, SIGHT_ACQUIRE_TICKS)));
        assert!(!m.act(&view(6.5, 100)));
    }

    #[test]
    fn test_lull_fires_when_wind_dips() {
        let mut m = LullMarksman::new();
        assert!(m.act(&view(3.9, SIGHT_ACQUIRE_TICKS)));
    }

    #[test]
    fn test_lull_never_fires_before_sight_settles() {
        let mut m = LullMarksman::new();
        assert!(!m.act(&view(0.0, SIGHT_ACQUIRE_TICKS - 1)));
    }

    #[test]
    fn test_patience_expires() {
        let mut m = LullMarksman::new();
        assert!(m.act(&view(8.0, PATIENCE_TICKS)));
    }
}
