use windage_shared::*;

use crate::wind::WindProcess;

/// What the shooter can see on any given tick: the wind flags, the posted
/// range card for the current lane, and how long the sight has been up.
#[derive(Debug, Clone, Copy)]
pub struct RangeView {
    pub wind: WindSample,
    pub base_speed: f32,
    pub target_distance_m: f32,
    pub target_bearing_deg: f32,
    pub ticks_on_target: u32,
}

/// Build the per-tick view handed to a marksman (or a renderer).
pub fn range_view(wind: &WindProcess, target: &Target, ticks_on_target: u32) -> RangeView {
    RangeView {
        wind: wind.sample(),
        base_speed: wind.base_speed(),
        target_distance_m: target.distance_m,
        target_bearing_deg: target.bearing_deg,
        ticks_on_target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mirrors_wind_and_target() {
        let wind = WindProcess::new(WindSettings::default(), 42);
        let target = Target {
            silhouette: Silhouette::Crow,
            distance_m: 33.0,
            bearing_deg: -12.0,
            kill_radius: 17.0,
            shot_taken: false,
            result: None,
        };
        let view = range_view(&wind, &target, 90);
        assert_eq!(view.wind, wind.sample());
        assert_eq!(view.base_speed, 5.0);
        assert_eq!(view.target_distance_m, 33.0);
        assert_eq!(view.target_bearing_deg, -12.0);
        assert_eq!(view.ticks_on_target, 90);
    }
}
