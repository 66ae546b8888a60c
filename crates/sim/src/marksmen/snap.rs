use crate::observation::RangeView;
use crate::policy::Marksman;

use super::SIGHT_ACQUIRE_TICKS;

/// Fires the moment the sight settles, taking whatever the wind gives.
/// The fastest shooter and the worst wind reader.
pub struct SnapMarksman;

impl SnapMarksman {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SnapMarksman {
    fn default() -> Self {
        Self::new()
    }
}

impl Marksman for SnapMarksman {
    fn name(&self) -> &str {
        "snap"
    }

    fn act(&mut self, view: &RangeView) -> bool {
        view.ticks_on_target >= SIGHT_ACQUIRE_TICKS
    }
}
