use crate::observation::RangeView;

/// A trigger policy: decides *when* to fire during a target's aiming window.
/// Aim is always dead center; the wind decides where the round lands.
pub trait Marksman: Send {
    fn name(&self) -> &str;
    /// True to fire this tick.
    fn act(&mut self, view: &RangeView) -> bool;
}

/// Marksman that never pulls the trigger - every round comes from the shot
/// clock. Useful as a baseline.
pub struct HoldFire;

impl Marksman for HoldFire {
    fn name(&self) -> &str {
        "hold_fire"
    }

    fn act(&mut self, _view: &RangeView) -> bool {
        false
    }
}
