mod lull;
mod reader;
mod snap;

pub use lull::LullMarksman;
pub use reader::ReaderMarksman;
pub use snap::SnapMarksman;

use windage_shared::TICK_RATE;

/// Ticks before the sight picture settles on a fresh target. No built-in
/// marksman fires earlier.
pub(crate) const SIGHT_ACQUIRE_TICKS: u32 = TICK_RATE / 2;

/// Default patience for the waiting marksmen, comfortably inside the shot
/// clock so a deliberate shot still beats a forced one.
pub(crate) const PATIENCE_TICKS: u32 = 8 * TICK_RATE;
