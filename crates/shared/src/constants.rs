// Tick clock
pub const TICK_RATE: u32 = 60;
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// Wind process
pub const WIND_SMOOTHING: f32 = 0.05;
pub const RETARGET_MIN_TICKS: u32 = TICK_RATE; // gust/lull reroll every 1-3s
pub const RETARGET_MAX_TICKS: u32 = 3 * TICK_RATE;

// Ballistics
// Lateral drift in render-plane px per (m/s of crosswind * m of range).
// Tuning knob, not derived physics.
pub const DRIFT_SCALE: f32 = 0.2;
pub const VERTICAL_JITTER_PX: f32 = 4.0;
pub const SPLIT_FACTOR: f32 = 1.5;

// Kill-zone tolerance bands (px). Tolerance widens with range to offset
// the harder wind hold on far silhouettes.
pub const NEAR_BAND_M: f32 = 20.0;
pub const MID_BAND_M: f32 = 35.0;
pub const NEAR_KILL_RADIUS_PX: f32 = 10.0;
pub const MID_KILL_RADIUS_PX: f32 = 17.0;
pub const FAR_KILL_RADIUS_PX: f32 = 28.0;

// Target generation
pub const MIN_TARGET_DISTANCE_M: f32 = 10.0;
pub const MAX_TARGET_DISTANCE_M: f32 = 50.0;
pub const MAX_TARGET_BEARING_DEG: f32 = 30.0;
pub const PRACTICE_DISTANCE_M: f32 = 10.0;

// Scoring
pub const HIT_POINTS: u32 = 2;
pub const SPLIT_POINTS: u32 = 1;

// Session pacing
pub const DEFAULT_TOTAL_TARGETS: usize = 20;
pub const SHOT_CLOCK_TICKS: u32 = 10 * TICK_RATE; // aiming window per target
pub const RESULT_PAUSE_TICKS: u32 = TICK_RATE / 2; // dwell on the result marker
pub const MAX_SESSION_TICKS: u32 = 36_000; // 10 min hard cap at 60Hz

// Transcript wind sampling
pub const WIND_FRAME_INTERVAL: u32 = 4; // record every 4th tick = 15fps
