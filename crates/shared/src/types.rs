use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One reading of the wind vector, in range units (m/s, compass degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    pub direction: f32,
    pub speed: f32,
}

impl fmt::Display for WindSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} m/s \u{2022} {:.0}\u{00b0}", self.speed, self.direction)
    }
}

/// Read-only wind state exposed to renderers each tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindSnapshot {
    pub direction: f32,
    pub speed: f32,
    pub frozen: bool,
}

/// Wind field tuning, supplied once at session start. All values are
/// non-negative; callers normalize before the engine sees them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSettings {
    pub base_speed: f32,
    pub max_gust: f32,
    pub max_lull: f32,
    pub max_dir_swing: f32,
}

impl Default for WindSettings {
    fn default() -> Self {
        Self {
            base_speed: 5.0,
            max_gust: 3.0,
            max_lull: 2.0,
            max_dir_swing: 15.0,
        }
    }
}

impl WindSettings {
    /// Clamp every field into its valid domain, falling back to the default
    /// for non-finite input. The engine trusts its configuration; this is
    /// the caller-side normalization step.
    pub fn sanitized(self) -> Self {
        let def = Self::default();
        let norm = |v: f32, fallback: f32| if v.is_finite() { v.max(0.0) } else { fallback };
        Self {
            base_speed: norm(self.base_speed, def.base_speed),
            max_gust: norm(self.max_gust, def.max_gust),
            max_lull: norm(self.max_lull, def.max_lull),
            max_dir_swing: norm(self.max_dir_swing, def.max_dir_swing),
        }
    }
}

/// Animal silhouette presented on the target board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Silhouette {
    Rat,
    Crow,
    Rabbit,
    Squirrel,
}

impl Silhouette {
    pub const ALL: &[Silhouette] = &[
        Silhouette::Rat,
        Silhouette::Crow,
        Silhouette::Rabbit,
        Silhouette::Squirrel,
    ];

    /// Silhouette for the i-th target of a batch (shapes cycle in order).
    pub fn for_index(i: usize) -> Silhouette {
        Self::ALL[i % Self::ALL.len()]
    }
}

impl fmt::Display for Silhouette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rat => write!(f, "rat"),
            Self::Crow => write!(f, "crow"),
            Self::Rabbit => write!(f, "rabbit"),
            Self::Squirrel => write!(f, "squirrel"),
        }
    }
}

/// Scoring zone of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Hit,
    Split,
    Miss,
}

impl Zone {
    pub fn points(&self) -> u32 {
        match self {
            Zone::Hit => crate::HIT_POINTS,
            Zone::Split => crate::SPLIT_POINTS,
            Zone::Miss => 0,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => write!(f, "hit"),
            Self::Split => write!(f, "split"),
            Self::Miss => write!(f, "miss"),
        }
    }
}

/// One silhouette on the firing line. Geometry is fixed at batch build;
/// `shot_taken`/`result` are written exactly once, when the shot resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub silhouette: Silhouette,
    pub distance_m: f32,
    pub bearing_deg: f32,
    pub kill_radius: f32,
    pub shot_taken: bool,
    pub result: Option<Zone>,
}

/// Resolved impact for one shot, relative to the target center (px).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShotOutcome {
    pub impact_offset: Vec2,
    pub distance_from_center: f32,
    pub zone: Zone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    Competition,
    Practice,
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Competition => write!(f, "competition"),
            Self::Practice => write!(f, "practice"),
        }
    }
}

/// Session lifecycle. A shot moves Active -> Resolved; advancing moves
/// Resolved back to Active on the next target, or to Finished after the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Active,
    Resolved,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub seed: u64,
    pub marksman: String,
    pub total_targets: usize,
    pub mode: SessionMode,
    pub wind: WindSettings,
    pub max_ticks: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            marksman: "snap".into(),
            total_targets: crate::DEFAULT_TOTAL_TARGETS,
            mode: SessionMode::Competition,
            wind: WindSettings::default(),
            max_ticks: crate::MAX_SESSION_TICKS,
        }
    }
}

/// Read-only session state exposed to renderers each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub mode: SessionMode,
    pub current: usize,
    pub total_targets: usize,
    pub score: u32,
    pub results: Vec<Option<Zone>>,
}

/// Sampled wind reading recorded into the transcript.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindFrame {
    pub tick: u32,
    pub direction: f32,
    pub speed: f32,
}

/// Everything known about one resolved shot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotRecord {
    pub target_index: usize,
    pub silhouette: Silhouette,
    pub distance_m: f32,
    pub bearing_deg: f32,
    pub kill_radius: f32,
    /// Wind sample frozen at the trigger pull.
    pub wind: WindSample,
    pub impact_offset: Vec2,
    pub distance_from_center: f32,
    pub zone: Zone,
    pub points: u32,
    pub fired_at_tick: u32,
    pub hold_ticks: u32,
    /// True when the shot clock fired the round, not the marksman.
    pub forced: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEndReason {
    Completed,
    TickCap,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionResult {
    pub score: u32,
    pub max_score: u32,
    pub hits: u32,
    pub splits: u32,
    pub misses: u32,
    pub final_tick: u32,
    pub reason: SessionEndReason,
}

/// Full record of one session: configuration, sampled wind evolution,
/// every resolved shot, and the final tally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub config: SessionConfig,
    pub wind_frames: Vec<WindFrame>,
    pub shots: Vec<ShotRecord>,
    pub result: SessionResult,
}
