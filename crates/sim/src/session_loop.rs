use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use windage_shared::*;

use crate::observation;
use crate::policy::Marksman;
use crate::session::CompetitionSession;
use crate::wind::WindProcess;

/// Run one full training session under a trigger policy.
///
/// Single-threaded cooperative loop: each tick advances the wind exactly
/// once, then handles at most one event (a fire decision while aiming, or
/// the result-pause countdown) to completion. A shot clock force-fires so
/// every session terminates; `config.max_ticks` is the hard backstop.
pub fn run_session(config: &SessionConfig, marksman: &mut dyn Marksman) -> Transcript {
    // One root seed fans out to the wind process and the target batch so a
    // config reproduces the whole session.
    let mut root = Pcg64::seed_from_u64(config.seed);
    let wind_seed: u64 = root.gen();
    let batch_seed: u64 = root.gen();

    let mut wind = WindProcess::new(config.wind, wind_seed);
    let mut session = CompetitionSession::new(config, batch_seed);

    let mut wind_frames = Vec::new();
    let mut shots: Vec<ShotRecord> = Vec::new();
    let mut ticks_on_target: u32 = 0;
    let mut pause_left: u32 = 0;
    let mut final_tick: u32 = 0;
    let mut reason = SessionEndReason::TickCap;

    for tick in 0..config.max_ticks {
        final_tick = tick;

        wind.retarget_if_due(tick);
        wind.advance();

        if tick % WIND_FRAME_INTERVAL == 0 {
            let sample = wind.sample();
            wind_frames.push(WindFrame {
                tick,
                direction: sample.direction,
                speed: sample.speed,
            });
        }

        match session.phase {
            SessionPhase::Active => {
                ticks_on_target += 1;
                let Some(target) = session.current_target() else {
                    break;
                };
                let view = observation::range_view(&wind, target, ticks_on_target);
                let forced = ticks_on_target >= SHOT_CLOCK_TICKS;
                if forced || marksman.act(&view) {
                    let index = session.current;
                    if let Some(outcome) = session.submit_shot(&mut wind) {
                        let target = &session.targets[index];
                        shots.push(ShotRecord {
                            target_index: index,
                            silhouette: target.silhouette,
                            distance_m: target.distance_m,
                            bearing_deg: target.bearing_deg,
                            kill_radius: target.kill_radius,
                            wind: wind.sample(),
                            impact_offset: outcome.impact_offset,
                            distance_from_center: outcome.distance_from_center,
                            zone: outcome.zone,
                            points: outcome.zone.points(),
                            fired_at_tick: tick,
                            hold_ticks: ticks_on_target,
                            forced,
                        });
                        pause_left = RESULT_PAUSE_TICKS;
                    }
                }
            }
            SessionPhase::Resolved => {
                if pause_left > 0 {
                    pause_left -= 1;
                }
                if pause_left == 0 {
                    session.advance(&mut wind, tick);
                    ticks_on_target = 0;
                }
            }
            SessionPhase::Finished => {}
        }

        if session.is_finished() {
            reason = SessionEndReason::Completed;
            break;
        }
    }

    let result = summarize(&session, final_tick, reason);
    Transcript {
        config: config.clone(),
        wind_frames,
        shots,
        result,
    }
}

fn summarize(session: &CompetitionSession, final_tick: u32, reason: SessionEndReason) -> SessionResult {
    let mut hits = 0;
    let mut splits = 0;
    let mut misses = 0;
    for target in &session.targets {
        match target.result {
            Some(Zone::Hit) => hits += 1,
            Some(Zone::Split) => splits += 1,
            Some(Zone::Miss) => misses += 1,
            None => {}
        }
    }
    SessionResult {
        score: session.score,
        max_score: HIT_POINTS * session.targets.len() as u32,
        hits,
        splits,
        misses,
        final_tick,
        reason,
    }
}
