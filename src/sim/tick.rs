//! Per-frame simulation tick
//!
//! Advances the whole game by one frame in a fixed order. The host must call
//! `tick` exactly once per rendered frame: the wolf's path, the move-phase
//! clocks and the footprint schedule all count frames.

use glam::Vec2;

use super::camera::move_creature;
use super::encounter::check_encounter;
use super::input::{Calibration, map_tilt_to_velocity};
use super::state::{Creature, GameState, WolfControl};
use super::trail::{age_footprints, maybe_emit_footprint};
use super::wolf::relative_speed;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Raw device tilt, as read this frame
    pub tilt: Vec2,
}

impl TickInput {
    pub fn tilt(x: f32, y: f32) -> Self {
        Self {
            tilt: Vec2::new(x, y),
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    // The first reading defines "level"
    let calibration = *state
        .calibration
        .get_or_insert_with(|| Calibration::capture(input.tilt));
    let tilt = calibration.apply(input.tilt);

    // Wolf: one generator step per tick, cached for everything downstream
    let (wolf_velocity, wolf_rig_input) = match state.wolf_control {
        WolfControl::Autonomous => {
            let velocity = state.wolf.motion.next_velocity();
            (velocity, relative_speed(velocity, state.wolf.body.max_speed))
        }
        WolfControl::Tilt => (map_tilt_to_velocity(tilt, state.wolf.body.max_speed), tilt),
    };
    state.wolf.body.velocity = wolf_velocity;
    move_creature(&mut state.wolf.body, wolf_velocity);
    let phase = state.time_ticks;
    if state.wolf.body.rig.update(wolf_rig_input.x, wolf_rig_input.y) {
        state
            .health_label
            .counter_rotate(wolf_rig_input.x, wolf_rig_input.y);
    }
    animate_expressions(&mut state.wolf.body, wolf_rig_input, phase);

    // Dog
    let dog_velocity = map_tilt_to_velocity(tilt, state.dog.max_speed);
    state.dog.velocity = dog_velocity;
    move_creature(&mut state.dog, dog_velocity);

    let followed = state.followed();
    let (target, target_velocity) = (followed.position, followed.velocity);
    state.camera.follow(target, target_velocity);

    state.dog.rig.update(tilt.x, tilt.y);
    animate_expressions(&mut state.dog, tilt, phase);

    // Trails
    age_footprints(&mut state.footprints);
    for creature in [&state.wolf.body, &state.dog] {
        if let Some(print) = maybe_emit_footprint(creature, state.time_ticks) {
            state.footprints.push(print);
        }
    }

    // Contact
    if let Some(hit) = check_encounter(state.dog.position, &mut state.wolf, &mut state.health_label) {
        state.events.push(hit);
    }

    state.time_ticks += 1;
}

/// Tail wag and idle head scanning, for creatures that do them.
///
/// `rig_input` is the relative velocity the rig was driven with this tick.
fn animate_expressions(creature: &mut Creature, rig_input: Vec2, phase: u64) {
    if creature.wags_tail {
        creature.rig.wag_tail(phase);
    }
    if creature.scans_when_idle {
        let rotation = creature.head_turn.update(rig_input.length());
        creature.rig.set_head_rotation(rotation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FIELD_SIZE;
    use crate::sim::rig::PartId;
    use crate::sim::state::{FollowTarget, GameEvent};
    use crate::sim::wolf::WolfMotion;

    #[test]
    fn test_first_tick_calibrates() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::tilt(0.1, -0.3));
        let cal = state.calibration.unwrap();
        assert_eq!(cal.baseline, Vec2::new(0.1, -0.3));

        // Holding the resting pose leaves the dog still
        let start = state.dog.position;
        for _ in 0..10 {
            tick(&mut state, &TickInput::tilt(0.1, -0.3));
        }
        assert_eq!(state.dog.position, start);
        assert_eq!(state.time_ticks, 11);
    }

    #[test]
    fn test_dog_moves_with_tilt() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::default());
        let start = state.dog.position;
        tick(&mut state, &TickInput::tilt(0.5, 0.0));
        assert_eq!(state.dog.velocity, Vec2::new(5.0, 0.0));
        assert_eq!(state.dog.position, start + Vec2::new(5.0, 0.0));
        assert_eq!(state.dog.rig.move_phase, 1);
    }

    #[test]
    fn test_wolf_follows_generator_once_per_tick() {
        let mut state = GameState::new(1);
        let start = state.wolf.body.position;
        let mut reference = WolfMotion::new();
        let mut expected = start;
        for _ in 0..500 {
            tick(&mut state, &TickInput::default());
            let v = reference.next_velocity();
            expected = (expected + v).clamp(Vec2::splat(-FIELD_SIZE), Vec2::splat(FIELD_SIZE));
            assert_eq!(state.wolf.body.velocity, v);
        }
        assert_eq!(state.wolf.motion.ticks, 500);
        assert_eq!(state.wolf.body.position, expected);
        // Separate counters that happen to agree since both started at zero
        assert_eq!(state.time_ticks, 500);
    }

    #[test]
    fn test_tilt_controlled_wolf() {
        let mut state = GameState::new(1);
        state.wolf_control = WolfControl::Tilt;
        tick(&mut state, &TickInput::default());
        let start = state.wolf.body.position;
        tick(&mut state, &TickInput::tilt(0.0, 2.0));
        assert_eq!(state.wolf.body.velocity, Vec2::new(0.0, 7.0));
        assert_eq!(state.wolf.body.position, start + Vec2::new(0.0, 7.0));
        assert_eq!(state.wolf.motion.ticks, 0);
    }

    #[test]
    fn test_contact_drains_health_every_tick() {
        let mut state = GameState::new(1);
        state.wolf_control = WolfControl::Tilt;
        state.wolf.body.position = state.dog.position;
        for _ in 0..30 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.wolf.health, 70);
        assert_eq!(state.health_label.text, "70");
        let hits = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::WolfHit { .. }))
            .count();
        assert_eq!(hits, 30);
    }

    #[test]
    fn test_no_contact_when_apart() {
        let mut state = GameState::new(1);
        state.wolf_control = WolfControl::Tilt;
        state.wolf.body.position = state.dog.position + Vec2::new(0.0, 20.0);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.wolf.health, 100);
    }

    #[test]
    fn test_idle_dog_scans_and_movement_cancels() {
        let mut state = GameState::new(1);
        for _ in 0..150 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.dog.head_turn.is_scanning());
        assert!(state.dog.rig.head_rotation() < 0.0);

        tick(&mut state, &TickInput::tilt(0.4, 0.4));
        assert!(!state.dog.head_turn.is_scanning());
        assert_eq!(state.dog.rig.head_rotation(), 0.0);
    }

    #[test]
    fn test_dog_tail_wags_while_still() {
        let mut state = GameState::new(1);
        for _ in 0..25 {
            tick(&mut state, &TickInput::default());
        }
        let tail3 = state.dog.rig.part(PartId::Tail3).unwrap();
        // Last wag used phase 24
        assert!((tail3.offset.x - 6.0 * (0.1f32 * 24.0 - 2.0).sin()).abs() < 1e-4);
        assert_eq!(state.dog.rig.move_phase, 0);
    }

    #[test]
    fn test_footprints_left_and_faded() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::default());
        // Still dog: cycle 15, four prints per 15 ticks
        let dog_prints = state
            .footprints
            .iter()
            .filter(|p| p.owner == crate::sim::CreatureKind::Dog)
            .count();
        assert_eq!(dog_prints, 1);

        for _ in 0..300 {
            tick(&mut state, &TickInput::default());
        }
        // Nothing outlives the fade
        assert!(state.footprints.iter().all(|p| p.age_ticks < 90));
        assert!(state.footprints.iter().all(|p| p.spawn_tick + 90 > state.time_ticks - 1));
    }

    #[test]
    fn test_camera_follows_dog_out_of_band() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::default());
        for _ in 0..20 {
            tick(&mut state, &TickInput::tilt(1.0, 0.0));
        }
        let screen = state.camera.to_screen(state.dog.position);
        let w = state.camera.viewport.x;
        // Held at the edge of the middle band, not re-centered
        assert!(screen.x <= 2.0 * w / 3.0 && screen.x > 2.0 * w / 3.0 - 10.0);
        assert!(state.camera.offset.x < 0.0);
        assert_eq!(state.camera.offset.y, 0.0);
    }

    #[test]
    fn test_camera_follows_wolf_when_chosen() {
        let mut state = GameState::new(1);
        state.follow_target = FollowTarget::Wolf;
        state.wolf_control = WolfControl::Tilt;
        tick(&mut state, &TickInput::default());
        for _ in 0..30 {
            tick(&mut state, &TickInput::tilt(1.0, 0.0));
        }
        let w = state.camera.viewport.x;
        // Panned by the wolf's 7 units per tick, not the dog's 10
        let wolf = state.camera.to_screen(state.wolf.body.position);
        assert!(wolf.x < 2.0 * w / 3.0 && wolf.x > 2.0 * w / 3.0 - 10.0);
        assert_eq!(state.camera.offset.x % 7.0, 0.0);
        let dog = state.camera.to_screen(state.dog.position);
        assert!(dog.x > 2.0 * w / 3.0);
    }

    #[test]
    fn test_undrained_events_only_hold_hits() {
        let mut state = GameState::new(1);
        for _ in 0..6000 {
            tick(&mut state, &TickInput::default());
        }
        assert!(!state.footprints.is_empty());
        assert_eq!(state.events.len(), (100 - state.wolf.health) as usize);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99_999);
        let mut b = GameState::new(99_999);
        let inputs = [
            TickInput::tilt(0.0, 0.0),
            TickInput::tilt(0.3, 0.2),
            TickInput::tilt(-0.8, 0.5),
            TickInput::tilt(1.4, -1.2),
            TickInput::tilt(0.01, 0.02),
        ];
        for i in 0..2000 {
            let input = inputs[i % inputs.len()];
            tick(&mut a, &input);
            tick(&mut b, &input);
        }
        let ja = serde_json::to_string(&a).unwrap();
        let jb = serde_json::to_string(&b).unwrap();
        assert_eq!(ja, jb);
    }
}
