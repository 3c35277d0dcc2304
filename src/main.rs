//! A Dog's Life headless runner
//!
//! Drives the simulation with a scripted tilt pattern, routes game events to
//! audio and logs progress. Usage: `dogs-life [SETTINGS_JSON] [TICKS]`.

use std::path::Path;

use glam::Vec2;

use dogs_life::audio::{AudioManager, LogBackend};
use dogs_life::consts::SIM_HZ;
use dogs_life::renderer::{SceneOptions, build_scene, tessellate};
use dogs_life::sim::{GameEvent, TickInput, TiltSource, tick};
use dogs_life::Settings;

/// One minute of game time
const DEFAULT_TICKS: u64 = 60 * SIM_HZ as u64;

/// Tilt that wanders in slow loops, resting every fourth stretch
struct ScriptedTilt {
    frame: u32,
}

impl TiltSource for ScriptedTilt {
    fn read_tilt(&mut self) -> Vec2 {
        let t = self.frame as f32;
        self.frame += 1;
        // First reading is the resting pose used for calibration
        if self.frame == 1 || (self.frame / 300) % 4 == 3 {
            return Vec2::ZERO;
        }
        Vec2::new(0.6 * (t / 90.0).sin(), 0.6 * (t / 140.0).sin())
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = args
        .next()
        .map(|path| Settings::load_or_default(Path::new(&path)))
        .unwrap_or_default();
    let ticks = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TICKS);

    log::info!("A Dog's Life (headless) starting: {ticks} ticks");

    let mut state = settings.new_game();
    let mut audio = AudioManager::from_settings(Box::new(LogBackend), &settings);
    let mut tilt = ScriptedTilt { frame: 0 };
    let mut wolf_down = false;

    for _ in 0..ticks {
        let input = TickInput {
            tilt: tilt.read_tilt(),
        };
        tick(&mut state, &input);

        let events = state.drain_events();
        audio.handle_events(&events);
        for event in &events {
            if let GameEvent::WolfHit { health } = event {
                if *health <= 0 && !wolf_down {
                    wolf_down = true;
                    log::info!("Wolf worn down at tick {}", state.time_ticks);
                }
            }
        }

        if state.time_ticks % (5 * SIM_HZ as u64) == 0 {
            log::info!(
                "t={}s dog=({:.0}, {:.0}) wolf=({:.0}, {:.0}) health={} prints={}",
                state.time_ticks / SIM_HZ as u64,
                state.dog.position.x,
                state.dog.position.y,
                state.wolf.body.position.x,
                state.wolf.body.position.y,
                state.wolf.health,
                state.footprints.len()
            );
        }
    }

    let scene = build_scene(
        &state,
        SceneOptions {
            show_health: settings.show_health,
        },
    );
    let vertices = tessellate(&scene, 16);
    log::info!(
        "Finished: wolf health {}, final frame {} primitives / {} vertices",
        state.wolf.health,
        scene.len(),
        vertices.len()
    );
}
