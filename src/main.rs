//! Multiball entry point
//!
//! Runs the toy headless: one seed ball under gravity, a few scripted
//! spawns, the wall-impact ping on every bounce, and population summaries
//! through the trace renderer. Embedders wanting pixels implement
//! `SceneRenderer` against the same loop.

use std::path::Path;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use multiball::Settings;
use multiball::app::App;
use multiball::audio::AudioManager;
use multiball::platform::{ScriptedInput, SystemClock};
use multiball::renderer::TraceRenderer;
use multiball::sim::Simulation;

/// Frame pacing for the demo loop
const FRAME_TIME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();
    log::info!("Multiball starting...");

    let settings = Settings::load();
    if !Path::new(Settings::FILE_NAME).exists() {
        settings.save();
    }

    let seed = settings.seed.unwrap_or_else(time_seed);
    log::info!("Simulation seed: {seed}");

    let mut sim = Simulation::new(seed);
    sim.spawn_random();

    let mut audio = AudioManager::new();
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);

    // Extra spawns early on, then let duplication take over
    let total_frames = (settings.run_seconds.max(0.0) * 60.0) as u64;
    let spawn_frames = vec![60, 120, 180];
    let input = ScriptedInput::new(spawn_frames, Some(total_frames));

    let mut app = App::new(
        sim,
        audio,
        SystemClock::new(),
        input,
        TraceRenderer::new(60),
    );

    while app.frame() {
        thread::sleep(FRAME_TIME);
    }

    log::info!(
        "Done: {} balls after {} frames",
        app.simulation().balls.len(),
        app.frames()
    );
}

/// Millisecond wall clock as a seed for unseeded runs
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
