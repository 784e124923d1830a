//! Escape Room: a first-person 3D puzzle room
//!
//! Walk around an office, read the clues, crack the terminal code, open the
//! safe, take the key and get out through the door. Runs natively and in
//! the browser (WASM).
//!
//! Usage (native): `escape-room [layout]` where `layout` is a built-in name
//! (`office`, `annex`) or a path to a RON layout file. Without an argument
//! the `layout` entry of `assets/settings.ron` is used.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod game;
mod input;
mod math;
mod settings;
mod ui;
mod world;

use macroquad::prelude::*;
use game::{draw_frame, EscapeRoom};
use input::{InputState, PointerLock};
use settings::Settings;

fn window_conf() -> Conf {
    Conf {
        window_title: "Escape Room".to_string(),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        // Start windowed on all platforms (WASM: browser handles sizing)
        #[cfg(not(target_arch = "wasm32"))]
        fullscreen: false,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Settings file plus command-line override of the layout
#[cfg(not(target_arch = "wasm32"))]
fn load_settings() -> Settings {
    let mut settings = Settings::load_or_default(settings::SETTINGS_PATH);
    if let Some(layout) = std::env::args().nth(1) {
        settings.layout = layout;
    }
    settings
}

/// No filesystem in the browser: built-in defaults
#[cfg(target_arch = "wasm32")]
fn load_settings() -> Settings {
    Settings::default()
}

/// Sleep/spin until the frame has taken `target_frame_time`
fn limit_frame_rate(frame_start: f64, target_frame_time: f64) {
    if get_time() - frame_start >= target_frame_time {
        return;
    }

    // Native: use sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: just spin-wait (no thread::sleep available)
    #[cfg(target_arch = "wasm32")]
    {
        while get_time() - frame_start < target_frame_time {
            // Busy wait - browser will handle frame pacing
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    init_logging();

    tracing::info!("=== Escape Room v{} ===", VERSION);

    let settings = load_settings();
    let layout = world::resolve_layout(&settings.layout);
    let fps_limit = settings.fps_limit;

    let mut room = EscapeRoom::new(layout, settings);
    let mut input = InputState::new();
    let mut pointer = PointerLock::new();
    pointer.apply();

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();
        let delta = get_frame_time();

        let frame = input.poll(pointer.is_locked(), room.settings(), delta);
        let cancel_claimed = room.tick(&frame, delta, pointer.is_locked());

        if pointer.update(frame.engage, frame.cancel, cancel_claimed).is_some() {
            pointer.apply();
        }

        draw_frame(&room, pointer.is_locked());

        if let Some(target_frame_time) = fps_limit.frame_time() {
            limit_frame_rate(frame_start, target_frame_time);
        }

        next_frame().await;
    }
}
