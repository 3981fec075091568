//! Pico Balls entry point
//!
//! Wires the host platform to the controller and runs until interrupted.

use std::fs::File;
use std::io::BufWriter;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use pico_balls::platform::{DemoButtons, IdleButtons, InputSource, SystemClock};
use pico_balls::renderer::Framebuffer;
use pico_balls::sim::seeded;
use pico_balls::{Controller, Settings};

fn main() {
    env_logger::init();
    log::info!("Pico Balls starting...");

    let settings = Settings::load();

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        if let Err(e) = ctrlc::set_handler(move || running.store(false, Ordering::SeqCst)) {
            log::error!("Failed to install interrupt handler: {}", e);
        }
    }

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    log::info!("Seed: {}", seed);

    let mut framebuffer = Framebuffer::new(settings.width, settings.height);
    if let Some(path) = &settings.frame_dump {
        match File::create(path) {
            Ok(file) => {
                log::info!("Writing frames to {}", path.display());
                framebuffer = framebuffer.with_sink(Box::new(BufWriter::new(file)));
            }
            Err(e) => log::warn!("Can't create frame dump {}: {}", path.display(), e),
        }
    }

    if settings.demo_input {
        log::info!("Demo input enabled");
        run(&settings, framebuffer, DemoButtons::default(), seed, &running);
    } else {
        run(&settings, framebuffer, IdleButtons, seed, &running);
    }

    println!("Game stopped.");
}

fn run(
    settings: &Settings,
    framebuffer: Framebuffer,
    input: impl InputSource,
    seed: u64,
    running: &AtomicBool,
) {
    let mut controller = Controller::new(
        settings,
        framebuffer,
        input,
        SystemClock::default(),
        seeded(seed),
    );
    log::info!(
        "{}x{} display, {} balls",
        settings.width,
        settings.height,
        controller.sim().len()
    );
    controller.run(running);
}
