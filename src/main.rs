//! Headless demo runner: synthetic confirmation feed + fixed-rate tick loop.
//!
//! Stands in for the real render surface and websocket client so the
//! orchestration core can be exercised end to end from the command line.
//! A feeder thread pushes synthetic confirmations at the configured rate;
//! the main loop ticks the scene at the configured fps, fires a few
//! scripted user actions, and logs the HUD once per second.

use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{LevelFilter, info};
use rand::Rng;

use nanoglobe::cli::Args;
use nanoglobe::core::feed::{ConfirmationEvent, feed_channel};
use nanoglobe::core::scene::SceneOrchestrator;
use nanoglobe::settings::SceneSettings;

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Raw amount string for a whole-unit value
fn raw_units(units: u64) -> String {
    format!("{}{}", units, "0".repeat(30))
}

/// Generate one synthetic confirmation. Mostly sends with log-uniform
/// amounts, a sprinkle of non-send blocks and donations.
fn synthetic_confirmation(donation_account: &str) -> ConfirmationEvent {
    let mut rng = rand::thread_rng();
    let units = 10u64.pow(rng.gen_range(0..4));
    let subtype = if rng.gen_bool(0.85) { "send" } else { "receive" };
    let link = if !donation_account.is_empty() && rng.gen_bool(0.05) {
        donation_account.to_string()
    } else {
        "nano_sender".to_string()
    };
    ConfirmationEvent {
        account: "nano_recipient".into(),
        amount: raw_units(units),
        subtype: subtype.into(),
        link_as_account: link,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbosity);

    let mut settings = match &args.config {
        Some(path) => SceneSettings::load(path)?,
        None => SceneSettings::default(),
    };
    if let Some(account) = &args.donation_account {
        settings.donation_account = account.clone();
    }
    if args.max_rockets.is_some() {
        settings.max_live_rockets = args.max_rockets;
    }

    let (feed_tx, feed_rx) = feed_channel();

    // Feeder thread: the stand-in for the websocket client
    let donation_account = settings.donation_account.clone();
    let rate = args.rate.max(0.1);
    let feed_duration = args.duration;
    let feeder = thread::spawn(move || {
        let start = Instant::now();
        let interval = Duration::from_secs_f32(1.0 / rate);
        while start.elapsed().as_secs_f32() < feed_duration {
            let event = synthetic_confirmation(&donation_account);
            if feed_tx.send(event).is_err() {
                break;
            }
            thread::sleep(interval);
        }
    });

    let mut scene = SceneOrchestrator::new(
        &settings,
        feed_rx,
        Some(Box::new(|units| {
            info!("*** Donation effect: {} units ***", units);
        })),
    );

    let fps = args.fps.clamp(1.0, 240.0);
    let frame_time = Duration::from_secs_f32(1.0 / fps);
    let start = Instant::now();
    let mut last_hud_log = 0u64;
    let mut toggled = false;
    let mut cycled = false;
    let mut reset = false;

    info!("Running {}s at {} fps, {} confirmations/s", args.duration, fps, rate);

    while start.elapsed().as_secs_f32() < args.duration {
        let frame_start = Instant::now();
        scene.tick(frame_time.as_secs_f32());

        // Scripted user actions to exercise the camera director
        let t = start.elapsed().as_secs_f32();
        if !toggled && t > 2.0 {
            scene.toggle_view();
            toggled = true;
        }
        if !cycled && t > args.duration * 0.5 {
            scene.next_rocket();
            cycled = true;
        }
        if !reset && t > args.duration * 0.75 {
            scene.reset_to_earth();
            reset = true;
        }

        let second = start.elapsed().as_secs();
        if second > last_hud_log {
            last_hud_log = second;
            let hud = scene.hud();
            info!(
                "t={}s | rockets: {} | view: {:?} | distance: {:.1} ({:.0} km){}",
                second,
                hud.rocket_count,
                scene.view_mode(),
                hud.distance_from_earth,
                hud.distance_km,
                hud.narrative.map(|n| format!(" | \"{n}\"")).unwrap_or_default(),
            );
        }

        if let Some(remaining) = frame_time.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    drop(scene);
    let _ = feeder.join();
    info!("Done");
    Ok(())
}
