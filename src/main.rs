//! Bouncing Ball entry point
//!
//! Loads settings, then steps one ball per regulated frame and logs where it
//! went. Set `RUST_LOG=debug` to see every frame.

use bouncing_ball::sim::{FrameClock, advance_in};
use bouncing_ball::{BallError, LoopRegulator, Settings, settings::SETTINGS_FILE};

fn run() -> Result<(), BallError> {
    let settings = Settings::load(SETTINGS_FILE);
    let mut regulator = LoopRegulator::new(settings.frame_rate)?;

    let mut ball = settings.initial_ball()?;
    if settings.validate {
        ball.validate()?;
    }

    log::info!(
        "Stepping ball at ({:.1}, {:.1}) for {} frames at {} Hz",
        ball.pos.x,
        ball.pos.y,
        settings.frames,
        regulator.rate()
    );

    let mut clock = FrameClock::system();
    let mut bounces = 0u32;

    for frame in 0..settings.frames {
        regulator.start_update();

        let dt = clock.tick();
        let (next, report) = advance_in(&settings.arena, ball, dt);
        ball = next;

        if report.bounced() {
            bounces += 1;
            log::info!(
                "frame {}: bounce at ({:.1}, {:.1}), vel ({:.1}, {:.1})",
                frame,
                ball.pos.x,
                ball.pos.y,
                ball.vel.x,
                ball.vel.y
            );
        } else {
            log::debug!(
                "frame {}: dt {:.4} pos ({:.1}, {:.1})",
                frame,
                dt,
                ball.pos.x,
                ball.pos.y
            );
        }

        regulator.end_update();
        regulator.delay();
    }

    log::info!(
        "Done: ball at ({:.1}, {:.1}) after {} bounces",
        ball.pos.x,
        ball.pos.y,
        bounces
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Bouncing Ball starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
