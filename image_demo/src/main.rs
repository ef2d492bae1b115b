//! Image demo application
//!
//! Spawns a field of images under a scrolling camera, some pinned to the
//! camera, some unsmoothed and one flagged for destruction, then runs a
//! fixed number of frames and logs what the world sweep did each frame.

use display_engine::prelude::*;
use display_engine::capabilities::core;
use display_engine::foundation::logging;
use rand::Rng;
use thiserror::Error;

const IMAGE_COUNT: usize = 40;
const DEFAULT_FRAMES: u32 = 120;

#[derive(Error, Debug)]
enum DemoError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Composition error: {0}")]
    Composition(#[from] CompositionError),

    #[error("Display error: {0}")]
    Display(#[from] DisplayError),

    #[error("Call error: {0}")]
    Call(#[from] CallError),

    #[error("Invalid frame count '{0}'")]
    FrameCount(String),
}

/// Configuration used when no config file is given
fn sample_config() -> GameConfig {
    GameConfig {
        textures: vec![
            TextureEntry {
                key: "star".into(),
                width: 16,
                height: 16,
                layout: TextureLayout::Single,
            },
            TextureEntry {
                key: "ships".into(),
                width: 128,
                height: 32,
                layout: TextureLayout::Sheet { frame_width: 32, frame_height: 32 },
            },
        ],
        ..GameConfig::default()
    }
}

fn spawn(world: &mut World, rng: &mut impl Rng) -> Result<(), DemoError> {
    let game = world.game().clone();
    let bounds = game.world_bounds();

    for i in 0..IMAGE_COUNT {
        let x = rng.gen_range(bounds.left()..bounds.right());
        let y = rng.gen_range(bounds.top()..bounds.bottom());
        let mut image = if i % 2 == 0 {
            Image::new(&game, Some(x), Some(y), "star", None::<usize>)?
        } else {
            Image::new(&game, Some(x), Some(y), "ships", rng.gen_range(0..4usize))?
        };

        image.set_angle(rng.gen_range(-180.0..180.0))?;
        match i % 5 {
            0 => image.set_smoothed(false)?,
            1 => image.set_fixed_to_camera(true)?,
            2 => image.set_input_enabled(true)?,
            _ => {}
        }
        world.add(image);
    }

    log::info!("Spawned {} images", world.len());
    Ok(())
}

fn run() -> Result<(), DemoError> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            log::info!("Loading config from {}", path);
            GameConfig::load_from_file(&path)?
        }
        None => sample_config(),
    };
    let frames = match args.next() {
        Some(count) => count.parse().map_err(|_| DemoError::FrameCount(count))?,
        None => DEFAULT_FRAMES,
    };

    let game = Game::new(config)?;
    let mut world = World::new(game.clone());
    let mut rng = rand::thread_rng();
    spawn(&mut world, &mut rng)?;

    for frame in 0..frames {
        let camera = game.camera_view();
        game.set_camera_position(camera.x + 2.0, camera.y);

        if frame == frames / 2 {
            if let Some(id) = world.ids().first().copied() {
                if let Some(object) = world.get_mut(id) {
                    object.set(core::PENDING_DESTROY, true)?;
                }
            }
        }

        let stats = world.step()?;
        log::debug!(
            "frame {}: {} visited, {} ready, {} skipped, {} core-checked, {} removed",
            frame,
            stats.visited,
            stats.ready,
            stats.skipped,
            stats.core_checked,
            stats.removed
        );

        for (id, event) in world.drain_events() {
            log::info!("frame {}: {:?} on {:?}", frame, event, id);
        }
    }

    log::info!(
        "Finished {} frames ({:.0} ms simulated), {} images left",
        game.clock().frame,
        game.clock().total_ms,
        world.len()
    );
    Ok(())
}

fn main() {
    logging::init();
    log::info!("Starting image demo");

    if let Err(e) = run() {
        log::error!("Image demo failed: {}", e);
        std::process::exit(1);
    }
}
