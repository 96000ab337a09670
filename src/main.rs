//! Object palette desktop demo.
//!
//! Opens a raylib window with a simulated motion controller carrying the
//! palette. See [`objectpalette::systems::input`] for the controls.

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use objectpalette::game::{palette_update_schedule, setup_palette_scene};
use objectpalette::resources::camera3d::Camera3DRes;
use objectpalette::resources::paletteconfig::PaletteConfig;
use objectpalette::resources::prototypes::PrototypeCatalog;
use objectpalette::resources::worldtime::WorldTime;
use objectpalette::systems::input::{DESKTOP_DEVICE, desktop_controller_input};
use objectpalette::systems::palette::unregister_palette_observers;
use objectpalette::systems::render::render_system;
use objectpalette::systems::time::update_world_time;

/// Object palette demo
#[derive(Parser)]
#[command(version, about = "Swipeable object palette on a simulated motion controller")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "config.ini")]
    config: PathBuf,

    /// JSON prototype catalog. Overrides the path from the configuration.
    #[arg(long, value_name = "PATH")]
    prototypes: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = PaletteConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(path) = cli.prototypes {
        config.prototypes_path = path;
    }

    let catalog = match PrototypeCatalog::load_from_file(&config.prototypes_path.to_string_lossy())
    {
        Ok(catalog) => catalog,
        Err(e) => {
            log::warn!(
                "Cannot load prototypes from {}: {}; using the built-in catalog",
                config.prototypes_path.display(),
                e
            );
            PrototypeCatalog::builtin()
        }
    };

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Object Palette")
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(Camera3DRes::desktop_default());
    if let Err(e) = setup_palette_scene(&mut world, &config, &catalog, DESKTOP_DEVICE) {
        log::error!("Cannot build the palette: {}", e);
        std::process::exit(1);
    }
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut input = Schedule::default();
    input.add_systems(desktop_controller_input);
    let mut update = palette_update_schedule();
    let mut render = Schedule::default();
    render.add_systems(render_system);

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        input.run(&mut world);
        update.run(&mut world);
        render.run(&mut world);

        world.clear_trackers();
    }

    unregister_palette_observers(&mut world);
    log::info!("Bye");
}
