mod simulation;

#[cfg(feature = "ui")]
mod ui;

use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(name = "elevator_sim")]
#[command(about = "Multi-building elevator simulation with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "1000")]
    ticks: u32,

    /// Time delta per tick in seconds
    #[arg(long, default_value = "0.1")]
    delta: f32,

    /// Seed for reproducible random floor requests in headless mode
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui();
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        if let Err(err) = run_headless(cli.ticks, cli.delta, cli.seed) {
            eprintln!("Simulation error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Run the simulation in headless mode (no graphics)
///
/// Pointer input is replaced by random floor requests, one per simulated
/// second, so elevators stay busy.
fn run_headless(ticks: u32, delta: f32, seed: Option<u64>) -> anyhow::Result<()> {
    info!("Running elevator simulation in headless mode...");
    info!("Ticks: {}, Delta: {}s", ticks, delta);

    // Calculate how many ticks equal 1 second of simulation time
    let ticks_per_second = (1.0 / delta).ceil() as u32;

    let mut world = match seed {
        Some(seed) => simulation::SimWorld::new_with_seed(
            &[
                simulation::BuildingSpec::new(15, 3),
                simulation::BuildingSpec::new(9, 2),
                simulation::BuildingSpec::new(20, 5),
            ],
            simulation::DEFAULT_CANVAS_WIDTH,
            simulation::DEFAULT_CANVAS_HEIGHT,
            seed,
        ),
        None => simulation::SimWorld::create_test_world(),
    };

    info!("Initial state:");
    world.print_summary();

    let mut tick = 0;
    while tick < ticks {
        // Press a random floor button once per simulated second
        world.spawn_random_request()?;

        let ticks_to_run = ticks_per_second.min(ticks - tick);
        for _ in 0..ticks_to_run {
            tick += 1;
            world.tick(delta)?;
        }

        info!(
            "--- After tick {} ({:.1}s simulated time) ---",
            tick,
            tick as f32 * delta
        );
        world.print_summary();
    }

    info!("SIMULATION COMPLETE");
    world.print_summary();
    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui() {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting Elevator Sim UI...");
    println!();
    println!("Controls:");
    println!("  Click a floor  - Call an elevator to it");
    println!("  ESC            - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,elevator_sim=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Elevator Sim".into(),
                        resolution: (
                            simulation::DEFAULT_CANVAS_WIDTH as u32,
                            simulation::DEFAULT_CANVAS_HEIGHT as u32,
                        )
                            .into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(ui::ElevatorSimUIPlugin)
        .run();
}
