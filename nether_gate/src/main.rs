// Gateway demo — headless walk through find -> build -> spawn.
//
// Builds a flat in-memory world (stone up to a ground level, air above),
// looks for a gateway near a target, builds one if none is found, lights the
// plane the way a host world would, and resolves an arrival point. Prints a
// JSON report on stdout; set RUST_LOG=debug to see the builder's decisions.
//
// Usage:
//   cargo run -p nether_gate -- [--config PATH] [--seed N] [--radius N]
//     [--ground N] [--target-y N] [--alternate]

use nether_gate::config::GatewayConfig;
use nether_gate::gateway::Gateway;
use nether_gate::prng::GameRng;
use nether_gate::types::{Environment, SpawnPoint, VoxelCoord};
use nether_gate::world::{VoxelGrid, VoxelWorld};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

const WORLD_SIZE: (u32, u32, u32) = (64, 128, 64);

#[derive(Serialize)]
struct Report {
    environment: Environment,
    target: VoxelCoord,
    found_existing: bool,
    gateway: Gateway,
    site_quality: Option<u32>,
    spawn: Option<SpawnPoint>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    let config = match parse_flag::<String>(&args, "--config") {
        Some(path) => match GatewayConfig::load(Path::new(&path)) {
            Ok(c) => c,
            Err(e) => {
                log::error!("{e} ({path})");
                return ExitCode::FAILURE;
            }
        },
        None => GatewayConfig::default(),
    };
    let seed: u64 = parse_flag(&args, "--seed").unwrap_or(0);
    let radius: i32 = parse_flag(&args, "--radius").unwrap_or(config.search_radius);
    let ground: i32 = parse_flag(&args, "--ground").unwrap_or(40);
    let target_y: i32 = parse_flag(&args, "--target-y").unwrap_or(ground);
    let environment = if args.iter().any(|a| a == "--alternate") {
        Environment::Alternate
    } else {
        Environment::Normal
    };

    let (sx, sy, sz) = WORLD_SIZE;
    let mut world = VoxelWorld::new(sx, sy, sz).with_environment(environment);
    world.fill_below(ground, config.materials.fill_for(environment));
    let target = VoxelCoord::new(sx as i32 / 2, target_y, sz as i32 / 2);

    let (gateway, found_existing, site_quality) =
        match Gateway::find(&world, target, radius, &config) {
            Some(g) => (g, true, None),
            None => {
                let (g, quality) = Gateway::build_with_quality(&mut world, target, &config);
                light_plane(&mut world, g.cell, &config);
                (g, false, Some(quality))
            }
        };

    let mut rng = GameRng::new(seed);
    let spawn = gateway.spawn(&world, &config, &mut rng);
    if spawn.is_none() {
        log::warn!("no safe arrival beside {gateway}");
    }

    let report = Report {
        environment: world.environment(),
        target,
        found_existing,
        gateway,
        site_quality,
        spawn,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("failed to encode report: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Stand-in for the host's fire rule: fill the 2x3 interior with plane.
fn light_plane(world: &mut VoxelWorld, origin: VoxelCoord, config: &GatewayConfig) {
    world.fill_box(origin, origin.offset(1, 2, 0), config.materials.plane);
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
