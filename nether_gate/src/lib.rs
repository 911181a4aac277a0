// nether_gate — find, build and leave teleportation gateways in a voxel grid.
//
// Gateways are 2-wide x 3-tall planes of portal material inside an obsidian
// ring, always built along the x axis. This crate holds the algorithms only;
// the world is injected through the `VoxelGrid` trait, and teleporting
// entities, event handling and persistence belong to the host.
//
// Module overview:
// - `types.rs`:    VoxelCoord, Face, MaterialId, Environment, SpawnPoint.
// - `material.rs`: Standable / breathable / unstable lookup tables.
// - `world.rs`:    The `VoxelGrid` trait and the dense in-memory `VoxelWorld`.
// - `config.rs`:   GatewayConfig + MaterialPalette, loaded from JSON.
// - `quality.rs`:  0-28 site quality score for a prospective gateway.
// - `scan.rs`:     Safe landing cells beside a gateway's plane.
// - `locate.rs`:   Circular column search for an existing gateway.
// - `build.rs`:    Clamp, site search, terrain prep, frame, ignition.
// - `spawn.rs`:    Arrival point selection beside a gateway.
// - `gateway.rs`:  `Gateway` handle tying the above together.
// - `prng`:        Re-exported from `nether_gate_prng` — seeded xoshiro256++.
//
// **Critical constraint: single writer.** Every operation runs to completion
// against a grid nobody else is touching. The builder in particular writes
// and then re-reads its own cells, and assumes nothing else moved them.

pub mod build;
pub mod config;
pub mod gateway;
pub mod locate;
pub mod material;
pub use nether_gate_prng as prng;
pub mod quality;
pub mod scan;
pub mod spawn;
pub mod types;
pub mod world;
