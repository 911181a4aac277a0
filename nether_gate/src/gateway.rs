// `Gateway` — a handle on one gateway in a grid.
//
// A gateway has no identity of its own. The handle is just the coordinate of
// one of its cells (a plane cell when found, the ignited origin when built),
// and every method re-reads the grid. Handles stay valid only as long as the
// grid around them is left alone.
//
// This is the surface most callers want: `find` or `build` a gateway near a
// destination, then ask it for a `spawn` point. The free functions in
// `locate`, `build` and `spawn` remain available for callers that need the
// individual phases.

use crate::build::{BuildOutcome, build_gateway_with_quality};
use crate::config::GatewayConfig;
use crate::locate::find_plane_cell;
use crate::prng::GameRng;
use crate::spawn::{resolve_spawn, top_of_plane};
use crate::types::{SpawnPoint, VoxelCoord};
use crate::world::VoxelGrid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A gateway, identified by one of its cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gateway {
    pub cell: VoxelCoord,
}

impl Gateway {
    pub fn at(cell: VoxelCoord) -> Self {
        Self { cell }
    }

    /// Look for a lit gateway within `radius` columns of `target`.
    pub fn find<G: VoxelGrid + ?Sized>(
        grid: &G,
        target: VoxelCoord,
        radius: i32,
        config: &GatewayConfig,
    ) -> Option<Self> {
        find_plane_cell(grid, target, radius, config.materials.plane).map(Self::at)
    }

    /// `find` with the configured default radius.
    pub fn find_nearby<G: VoxelGrid + ?Sized>(
        grid: &G,
        target: VoxelCoord,
        config: &GatewayConfig,
    ) -> Option<Self> {
        Self::find(grid, target, config.search_radius, config)
    }

    /// Build a new gateway near `target`. Always succeeds.
    pub fn build<G: VoxelGrid + ?Sized>(
        grid: &mut G,
        target: VoxelCoord,
        config: &GatewayConfig,
    ) -> Self {
        Self::build_with_quality(grid, target, config).0
    }

    /// Build a new gateway and report the quality of the site it chose.
    pub fn build_with_quality<G: VoxelGrid + ?Sized>(
        grid: &mut G,
        target: VoxelCoord,
        config: &GatewayConfig,
    ) -> (Self, u32) {
        let BuildOutcome { origin, quality } = build_gateway_with_quality(grid, target, config);
        (Self::at(origin), quality)
    }

    /// Find a gateway within the configured radius, building one at `target`
    /// if there is none.
    pub fn find_or_build<G: VoxelGrid + ?Sized>(
        grid: &mut G,
        target: VoxelCoord,
        config: &GatewayConfig,
    ) -> Self {
        match Self::find_nearby(grid, target, config) {
            Some(found) => found,
            None => Self::build(grid, target, config),
        }
    }

    /// The topmost plane cell in this gateway's column.
    pub fn top<G: VoxelGrid + ?Sized>(&self, grid: &G, config: &GatewayConfig) -> VoxelCoord {
        top_of_plane(grid, self.cell, &config.materials)
    }

    /// A safe arrival point next to this gateway, if there is one.
    pub fn spawn<G: VoxelGrid + ?Sized>(
        &self,
        grid: &G,
        config: &GatewayConfig,
        rng: &mut GameRng,
    ) -> Option<SpawnPoint> {
        resolve_spawn(grid, self.cell, &config.materials, rng)
    }
}

impl fmt::Display for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gateway{}", self.cell)
    }
}
