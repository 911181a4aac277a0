// Site quality scoring for new gateways.
//
// A candidate cell is the future lower-x cell of the gateway's 2-wide x
// 3-tall interior (gateways are always built along +x). The score is a
// weighted count of fixed probes around it:
//
//   interior air      (0,0,0) (1,0,0) x6   (0,1,0) (1,1,0) x2   (0,2,0) (1,2,0) x1   max 18
//   floor under it    (0,-1,0) (1,-1,0) x3                                           max 6
//   floor beside it   (0,-1,-1) (1,-1,-1) (0,-1,1) (1,-1,1) x1                       max 4
//
// Air at foot height dominates, then direct footing, then the floor on
// either side. The probes never overlap, so flipping any one probed cell
// from failing to passing raises the score by exactly that probe's weight.

use crate::types::VoxelCoord;
use crate::world::VoxelGrid;

/// Highest possible score: every probe passes.
pub const MAX_QUALITY: u32 = 28;

/// What a probe checks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    Breathable,
    Standable,
}

/// `(dx, dy, dz, test, weight)` relative to the candidate cell.
pub const QUALITY_PROBES: [(i32, i32, i32, Probe, u32); 12] = [
    (0, 0, 0, Probe::Breathable, 6),
    (1, 0, 0, Probe::Breathable, 6),
    (0, 1, 0, Probe::Breathable, 2),
    (1, 1, 0, Probe::Breathable, 2),
    (0, 2, 0, Probe::Breathable, 1),
    (1, 2, 0, Probe::Breathable, 1),
    (0, -1, 0, Probe::Standable, 3),
    (1, -1, 0, Probe::Standable, 3),
    (0, -1, -1, Probe::Standable, 1),
    (1, -1, -1, Probe::Standable, 1),
    (0, -1, 1, Probe::Standable, 1),
    (1, -1, 1, Probe::Standable, 1),
];

/// Score `cell` as a gateway site, 0 to `MAX_QUALITY`.
pub fn site_quality<G: VoxelGrid + ?Sized>(grid: &G, cell: VoxelCoord) -> u32 {
    QUALITY_PROBES
        .iter()
        .filter(|&&(dx, dy, dz, probe, _)| {
            let material = grid.material_at(cell.offset(dx, dy, dz));
            match probe {
                Probe::Breathable => material.is_breathable(),
                Probe::Standable => material.is_standable(),
            }
        })
        .map(|&(.., weight)| weight)
        .sum()
}
