use gridmaze_common::{BOARD_SIZE, Cell};
use serde::{Deserialize, Serialize};

/// Splitmix64 ... a fast, high-quality deterministic PRNG step function.
/// Drives board generation in a reproducible way.
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Deterministic random stream seeded once per session.
///
/// Each board regeneration consumes ten draws, so consecutive rounds get
/// distinct (but replayable) layouts from a single seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedStream {
    state: u64,
}

impl SeedStream {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = splitmix64(self.state);
        self.state
    }

    fn next_column(&mut self) -> usize {
        (self.next_u64() % BOARD_SIZE as u64) as usize
    }
}

/// The 10x10 board: `true` cells are solid, `false` cells are holes the
/// token must avoid. Read-only after generation until the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyGrid {
    cells: [[bool; BOARD_SIZE]; BOARD_SIZE],
}

impl OccupancyGrid {
    /// Generate a fresh board: all cells solid, then one pseudo-random hole
    /// candidate per row. A draw equal to the row index leaves the row solid.
    pub fn generate(rng: &mut SeedStream) -> Self {
        let mut cells = [[true; BOARD_SIZE]; BOARD_SIZE];
        for (row, row_cells) in cells.iter_mut().enumerate() {
            let col = rng.next_column();
            if col != row {
                row_cells[col] = false;
            }
        }
        Self { cells }
    }

    /// Build a board with holes at exactly the given cells. Out-of-range
    /// cells are ignored.
    pub fn with_holes(holes: &[Cell]) -> Self {
        let mut cells = [[true; BOARD_SIZE]; BOARD_SIZE];
        for hole in holes {
            if hole.row < BOARD_SIZE && hole.col < BOARD_SIZE {
                cells[hole.row][hole.col] = false;
            }
        }
        Self { cells }
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.cells[cell.row][cell.col]
    }

    /// All hole cells in row-major order.
    pub fn holes(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, row_cells)| {
            row_cells
                .iter()
                .enumerate()
                .filter(|(_, occupied)| !**occupied)
                .map(move |(col, _)| Cell::new(row, col))
        })
    }

    pub fn hole_count(&self) -> usize {
        self.holes().count()
    }
}
