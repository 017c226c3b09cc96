//! Board geometry and stone bookkeeping.
//!
//! The board is a flat vector of pits stored row by row. Each row holds
//! `pits_per_row` regular pits followed by that row's mancala, so the pit
//! at `row * (pits_per_row + 1) + pits_per_row` is the row's store. Every
//! operation returns a new board value; the inputs are never mutated.
//!
//! The board performs no validation. Out-of-range indices are the caller's
//! responsibility; the move validators guard every entry point before a
//! board operation runs.

use serde::{Deserialize, Serialize};

/// Immutable pit-geometry value type.
///
/// Stone count is conserved by every operation: sowing, capturing and
/// collecting only relocate stones, never create or destroy them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Number of stones in each pit, mancalas included.
    pits: Vec<u32>,
    /// Regular pits per row, excluding the mancala.
    pits_per_row: usize,
}

impl Board {
    /// Creates a board with `total_rows` rows, each holding `pits_per_row`
    /// regular pits seeded with `stones_per_pit` stones and an empty mancala.
    pub fn new(total_rows: usize, pits_per_row: usize, stones_per_pit: u32) -> Self {
        let total_pits = total_rows * (pits_per_row + 1);
        let pits = (0..total_pits)
            .map(|idx| {
                if (idx + 1) % (pits_per_row + 1) == 0 {
                    0
                } else {
                    stones_per_pit
                }
            })
            .collect();

        Self { pits, pits_per_row }
    }

    /// Creates a board from an explicit pit layout.
    pub fn from_pits(pits: Vec<u32>, pits_per_row: usize) -> Self {
        Self { pits, pits_per_row }
    }

    /// All pits in board order, mancalas included.
    pub fn pits(&self) -> &[u32] {
        &self.pits
    }

    /// Regular pits per row, excluding the mancala.
    pub fn pits_per_row(&self) -> usize {
        self.pits_per_row
    }

    /// Total number of pits on the board, mancalas included.
    pub fn total_pits(&self) -> usize {
        self.pits.len()
    }

    /// Number of rows (one per player).
    pub fn total_rows(&self) -> usize {
        self.pits.len() / self.row_len()
    }

    /// Number of stones currently in the given pit.
    pub fn stones(&self, pit_idx: usize) -> u32 {
        self.pits[pit_idx]
    }

    /// Sum of stones over the whole board.
    pub fn total_stones(&self) -> u32 {
        self.pits.iter().sum()
    }

    /// Index of the mancala pit belonging to the given row.
    pub fn row_mancala_pit(&self, row: usize) -> usize {
        row * self.row_len() + self.pits_per_row
    }

    /// Whether the given pit is a mancala.
    pub fn is_mancala_pit(&self, pit_idx: usize) -> bool {
        pit_idx % self.row_len() == self.pits_per_row
    }

    /// Row that the given pit belongs to.
    pub fn row_of(&self, pit_idx: usize) -> usize {
        pit_idx / self.row_len()
    }

    /// Whether the given pit lies in the given row. The row includes its
    /// trailing mancala.
    pub fn is_pit_in_row(&self, row: usize, pit_idx: usize) -> bool {
        pit_idx < self.total_pits() && self.row_of(pit_idx) == row
    }

    /// The regular pits of a row, excluding its mancala.
    pub fn pits_in_row(&self, row: usize) -> &[u32] {
        let start = row * self.row_len();
        &self.pits[start..start + self.pits_per_row]
    }

    /// Whether any regular pit in the row still holds a stone.
    pub fn row_has_stones(&self, row: usize) -> bool {
        self.pits_in_row(row).iter().any(|&stones| stones > 0)
    }

    /// Index of the pit directly opposite a regular pit: the mirrored
    /// position in the next row, wrapping around. Mancalas have no
    /// opposite and must not be passed here.
    pub fn opposite_pit_index(&self, pit_idx: usize) -> usize {
        let row = self.row_of(pit_idx);
        let position = pit_idx - row * self.row_len();
        let opposite_row = (row + 1) % self.total_rows();

        opposite_row * self.row_len() + (self.pits_per_row - 1 - position)
    }

    /// Adds one stone to each listed pit. Duplicate indices are additive.
    pub fn add_stone_to_pits(&self, pit_indices: &[usize]) -> Self {
        let mut pits = self.pits.clone();
        for &idx in pit_indices {
            pits[idx] += 1;
        }

        Self {
            pits,
            pits_per_row: self.pits_per_row,
        }
    }

    /// Moves every stone from one pit into another, emptying the source.
    pub fn move_stones(&self, from: usize, to: usize) -> Self {
        let mut pits = self.pits.clone();
        pits[to] += pits[from];
        pits[from] = 0;

        Self {
            pits,
            pits_per_row: self.pits_per_row,
        }
    }

    /// Empties the given pit.
    pub fn empty_pit(&self, pit_idx: usize) -> Self {
        let mut pits = self.pits.clone();
        pits[pit_idx] = 0;

        Self {
            pits,
            pits_per_row: self.pits_per_row,
        }
    }

    /// Sweeps every row's remaining regular-pit stones into that row's
    /// mancala and zeroes the regular pits. Idempotent on a collected board.
    pub fn collect_all_stones(&self) -> Self {
        let mut pits = self.pits.clone();
        for row in 0..self.total_rows() {
            let mancala = self.row_mancala_pit(row);
            let start = row * self.row_len();
            for idx in start..start + self.pits_per_row {
                pits[mancala] += pits[idx];
                pits[idx] = 0;
            }
        }

        Self {
            pits,
            pits_per_row: self.pits_per_row,
        }
    }

    fn row_len(&self) -> usize {
        self.pits_per_row + 1
    }
}
