use super::{Cell, Player};

/// Side length of the board
pub const SIDE: usize = 3;

/// Number of cells on the board
pub const CELL_COUNT: usize = SIDE * SIDE;

/// The eight index triples that win the game
pub const WIN_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Board holds the nine cells in row-major order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit cells (row-major)
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Convert (row, col) to a cell index
    pub const fn index(row: usize, col: usize) -> usize {
        row * SIDE + col
    }

    /// Convert a cell index to (row, col)
    pub const fn position(index: usize) -> (usize, usize) {
        (index / SIDE, index % SIDE)
    }

    /// Get cell at index (with bounds checking)
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Set cell at index; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// First triple holding three equal marks, with its owner
    pub fn winning_line(&self) -> Option<(Player, [usize; 3])> {
        WIN_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let owner = self.cells[a].owner()?;
            (self.cells[a] == self.cells[b] && self.cells[a] == self.cells[c])
                .then_some((owner, line))
        })
    }

    /// Iterate over all cells with their (row, col)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &cell)| {
                let (row, col) = Self::position(index);
                (row, col, cell)
            })
    }

    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }
}
