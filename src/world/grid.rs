use crate::world::cell::Cell;
use crate::world::error::GridError;

/// Width and height of the lattice in cells
pub const GRID_SIZE: usize = 100;

/// Number of cells in the lattice
pub const CELLS_PER_GRID: usize = GRID_SIZE * GRID_SIZE;

/// Square lattice of cells, `(0, 0)` top-left, `y` growing downward
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    /// Indexed as: y * GRID_SIZE + x
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an all-empty grid
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::Empty; CELLS_PER_GRID],
        }
    }

    #[inline]
    pub fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < GRID_SIZE && (y as usize) < GRID_SIZE
    }

    /// Flat index for a coordinate, `None` when outside the lattice
    #[inline]
    fn index(x: i32, y: i32) -> Option<usize> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some(y as usize * GRID_SIZE + x as usize)
    }

    /// Cell at `(x, y)`
    #[allow(dead_code)]
    pub fn get(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        self.cell(x, y).ok_or(GridError::OutOfBounds { x, y })
    }

    /// Overwrite the cell at `(x, y)`, discarding whatever was there
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), GridError> {
        let slot = self.cell_mut(x, y).ok_or(GridError::OutOfBounds { x, y })?;
        *slot = cell;
        Ok(())
    }

    /// In bounds and empty. Out-of-bounds coordinates are never empty.
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).is_some_and(|cell| cell.is_empty())
    }

    /// Non-failing lookup used by the rule code
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    #[inline]
    pub fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        Self::index(x, y).map(|idx| &mut self.cells[idx])
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// All cells in row-major order with their coordinates
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(idx, cell)| {
            ((idx % GRID_SIZE) as i32, (idx / GRID_SIZE) as i32, *cell)
        })
    }

    /// Number of cells matching `predicate`
    pub fn count(&self, predicate: impl Fn(&Cell) -> bool) -> usize {
        self.cells.iter().filter(|cell| predicate(cell)).count()
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("size", &GRID_SIZE)
            .field("occupied", &self.count(|cell| !cell.is_empty()))
            .finish()
    }
}
