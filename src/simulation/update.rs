use crate::world::{Cell, Element, GRID_SIZE, Grid};

/// Water tries these in order and takes the first empty one
const WATER_MOVES: [(i32, i32); 5] = [(0, 1), (-1, 1), (1, 1), (-1, 0), (1, 0)];

/// Up, down, left, right
const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Plant growth slots, relative to the plant itself
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Advance the grid by one tick.
///
/// Rows are visited bottom to top and each row left to right, mutating the
/// grid in place. Every rule sees the results of rules applied earlier in
/// the same pass: a grain that falls lands in a row that was already
/// visited and so moves at most one row per tick, while fire and plant
/// cells spawned above or to the right are picked up again before the pass
/// ends. Evaluating against a frozen copy of the grid would produce
/// different results.
pub fn tick(grid: &mut Grid) {
    for y in (0..GRID_SIZE as i32).rev() {
        for x in 0..GRID_SIZE as i32 {
            let Some(Cell::Occupied { kind, life }) = grid.cell(x, y) else {
                continue;
            };

            match kind {
                Element::Sand => update_sand(grid, x, y),
                Element::Water => update_water(grid, x, y),
                Element::Fire => update_fire(grid, x, y, life),
                Element::Plant => update_plant(grid, x, y),
            }
        }
    }
}

/// Move the cell at `(x, y)` to `(nx, ny)`, leaving the source empty
fn move_cell(grid: &mut Grid, x: i32, y: i32, nx: i32, ny: i32) {
    let Some(cell) = grid.cell(x, y) else {
        return;
    };
    if let Some(dest) = grid.cell_mut(nx, ny) {
        *dest = cell;
        if let Some(src) = grid.cell_mut(x, y) {
            *src = Cell::Empty;
        }
    }
}

/// Sand: fall one row if the cell below is free
fn update_sand(grid: &mut Grid, x: i32, y: i32) {
    if grid.is_empty(x, y + 1) {
        move_cell(grid, x, y, x, y + 1);
    }
}

/// Water: first free slot of down, down-left, down-right, left, right
fn update_water(grid: &mut Grid, x: i32, y: i32) {
    if let Some((dx, dy)) = WATER_MOVES
        .iter()
        .copied()
        .find(|&(dx, dy)| grid.is_empty(x + dx, y + dy))
    {
        move_cell(grid, x, y, x + dx, y + dy);
    }
}

/// Fire: burn down one life, ignite every orthogonal plant, and survive
/// only if something caught and life remains
fn update_fire(grid: &mut Grid, x: i32, y: i32, life: i32) {
    let life = life - 1;

    let mut burned = false;
    for (dx, dy) in ORTHOGONAL {
        if let Some(neighbor) = grid.cell_mut(x + dx, y + dy)
            && neighbor.is(Element::Plant)
        {
            *neighbor = Cell::new(Element::Fire);
            burned = true;
        }
    }

    if let Some(cell) = grid.cell_mut(x, y) {
        *cell = if life <= 0 || !burned {
            Cell::Empty
        } else {
            Cell::Occupied {
                kind: Element::Fire,
                life,
            }
        };
    }
}

/// Plant: next to water, sprout into the first free diagonal
fn update_plant(grid: &mut Grid, x: i32, y: i32) {
    let touches_water = ORTHOGONAL.iter().any(|&(dx, dy)| {
        grid.cell(x + dx, y + dy)
            .is_some_and(|cell| cell.is(Element::Water))
    });
    if !touches_water {
        return;
    }

    let free = DIAGONAL
        .iter()
        .copied()
        .find(|&(dx, dy)| grid.is_empty(x + dx, y + dy));
    if let Some((dx, dy)) = free
        && let Some(slot) = grid.cell_mut(x + dx, y + dy)
    {
        *slot = Cell::new(Element::Plant);
    }
}
