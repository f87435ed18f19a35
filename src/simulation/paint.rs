use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved};

use crate::rendering::{CANVAS_CENTER, CELL_SIZE, cursor_to_world, world_to_canvas};
use crate::simulation::driver::Sandbox;
use crate::world::{Cell, Element, Grid};

/// Element stamped by the pointer, switched by the selection buttons
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedElement(Element);

impl Default for SelectedElement {
    fn default() -> Self {
        Self(Element::Sand)
    }
}

impl SelectedElement {
    pub fn get(&self) -> Element {
        self.0
    }

    /// Make `element` the one painted from now on
    pub fn select(&mut self, element: Element) {
        if self.0 != element {
            info!("Selected element: {}", element.name());
        }
        self.0 = element;
    }
}

/// Stamp a fresh `kind` particle at `(x, y)`, replacing whatever was there.
/// Out-of-bounds coordinates are ignored; returns whether a cell was written.
pub fn paint(grid: &mut Grid, x: i32, y: i32, kind: Element) -> bool {
    match grid.cell_mut(x, y) {
        Some(cell) => {
            *cell = Cell::new(kind);
            true
        }
        None => false,
    }
}

/// `paint` with the currently selected element
pub fn paint_selected(grid: &mut Grid, selected: &SelectedElement, x: i32, y: i32) -> bool {
    paint(grid, x, y, selected.get())
}

/// Canvas-space position (pixels from the canvas top-left) to grid coordinates
pub fn canvas_to_grid(canvas_pos: Vec2) -> IVec2 {
    (canvas_pos / CELL_SIZE).floor().as_ivec2()
}

/// Pointer state carried between frames by `paint_with_cursor`
#[derive(Default)]
pub struct PaintStroke {
    /// Set by a press on the canvas, cleared on release or leaving the canvas
    active: bool,
    /// Grid cell under the pointer as of the last move
    hovered: Option<IVec2>,
}

fn on_canvas(cell: IVec2) -> bool {
    Grid::in_bounds(cell.x, cell.y)
}

/// Grid cell under a window-space cursor position
fn cursor_cell(window: &Window, cursor: Vec2) -> IVec2 {
    let world_pos = cursor_to_world(window.size(), cursor);
    canvas_to_grid(world_to_canvas(world_pos, CANVAS_CENTER))
}

/// Stamp the selected element once per pointer move during a stroke.
///
/// A stroke starts when the left button goes down over the canvas and ends
/// when the button is released or the pointer leaves the canvas; coming
/// back onto the canvas needs a fresh press.
pub fn paint_with_cursor(
    mouse: Res<ButtonInput<MouseButton>>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut cursor_left: EventReader<CursorLeft>,
    windows: Query<&Window>,
    selected: Res<SelectedElement>,
    mut sandbox: ResMut<Sandbox>,
    mut stroke: Local<PaintStroke>,
) {
    if mouse.just_pressed(MouseButton::Left) {
        let pressed_at = windows
            .iter()
            .find_map(|window| {
                window
                    .cursor_position()
                    .map(|cursor| cursor_cell(window, cursor))
            })
            .or(stroke.hovered);
        stroke.active = pressed_at.is_some_and(on_canvas);
    }
    if !mouse.pressed(MouseButton::Left) {
        stroke.active = false;
    }

    for event in cursor_moved.read() {
        let Ok(window) = windows.get(event.window) else {
            continue;
        };
        let target = cursor_cell(window, event.position);
        stroke.hovered = Some(target);

        if !stroke.active {
            continue;
        }
        if paint_selected(&mut sandbox.grid, &selected, target.x, target.y) {
            debug!("Painted {} at {}", selected.get().name(), target);
        } else {
            stroke.active = false;
        }
    }

    if !cursor_left.is_empty() {
        cursor_left.clear();
        stroke.active = false;
        stroke.hovered = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::INITIAL_LIFE;

    #[test]
    fn test_default_selection_is_sand() {
        assert_eq!(SelectedElement::default().get(), Element::Sand);
    }

    #[test]
    fn test_select_changes_painted_element() {
        let mut grid = Grid::new();
        let mut selected = SelectedElement::default();

        selected.select(Element::Fire);
        assert!(paint_selected(&mut grid, &selected, 4, 4));

        assert_eq!(grid.get(4, 4).unwrap(), Cell::new(Element::Fire));
    }

    #[test]
    fn test_paint_overwrites_existing_cell() {
        let mut grid = Grid::new();
        paint(&mut grid, 10, 10, Element::Sand);

        assert!(paint(&mut grid, 10, 10, Element::Water));
        assert_eq!(grid.get(10, 10).unwrap(), Cell::new(Element::Water));
    }

    #[test]
    fn test_paint_resets_life() {
        let mut grid = Grid::new();
        grid.set(10, 10, Cell::Occupied { kind: Element::Fire, life: 3 }).unwrap();

        paint(&mut grid, 10, 10, Element::Fire);

        assert_eq!(grid.get(10, 10).unwrap().life(), Some(INITIAL_LIFE));
    }

    #[test]
    fn test_paint_out_of_bounds_is_noop() {
        let mut grid = Grid::new();
        paint(&mut grid, 0, 5, Element::Plant);
        let before = grid.clone();

        assert!(!paint(&mut grid, -1, 5, Element::Sand));
        assert!(!paint(&mut grid, 100, 5, Element::Sand));
        assert!(!paint(&mut grid, 5, -1, Element::Sand));
        assert!(!paint(&mut grid, 5, 100, Element::Sand));

        assert_eq!(grid, before);
    }

    #[test]
    fn test_canvas_to_grid() {
        assert_eq!(canvas_to_grid(Vec2::new(0.0, 0.0)), IVec2::new(0, 0));
        assert_eq!(canvas_to_grid(Vec2::new(2.9, 5.9)), IVec2::new(0, 1));
        assert_eq!(canvas_to_grid(Vec2::new(150.0, 299.0)), IVec2::new(50, 99));
        assert_eq!(canvas_to_grid(Vec2::new(-0.5, 300.0)), IVec2::new(-1, 100));
    }

    /// 400x460 window; the canvas's top-left corner sits at (50, 110)
    fn pointer_app() -> (App, Entity) {
        let mut app = App::new();
        app.init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<SelectedElement>()
            .init_resource::<Sandbox>()
            .add_event::<CursorMoved>()
            .add_event::<CursorLeft>()
            .add_systems(Update, paint_with_cursor);
        let window = app
            .world_mut()
            .spawn(Window {
                resolution: (400.0, 460.0).into(),
                ..default()
            })
            .id();
        (app, window)
    }

    /// Window position at the centre of grid cell `(x, y)`
    fn over_cell(x: i32, y: i32) -> Vec2 {
        Vec2::new(50.0, 110.0) + (Vec2::new(x as f32, y as f32) + 0.5) * CELL_SIZE
    }

    fn move_to(app: &mut App, window: Entity, position: Vec2) {
        app.world_mut().send_event(CursorMoved {
            window,
            position,
            delta: None,
        });
    }

    fn press(app: &mut App) {
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
    }

    /// Let the press stop counting as "just pressed" while staying held
    fn hold(app: &mut App) {
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .clear();
    }

    fn sand_count(app: &App) -> usize {
        app.world()
            .resource::<Sandbox>()
            .grid
            .count(|cell| cell.is(Element::Sand))
    }

    #[test]
    fn test_cursor_cell_mapping() {
        let window = Window {
            resolution: (400.0, 460.0).into(),
            ..default()
        };
        assert_eq!(cursor_cell(&window, over_cell(50, 10)), IVec2::new(50, 10));
        assert_eq!(cursor_cell(&window, over_cell(0, 99)), IVec2::new(0, 99));
        assert_eq!(cursor_cell(&window, Vec2::new(10.0, 10.0)), IVec2::new(-14, -34));
    }

    #[test]
    fn test_stroke_paints_once_per_move() {
        let (mut app, window) = pointer_app();
        move_to(&mut app, window, over_cell(50, 10));
        app.update();

        press(&mut app);
        app.update();
        hold(&mut app);
        // Pressing alone stamps nothing
        assert_eq!(sand_count(&app), 0);

        move_to(&mut app, window, over_cell(51, 10));
        move_to(&mut app, window, over_cell(52, 10));
        app.update();
        assert_eq!(sand_count(&app), 2);

        // Holding still over the canvas adds nothing more
        app.update();
        app.update();
        assert_eq!(sand_count(&app), 2);

        let grid = &app.world().resource::<Sandbox>().grid;
        assert_eq!(grid.get(51, 10).unwrap(), Cell::new(Element::Sand));
        assert_eq!(grid.get(52, 10).unwrap(), Cell::new(Element::Sand));
    }

    #[test]
    fn test_moves_without_button_do_not_paint() {
        let (mut app, window) = pointer_app();

        move_to(&mut app, window, over_cell(10, 10));
        move_to(&mut app, window, over_cell(11, 10));
        app.update();

        assert_eq!(sand_count(&app), 0);
    }

    #[test]
    fn test_stroke_started_off_canvas_never_paints() {
        let (mut app, window) = pointer_app();
        // Window margin left of the canvas
        move_to(&mut app, window, Vec2::new(10.0, 200.0));
        app.update();

        press(&mut app);
        app.update();
        hold(&mut app);

        move_to(&mut app, window, over_cell(5, 30));
        move_to(&mut app, window, over_cell(6, 30));
        app.update();

        assert_eq!(sand_count(&app), 0);
    }

    #[test]
    fn test_leaving_canvas_ends_stroke() {
        let (mut app, window) = pointer_app();
        move_to(&mut app, window, over_cell(1, 30));
        app.update();
        press(&mut app);
        app.update();
        hold(&mut app);

        move_to(&mut app, window, over_cell(0, 30));
        move_to(&mut app, window, Vec2::new(10.0, 200.0));
        move_to(&mut app, window, over_cell(0, 31));
        app.update();
        assert_eq!(sand_count(&app), 1);

        // A fresh press on the canvas starts a new stroke
        {
            let mut input = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
            input.release(MouseButton::Left);
            input.clear();
        }
        press(&mut app);
        app.update();
        hold(&mut app);
        move_to(&mut app, window, over_cell(0, 32));
        app.update();
        assert_eq!(sand_count(&app), 2);
    }

    #[test]
    fn test_release_ends_stroke() {
        let (mut app, window) = pointer_app();
        move_to(&mut app, window, over_cell(20, 20));
        app.update();
        press(&mut app);
        app.update();
        hold(&mut app);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .release(MouseButton::Left);
        move_to(&mut app, window, over_cell(21, 20));
        app.update();

        assert_eq!(sand_count(&app), 0);
    }

    #[test]
    fn test_cursor_leaving_window_ends_stroke() {
        let (mut app, window) = pointer_app();
        move_to(&mut app, window, over_cell(20, 20));
        app.update();
        press(&mut app);
        app.update();
        hold(&mut app);

        app.world_mut().send_event(CursorLeft { window });
        app.update();
        move_to(&mut app, window, over_cell(21, 20));
        app.update();

        assert_eq!(sand_count(&app), 0);
    }
}
