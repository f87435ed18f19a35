use bevy::prelude::*;

use crate::rendering::{CanvasRenderer, CanvasTexture};
use crate::simulation::paint::{SelectedElement, paint_with_cursor};
use crate::simulation::update::tick;
use crate::world::Grid;

/// Consumer of the grid after each frame's tick. Gets read-only access.
pub trait GridRenderer {
    fn render(&mut self, grid: &Grid);
}

/// No canvas attached (headless runs)
impl GridRenderer for () {
    fn render(&mut self, _grid: &Grid) {}
}

/// One frame: tick once, then hand the grid to the renderer
pub fn advance_frame<R: GridRenderer + ?Sized>(grid: &mut Grid, renderer: &mut R) {
    tick(grid);
    renderer.render(grid);
}

/// Resource owning the lattice for the lifetime of the app
#[derive(Resource, Default, Debug)]
pub struct Sandbox {
    pub grid: Grid,
}

/// Plugin driving the simulation from Bevy's frame loop
pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Sandbox>()
            .init_resource::<SelectedElement>()
            .add_systems(Update, (paint_with_cursor, run_frame).chain());
    }
}

/// Per-frame driver: paint has already been applied, so tick and redraw
pub fn run_frame(
    mut sandbox: ResMut<Sandbox>,
    canvas: Option<Res<CanvasTexture>>,
    mut images: Option<ResMut<Assets<Image>>>,
) {
    let pixels = match (canvas.as_deref(), images.as_deref_mut()) {
        (Some(canvas), Some(images)) => images
            .get_mut(&canvas.image)
            .and_then(|image| image.data.as_mut()),
        _ => None,
    };

    match pixels {
        Some(pixels) => advance_frame(&mut sandbox.grid, &mut CanvasRenderer::new(pixels)),
        None => advance_frame(&mut sandbox.grid, &mut ()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::paint::paint;
    use crate::world::{Cell, Element};

    /// Records the sand positions it is shown each frame
    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<(i32, i32)>>,
    }

    impl GridRenderer for Recorder {
        fn render(&mut self, grid: &Grid) {
            self.frames.push(
                grid.iter()
                    .filter(|(_, _, cell)| cell.is(Element::Sand))
                    .map(|(x, y, _)| (x, y))
                    .collect(),
            );
        }
    }

    #[test]
    fn test_advance_frame_ticks_before_render() {
        let mut grid = Grid::new();
        paint(&mut grid, 5, 0, Element::Sand);
        let mut recorder = Recorder::default();

        advance_frame(&mut grid, &mut recorder);
        advance_frame(&mut grid, &mut recorder);

        assert_eq!(recorder.frames, vec![vec![(5, 1)], vec![(5, 2)]]);
    }

    fn headless_app() -> App {
        let mut app = App::new();
        app.init_resource::<Sandbox>()
            .add_systems(Update, run_frame);
        app
    }

    #[test]
    fn test_run_frame_ticks_each_update() {
        let mut app = headless_app();
        paint(&mut app.world_mut().resource_mut::<Sandbox>().grid, 5, 0, Element::Sand);

        app.update();
        app.update();

        let grid = &app.world().resource::<Sandbox>().grid;
        assert_eq!(grid.get(5, 2).unwrap(), Cell::new(Element::Sand));
    }

    #[test]
    fn test_run_frame_ticks_once_per_update() {
        let mut app = headless_app();
        paint(&mut app.world_mut().resource_mut::<Sandbox>().grid, 5, 0, Element::Sand);

        app.update();
        assert!(app.world().resource::<Sandbox>().grid.get(5, 1).unwrap().is(Element::Sand));
        assert!(app.world().resource::<Sandbox>().grid.is_empty(5, 0));
    }
}
