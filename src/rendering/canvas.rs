use bevy::image::ImageSampler;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::simulation::GridRenderer;
use crate::world::{GRID_SIZE, Grid};

/// Logical width and height of the canvas in pixels
pub const CANVAS_SIZE: f32 = 300.0;

/// Side of one cell on the canvas
pub const CELL_SIZE: f32 = CANVAS_SIZE / GRID_SIZE as f32;

/// Where the canvas sits in world space, below the element buttons
pub const CANVAS_CENTER: Vec2 = Vec2::new(0.0, -30.0);

/// Page background, also shown through empty cells
pub const BACKGROUND_COLOR: Color = Color::srgb(0.118, 0.118, 0.118);

const BORDER_COLOR: Color = Color::srgb(0.533, 0.533, 0.533);

/// Handle to the texture the grid is drawn into
#[derive(Resource, Clone)]
pub struct CanvasTexture {
    pub image: Handle<Image>,
}

/// Marker for the sprite displaying the grid
#[derive(Component)]
pub struct SandCanvas;

/// Plugin creating the camera and canvas sprite
pub struct CanvasPlugin;

impl Plugin for CanvasPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND_COLOR))
            .add_systems(Startup, setup_canvas);
    }
}

/// One texel per cell, stretched to `CANVAS_SIZE` with nearest sampling so
/// every cell shows as a `CELL_SIZE` square
fn create_canvas_image() -> Image {
    let mut image = Image::new_fill(
        Extent3d {
            width: GRID_SIZE as u32,
            height: GRID_SIZE as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[0, 0, 0, 0],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    image.sampler = ImageSampler::nearest();
    image
}

fn setup_canvas(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    commands.spawn(Camera2d);

    let handle = images.add(create_canvas_image());

    // 1px frame around the drawing area
    commands.spawn((
        Sprite {
            color: BORDER_COLOR,
            custom_size: Some(Vec2::splat(CANVAS_SIZE + 2.0)),
            ..default()
        },
        Transform::from_translation(CANVAS_CENTER.extend(-1.0)),
    ));
    commands.spawn((
        Sprite {
            color: BACKGROUND_COLOR,
            custom_size: Some(Vec2::splat(CANVAS_SIZE)),
            ..default()
        },
        Transform::from_translation(CANVAS_CENTER.extend(-0.5)),
    ));

    commands.spawn((
        Sprite {
            image: handle.clone(),
            custom_size: Some(Vec2::splat(CANVAS_SIZE)),
            ..default()
        },
        Transform::from_translation(CANVAS_CENTER.extend(0.0)),
        SandCanvas,
    ));
    commands.insert_resource(CanvasTexture { image: handle });

    info!("Canvas ready: {GRID_SIZE}x{GRID_SIZE} cells at {CELL_SIZE}px");
}

/// World position to canvas pixels, measured from the canvas top-left with `y` down
pub fn world_to_canvas(world_pos: Vec2, canvas_center: Vec2) -> Vec2 {
    let half = CANVAS_SIZE / 2.0;
    Vec2::new(
        world_pos.x - (canvas_center.x - half),
        (canvas_center.y + half) - world_pos.y,
    )
}

/// Window-space cursor position (origin top-left, y down) to world space.
/// The canvas camera stays at the origin with unit scale.
pub fn cursor_to_world(window_size: Vec2, cursor: Vec2) -> Vec2 {
    Vec2::new(cursor.x - window_size.x / 2.0, window_size.y / 2.0 - cursor.y)
}

/// Writes the grid into the canvas texture's RGBA bytes
pub struct CanvasRenderer<'a> {
    pixels: &'a mut [u8],
}

impl<'a> CanvasRenderer<'a> {
    pub fn new(pixels: &'a mut [u8]) -> Self {
        Self { pixels }
    }
}

impl GridRenderer for CanvasRenderer<'_> {
    fn render(&mut self, grid: &Grid) {
        for (x, y, cell) in grid.iter() {
            let idx = (y as usize * GRID_SIZE + x as usize) * 4;
            let rgba = cell.kind().map_or([0; 4], |kind| kind.rgba());
            if let Some(texel) = self.pixels.get_mut(idx..idx + 4) {
                texel.copy_from_slice(&rgba);
            }
        }
    }
}
