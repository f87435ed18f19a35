use noise::{Fbm, NoiseFn, Perlin};

use crate::world::{Cell, Element, GRID_SIZE, Grid, GridError};

/// Parameters for the dune preset
#[derive(Clone)]
pub struct DuneParams {
    pub scale: f64,
    pub base_height: f64,
    pub amplitude: f64,
    /// Columns whose noise sample exceeds this grow a plant on top
    pub plant_threshold: f64,
    /// Columns this low or lower get a pool of water above the sand
    pub water_level: i32,
}

impl Default for DuneParams {
    fn default() -> Self {
        Self {
            scale: 3.0,
            base_height: 22.0,
            amplitude: 18.0,
            plant_threshold: 0.25,
            water_level: 14,
        }
    }
}

/// Clear the grid and fill it with noise-shaped sand dunes
pub fn seed_dunes(grid: &mut Grid, seed: u32) -> Result<(), GridError> {
    seed_dunes_with(grid, seed, &DuneParams::default())
}

pub fn seed_dunes_with(
    grid: &mut Grid,
    seed: u32,
    params: &DuneParams,
) -> Result<(), GridError> {
    grid.clear();

    let fbm = Fbm::<Perlin>::new(seed);
    let bottom = GRID_SIZE as i32 - 1;

    for x in 0..GRID_SIZE as i32 {
        let sample = fbm.get([x as f64 / GRID_SIZE as f64 * params.scale, 0.5]);
        let height = (params.base_height + sample * params.amplitude)
            .round()
            .clamp(1.0, GRID_SIZE as f64 / 2.0) as i32;

        // Sand column from the floor up to `height`
        for y in (bottom - height + 1)..=bottom {
            grid.set(x, y, Cell::new(Element::Sand))?;
        }

        let surface = bottom - height;
        if height <= params.water_level {
            for y in (bottom - params.water_level + 1)..=surface {
                grid.set(x, y, Cell::new(Element::Water))?;
            }
        } else if sample > params.plant_threshold {
            grid.set(x, surface, Cell::new(Element::Plant))?;
        }
    }
    Ok(())
}
