use bevy::prelude::*;

/// Life assigned to every freshly created particle, whatever its element
pub const INITIAL_LIFE: i32 = 100;

/// Particle types that can occupy a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Sand,
    Water,
    Fire,
    Plant,
}

impl Element {
    /// Every element in button/hotkey order
    pub const ALL: [Element; 4] = [
        Element::Sand,
        Element::Water,
        Element::Fire,
        Element::Plant,
    ];

    /// Human-readable label used by the selection buttons
    pub fn name(&self) -> &'static str {
        match self {
            Element::Sand => "Sand",
            Element::Water => "Water",
            Element::Fire => "Fire",
            Element::Plant => "Plant",
        }
    }

    /// Packed sRGB colour written into the canvas texture
    pub fn rgba(&self) -> [u8; 4] {
        match self {
            Element::Sand => [0xc2, 0xb2, 0x80, 0xff],
            Element::Water => [0x33, 0x99, 0xff, 0xff],
            Element::Fire => [0xff, 0x45, 0x00, 0xff],
            Element::Plant => [0x00, 0xcc, 0x44, 0xff],
        }
    }

    /// Same colour as a Bevy `Color`, for UI swatches
    pub fn color(&self) -> Color {
        let [r, g, b, _] = self.rgba();
        Color::srgb_u8(r, g, b)
    }
}

/// One lattice slot. `life` only matters for fire, but every particle carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied { kind: Element, life: i32 },
}

impl Cell {
    /// A fresh particle of `kind` with `INITIAL_LIFE`
    pub fn new(kind: Element) -> Self {
        Cell::Occupied {
            kind,
            life: INITIAL_LIFE,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn kind(&self) -> Option<Element> {
        match self {
            Cell::Empty => None,
            Cell::Occupied { kind, .. } => Some(*kind),
        }
    }

    #[inline]
    #[allow(dead_code)]
    pub fn life(&self) -> Option<i32> {
        match self {
            Cell::Empty => None,
            Cell::Occupied { life, .. } => Some(*life),
        }
    }

    /// True when occupied by the given element
    #[inline]
    pub fn is(&self, element: Element) -> bool {
        self.kind() == Some(element)
    }
}
