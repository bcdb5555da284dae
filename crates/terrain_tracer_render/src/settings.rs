#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Toggles for `Renderer::render`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct RenderSettings {
    /// Shade rows of pixels on the rayon thread pool.
    pub parallel: bool,
    /// Cast terrain rays with the pruned octree traversal. Otherwise every point-bearing leaf is tested.
    pub use_octree: bool,
    /// Render the terrain at all.
    pub terrain: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            parallel: true,
            use_octree: true,
            terrain: true,
        }
    }
}

/// A linear RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const SKY: Self = Self::rgb(0.5, 0.65, 1.0);
    pub const WATER: Self = Self::rgb(0.1, 0.25, 1.0);
    pub const SAND: Self = Self::rgb(0.7, 0.7, 0.3);
    pub const GRASS: Self = Self::rgb(0.55, 0.8, 0.5);
    pub const STONE: Self = Self::rgb(0.2, 0.2, 0.2);
    pub const SNOW: Self = Self::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b, 1.0])
    }

    /// Packs into `0xAABBGGRR`, clamping each component into `[0, 1]` first.
    pub fn to_rgba_u32(&self) -> u32 {
        let [r, g, b, a] = self.0;
        let byte = |c: f32| (c.max(0.0).min(1.0) * 255.0) as u32;

        (byte(a) << 24) | (byte(b) << 16) | (byte(g) << 8) | byte(r)
    }
}

/// Normalized terrain heights at which the biome changes. Heights below `water` are water, then sand, grass, stone, and
/// anything at or above `snow` is snow.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct BiomeThresholds {
    pub water: f32,
    pub sand: f32,
    pub stone: f32,
    pub snow: f32,
}

impl Default for BiomeThresholds {
    fn default() -> Self {
        Self {
            water: 0.4,
            sand: 0.425,
            stone: 0.55,
            snow: 0.625,
        }
    }
}

impl BiomeThresholds {
    /// The color of terrain at `normalized_height` in `[0, 1]`.
    pub fn color_for(&self, normalized_height: f32) -> Color {
        if normalized_height < self.water {
            Color::WATER
        } else if normalized_height < self.sand {
            Color::SAND
        } else if normalized_height < self.stone {
            Color::GRASS
        } else if normalized_height < self.snow {
            Color::STONE
        } else {
            Color::SNOW
        }
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
