use crate::{BiomeThresholds, Color, RenderError};

use terrain_tracer_core::prelude::*;
use terrain_tracer_storage::{prelude::*, GenerateStats};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything `Renderer::render` draws.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub terrain: Option<Terrain>,
    pub spheres: Vec<SceneSphere>,
    pub boxes: Vec<SceneBox>,
    pub materials: Vec<Material>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Material {
    pub albedo: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSphere {
    pub sphere: Sphere3,
    pub material_index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneBox {
    pub aabb: Aabb,
    pub material_index: usize,
}

impl Scene {
    /// Checks that every primitive refers to an existing material.
    pub fn validate(&self) -> Result<(), RenderError> {
        let count = self.materials.len();
        let sphere_materials = self
            .spheres
            .iter()
            .enumerate()
            .map(|(i, s)| (format!("sphere {}", i), s.material_index));
        let box_materials = self
            .boxes
            .iter()
            .enumerate()
            .map(|(i, b)| (format!("box {}", i), b.material_index));

        for (object, index) in sphere_materials.chain(box_materials) {
            if index >= count {
                return Err(RenderError::MissingMaterial {
                    object,
                    index,
                    count,
                });
            }
        }

        Ok(())
    }
}

/// Height-field terrain and the octree that indexes it.
#[derive(Clone, Debug)]
pub struct Terrain {
    config: HeightFieldConfig,
    samples: Array2<f32>,
    octree: Octree,
    pub biomes: BiomeThresholds,
}

impl Terrain {
    pub fn new(samples: Array2<f32>, config: HeightFieldConfig) -> Result<Self, RenderError> {
        let points = height_field_points(&samples, &config)?;
        let size = octree_size_for(samples.extent().shape, config.max_height);
        let octree = Octree::from_points(size, points)?;

        Ok(Self {
            config,
            samples,
            octree,
            biomes: BiomeThresholds::default(),
        })
    }

    /// Replaces the samples and regenerates the octree from scratch. On error, the terrain is unchanged.
    pub fn rebuild(&mut self, samples: Array2<f32>) -> Result<GenerateStats, RenderError> {
        let points = height_field_points(&samples, &self.config)?;
        let size = octree_size_for(samples.extent().shape, self.config.max_height);
        let stats = self.octree.generate(size, points)?;
        self.samples = samples;

        Ok(stats)
    }

    #[inline]
    pub fn config(&self) -> &HeightFieldConfig {
        &self.config
    }

    #[inline]
    pub fn samples(&self) -> &Array2<f32> {
        &self.samples
    }

    #[inline]
    pub fn octree(&self) -> &Octree {
        &self.octree
    }

    /// The height of a terrain point relative to `max_height`, in `[0, 1]`.
    pub fn normalized_height(&self, point: Point3f) -> f32 {
        if self.config.max_height == 0 {
            return 0.0;
        }

        (point.y() - 0.5) / self.config.max_height as f32
    }

    pub fn color_at(&self, point: Point3f) -> Color {
        self.biomes.color_for(self.normalized_height(point))
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use utilities::data_sets::{ramp_height_map, random_height_map};

    #[test]
    fn terrain_indexes_every_sample() {
        let terrain = Terrain::new(random_height_map(16, 0), HeightFieldConfig::default()).unwrap();

        assert_eq!(terrain.octree().size(), 64);
        assert_eq!(terrain.octree().point_count(), 16 * 16);
    }

    #[test]
    fn rebuild_replaces_octree() {
        let mut terrain = Terrain::new(ramp_height_map(8), HeightFieldConfig::default()).unwrap();
        assert_eq!(terrain.octree().point_count(), 64);

        let stats = terrain.rebuild(random_height_map(4, 1)).unwrap();

        assert_eq!(stats.inserted, 16);
        assert_eq!(stats.dropped, 0);
        assert_eq!(terrain.octree().point_count(), 16);
        assert_eq!(terrain.samples().extent().shape, PointN([4, 4]));
    }

    #[test]
    fn failed_rebuild_keeps_terrain() {
        let mut terrain = Terrain::new(ramp_height_map(4), HeightFieldConfig::default()).unwrap();
        let extent = Extent2i::from_min_and_shape(PointN([0, 0]), PointN([1, 1]));
        let bad = Array2::fill(extent, f32::INFINITY);

        assert!(terrain.rebuild(bad).is_err());
        assert_eq!(terrain.octree().point_count(), 16);
        assert_eq!(terrain.samples().extent().shape, PointN([4, 4]));
    }

    #[test]
    fn ramp_heights_are_normalized() {
        let config = HeightFieldConfig {
            max_height: 8,
            ..Default::default()
        };
        let terrain = Terrain::new(ramp_height_map(2), config).unwrap();

        assert_eq!(terrain.normalized_height(PointN([0.5, 0.5, 0.5])), 0.0);
        assert_eq!(terrain.normalized_height(PointN([1.5, 8.5, 0.5])), 1.0);
        assert_eq!(terrain.color_at(PointN([1.5, 8.5, 0.5])), Color::SNOW);
    }

    #[test]
    fn missing_material_is_an_error() {
        let mut scene = Scene::default();
        scene.materials.push(Material {
            albedo: Color::STONE,
        });
        scene.spheres.push(SceneSphere {
            sphere: Sphere3::new(PointN([0.0, 0.0, 0.0]), 1.0),
            material_index: 0,
        });
        assert_eq!(scene.validate(), Ok(()));

        scene.boxes.push(SceneBox {
            aabb: Aabb::new(PointN([0.0, 0.0, 0.0]), PointN([1.0, 1.0, 1.0])),
            material_index: 3,
        });
        assert_eq!(
            scene.validate(),
            Err(RenderError::MissingMaterial {
                object: "box 0".to_string(),
                index: 3,
                count: 1,
            })
        );
    }
}
