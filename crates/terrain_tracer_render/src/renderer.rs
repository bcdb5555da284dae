//! Per-pixel shading of a `Scene`.
//!
//! Every pixel casts one ray from the camera. The nearest hit among the terrain, spheres and boxes decides the color: terrain
//! is colored by biome, primitives by the albedo of their material, and misses by the sky color. There is no lighting.

use crate::{Camera, Color, RenderError, RenderSettings, Scene};

use rayon::prelude::*;
use terrain_tracer_core::prelude::*;
use terrain_tracer_core::{ray_sphere_intersect, Face};
use terrain_tracer_search::{cast_ray_at_leaves, cast_ray_at_octree, PointRayImpact};
use terrain_tracer_storage::OctreeNode;

/// What a ray hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitObject {
    /// A terrain cell and the height-field point stored in it.
    Terrain { point: Point3f, octant: Octant },
    Sphere { index: usize },
    Box { index: usize, face: Face },
}

/// The nearest hit of a ray with a `Scene`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitData {
    pub toi: f32,
    pub world_position: Point3f,
    pub world_normal: Point3f,
    pub object: HitObject,
}

impl HitData {
    fn terrain(ray: &Ray, impact: PointRayImpact) -> Self {
        let aabb = impact.octant.aabb();
        // A ray that starts inside of the cell has no entry face.
        let world_normal = aabb
            .intersect_ray_triangles(ray)
            .filter(|_| impact.toi > 0.0)
            .map_or(PointN([0.0, 1.0, 0.0]), |(_, face)| face.normal());

        Self {
            toi: impact.toi,
            world_position: ray.point_at(impact.toi),
            world_normal,
            object: HitObject::Terrain {
                point: impact.point,
                octant: impact.octant,
            },
        }
    }
}

/// Owns the color buffer and shades it one frame at a time.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    settings: RenderSettings,
    width: u32,
    height: u32,
    color_buffer: Vec<u32>,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    #[inline]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    #[inline]
    pub fn settings_mut(&mut self) -> &mut RenderSettings {
        &mut self.settings
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resizes the color buffer. Does nothing if the size is unchanged.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }

        self.width = width;
        self.height = height;
        self.color_buffer = vec![0; width as usize * height as usize];
    }

    /// One `0xAABBGGRR` color per pixel, in row-major order starting at the top-left.
    #[inline]
    pub fn color_buffer(&self) -> &[u32] {
        &self.color_buffer
    }

    /// The color buffer as raw bytes, ready to upload as an RGBA8 texture on little-endian targets.
    pub fn image_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color_buffer)
    }

    /// Shades every pixel of the color buffer.
    ///
    /// `&Scene` is shared by all workers. Since rebuilding terrain requires `&mut Scene`, it can't happen during a frame.
    pub fn render<C>(&mut self, scene: &Scene, camera: &C) -> Result<(), RenderError>
    where
        C: Camera + Sync,
    {
        scene.validate()?;

        let span = tracing::info_span!("render", width = self.width, height = self.height);
        let _guard = span.enter();

        if self.color_buffer.is_empty() {
            return Ok(());
        }

        let frame = Frame::new(scene, self.settings);
        let (width, height) = (self.width, self.height);
        let shade_row = |(y, row): (usize, &mut [u32])| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let ray = camera.ray(x as u32, y as u32, width, height);
                *pixel = frame.per_pixel(&ray).to_rgba_u32();
            }
        };

        if self.settings.parallel {
            self.color_buffer
                .par_chunks_mut(width as usize)
                .enumerate()
                .for_each(shade_row);
        } else {
            self.color_buffer
                .chunks_mut(width as usize)
                .enumerate()
                .for_each(shade_row);
        }

        Ok(())
    }

    /// Casts a single ray at `scene` using the current settings.
    pub fn cast_ray(&self, scene: &Scene, ray: &Ray) -> Option<HitData> {
        Frame::new(scene, self.settings).cast_ray(ray)
    }
}

/// Read-only state shared by every pixel of one frame.
struct Frame<'a> {
    scene: &'a Scene,
    settings: RenderSettings,
    // Only collected when the octree traversal is disabled.
    leaves: Option<Vec<&'a OctreeNode>>,
}

impl<'a> Frame<'a> {
    fn new(scene: &'a Scene, settings: RenderSettings) -> Self {
        let leaves = match &scene.terrain {
            Some(terrain) if settings.terrain && !settings.use_octree => {
                Some(terrain.octree().collect_leaves_with_points())
            }
            _ => None,
        };

        Self {
            scene,
            settings,
            leaves,
        }
    }

    fn per_pixel(&self, ray: &Ray) -> Color {
        let hit = match self.cast_ray(ray) {
            Some(hit) => hit,
            None => return Color::SKY,
        };

        match hit.object {
            HitObject::Terrain { point, .. } => match &self.scene.terrain {
                Some(terrain) => terrain.color_at(point),
                None => Color::SKY,
            },
            HitObject::Sphere { index } => {
                self.material_color(self.scene.spheres[index].material_index)
            }
            HitObject::Box { index, .. } => {
                self.material_color(self.scene.boxes[index].material_index)
            }
        }
    }

    fn material_color(&self, index: usize) -> Color {
        self.scene
            .materials
            .get(index)
            .map_or(Color::SKY, |m| m.albedo)
    }

    fn cast_ray(&self, ray: &Ray) -> Option<HitData> {
        let mut nearest = self.cast_ray_at_terrain(ray);

        for (index, sphere) in self.scene.spheres.iter().enumerate() {
            if let Some(toi) = ray_sphere_intersect(ray, &sphere.sphere) {
                if is_closer(toi, &nearest) {
                    let world_position = ray.point_at(toi);
                    nearest = Some(HitData {
                        toi,
                        world_position,
                        world_normal: sphere.sphere.normal_at(world_position),
                        object: HitObject::Sphere { index },
                    });
                }
            }
        }

        for (index, scene_box) in self.scene.boxes.iter().enumerate() {
            if let Some((toi, face)) = scene_box.aabb.intersect_ray_triangles(ray) {
                if is_closer(toi, &nearest) {
                    nearest = Some(HitData {
                        toi,
                        world_position: ray.point_at(toi),
                        world_normal: face.normal(),
                        object: HitObject::Box { index, face },
                    });
                }
            }
        }

        nearest
    }

    fn cast_ray_at_terrain(&self, ray: &Ray) -> Option<HitData> {
        if !self.settings.terrain {
            return None;
        }
        let terrain = self.scene.terrain.as_ref()?;

        let impact = match &self.leaves {
            Some(leaves) => cast_ray_at_leaves(leaves.iter().copied(), ray, f32::INFINITY),
            None => cast_ray_at_octree(terrain.octree(), ray, f32::INFINITY),
        }?;

        Some(HitData::terrain(ray, impact))
    }
}

fn is_closer(toi: f32, nearest: &Option<HitData>) -> bool {
    nearest.as_ref().map_or(true, |hit| toi < hit.toi)
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
    use crate::{Material, PinholeCamera, SceneBox, SceneSphere, Terrain};

    use pretty_assertions::assert_eq;
    use terrain_tracer_storage::{Array2, HeightFieldConfig};
    use utilities::data_sets::random_height_map;

    fn flat_terrain(edge_length: i32, sample: f32) -> Terrain {
        let extent = Extent2i::from_min_and_shape(PointN([0, 0]), PointN([edge_length; 2]));
        let config = HeightFieldConfig {
            max_height: 8,
            ..Default::default()
        };

        Terrain::new(Array2::fill(extent, sample), config).unwrap()
    }

    fn overhead_camera() -> PinholeCamera {
        PinholeCamera::look_at(PointN([4.0, 30.0, 4.0]), PointN([4.0, 0.0, 4.0]), 10.0)
    }

    #[test]
    fn terrain_hit_from_above() {
        // Sample 0.0 maps to height 4, so the cells span y in (4, 5].
        let scene = Scene {
            terrain: Some(flat_terrain(8, 0.0)),
            ..Default::default()
        };
        let renderer = Renderer::default();
        let ray = Ray::new(PointN([2.3, 20.0, 3.8]), PointN([0.0, -1.0, 0.0]));

        let hit = renderer.cast_ray(&scene, &ray).unwrap();

        assert_eq!(hit.toi, 15.0);
        assert_eq!(hit.world_position, PointN([2.3, 5.0, 3.8]));
        assert_eq!(hit.world_normal, PointN([0.0, 1.0, 0.0]));
        assert_eq!(
            hit.object,
            HitObject::Terrain {
                point: PointN([2.5, 4.5, 3.5]),
                octant: Octant::new_unchecked(PointN([2, 4, 3]), 1),
            }
        );
    }

    #[test]
    fn nearest_object_wins() {
        let mut scene = Scene {
            terrain: Some(flat_terrain(8, 0.0)),
            materials: vec![
                Material {
                    albedo: Color::STONE,
                },
                Material {
                    albedo: Color::SNOW,
                },
            ],
            ..Default::default()
        };
        scene.spheres.push(SceneSphere {
            sphere: Sphere3::new(PointN([2.3, 10.0, 3.8]), 1.0),
            material_index: 0,
        });
        scene.boxes.push(SceneBox {
            aabb: Aabb::new(PointN([2.5, 15.0, 3.5]), PointN([1.0, 1.0, 1.0])),
            material_index: 1,
        });
        let renderer = Renderer::default();

        let ray = Ray::new(PointN([2.3, 20.0, 3.8]), PointN([0.0, -1.0, 0.0]));
        let hit = renderer.cast_ray(&scene, &ray).unwrap();
        assert!((hit.toi - 4.0).abs() < 1e-5);
        assert_eq!(hit.object, HitObject::Box { index: 0, face: Face::Top });

        scene.boxes.clear();
        let hit = renderer.cast_ray(&scene, &ray).unwrap();
        assert_eq!(hit.toi, 9.0);
        assert_eq!(hit.object, HitObject::Sphere { index: 0 });
        assert_eq!(hit.world_normal, PointN([0.0, 1.0, 0.0]));
    }

    #[test]
    fn disabled_terrain_is_invisible() {
        let scene = Scene {
            terrain: Some(flat_terrain(8, 0.0)),
            ..Default::default()
        };
        let renderer = Renderer::new(RenderSettings {
            terrain: false,
            ..Default::default()
        });
        let ray = Ray::new(PointN([2.3, 20.0, 3.8]), PointN([0.0, -1.0, 0.0]));

        assert_eq!(renderer.cast_ray(&scene, &ray), None);
    }

    #[test]
    fn empty_frame_is_a_no_op() {
        let mut renderer = Renderer::default();

        renderer.render(&Scene::default(), &overhead_camera()).unwrap();

        assert!(renderer.image_bytes().is_empty());
    }

    #[test]
    fn miss_is_sky() {
        let mut renderer = Renderer::default();
        renderer.on_resize(3, 2);

        renderer.render(&Scene::default(), &overhead_camera()).unwrap();

        assert_eq!(renderer.color_buffer(), &[Color::SKY.to_rgba_u32(); 6]);
        assert_eq!(renderer.image_bytes().len(), 24);
    }

    #[test]
    fn overhead_view_sees_grass() {
        let scene = Scene {
            terrain: Some(flat_terrain(8, 0.0)),
            ..Default::default()
        };
        let mut renderer = Renderer::default();
        renderer.on_resize(4, 4);

        renderer.render(&scene, &overhead_camera()).unwrap();

        // Height 4 of 8 is 0.5, which is grass.
        let grass = Color::GRASS.to_rgba_u32();
        assert!(renderer.color_buffer().iter().all(|&c| c == grass));
    }

    #[test]
    fn rays_along_cell_faces_see_terrain() {
        let scene = Scene {
            terrain: Some(flat_terrain(8, 0.0)),
            ..Default::default()
        };

        // The center row and column of pixels travel inside the planes x = 4 and z = 4.
        let mut renderer = Renderer::default();
        renderer.on_resize(5, 5);
        renderer.render(&scene, &overhead_camera()).unwrap();

        let grass = Color::GRASS.to_rgba_u32();
        assert!(renderer.color_buffer().iter().all(|&c| c == grass));

        let ray = Ray::new(PointN([1.0, 20.0, 0.5]), PointN([0.0, -1.0, 0.0]));
        let hit = renderer.cast_ray(&scene, &ray).unwrap();
        assert_eq!(hit.toi, 15.0);
        assert!(matches!(
            hit.object,
            HitObject::Terrain { octant, .. } if octant.minimum() == PointN([0, 4, 0])
        ));
    }

    #[test]
    fn all_render_modes_agree() {
        let config = HeightFieldConfig {
            max_height: 12,
            ..Default::default()
        };
        let scene = Scene {
            terrain: Some(Terrain::new(random_height_map(16, 9), config).unwrap()),
            ..Default::default()
        };
        let camera =
            PinholeCamera::look_at(PointN([-8.0, 24.0, -8.0]), PointN([8.0, 4.0, 8.0]), 45.0);

        let mut buffers = Vec::new();
        let modes = [(true, true), (false, true), (true, false), (false, false)];
        for &(parallel, use_octree) in modes.iter() {
            let mut renderer = Renderer::new(RenderSettings {
                parallel,
                use_octree,
                terrain: true,
            });
            renderer.on_resize(24, 16);
            renderer.render(&scene, &camera).unwrap();
            buffers.push(renderer.color_buffer().to_vec());
        }

        assert!(buffers[0].iter().any(|&c| c != Color::SKY.to_rgba_u32()));
        for b in buffers[1..].iter() {
            assert_eq!(b, &buffers[0]);
        }
    }

    #[test]
    fn render_rejects_missing_material() {
        let mut scene = Scene::default();
        scene.spheres.push(SceneSphere {
            sphere: Sphere3::new(PointN([0.0, 0.0, 0.0]), 1.0),
            material_index: 0,
        });
        let mut renderer = Renderer::default();
        renderer.on_resize(2, 2);

        assert!(matches!(
            renderer.render(&scene, &overhead_camera()),
            Err(RenderError::MissingMaterial { .. })
        ));
    }
}
