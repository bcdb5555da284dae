use terrain_tracer_core::prelude::*;

/// Where rays come from. `Renderer::render` asks for one ray per pixel.
pub trait Camera {
    fn position(&self) -> Point3f;

    /// The direction of the ray through the center of pixel `(pixel_x, pixel_y)` of a `width x height` image. Row 0 is the
    /// top of the image.
    fn ray_direction(&self, pixel_x: u32, pixel_y: u32, width: u32, height: u32) -> Point3f;

    fn ray(&self, pixel_x: u32, pixel_y: u32, width: u32, height: u32) -> Ray {
        Ray::new(
            self.position(),
            self.ray_direction(pixel_x, pixel_y, width, height),
        )
    }
}

/// A perspective camera with square pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinholeCamera {
    position: Point3f,
    forward: Point3f,
    right: Point3f,
    up: Point3f,
    tan_half_fov: f32,
}

impl PinholeCamera {
    pub const DEFAULT_VERTICAL_FOV_DEGREES: f32 = 45.0;

    /// A camera at `position` looking at `target`, with +Y as the approximate up direction.
    pub fn look_at(position: Point3f, target: Point3f, vertical_fov_degrees: f32) -> Self {
        let forward = (target - position).normalized();
        let mut right = forward.cross(&PointN([0.0, 1.0, 0.0]));
        if right.norm_squared() < 1e-12 {
            // Looking straight up or down.
            right = PointN([1.0, 0.0, 0.0]);
        }
        let right = right.normalized();
        let up = right.cross(&forward);

        Self {
            position,
            forward,
            right,
            up,
            tan_half_fov: (vertical_fov_degrees.to_radians() / 2.0).tan(),
        }
    }

    pub fn forward(&self) -> Point3f {
        self.forward
    }
}

impl Camera for PinholeCamera {
    fn position(&self) -> Point3f {
        self.position
    }

    fn ray_direction(&self, pixel_x: u32, pixel_y: u32, width: u32, height: u32) -> Point3f {
        let aspect = width as f32 / height.max(1) as f32;
        let ndc_x = 2.0 * (pixel_x as f32 + 0.5) / width.max(1) as f32 - 1.0;
        let ndc_y = 1.0 - 2.0 * (pixel_y as f32 + 0.5) / height.max(1) as f32;

        (self.forward
            + self.right * (ndc_x * aspect * self.tan_half_fov)
            + self.up * (ndc_y * self.tan_half_fov))
            .normalized()
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
