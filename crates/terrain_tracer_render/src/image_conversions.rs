use crate::Renderer;

pub use image;

use image::{Rgba, RgbaImage};

impl Renderer {
    /// Copies the color buffer into an `RgbaImage`, e.g. for saving as a PNG.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let width = self.width();
        let colors = self.color_buffer();

        RgbaImage::from_fn(width, self.height(), |x, y| {
            let color = colors[(y * width + x) as usize];
            Rgba(color.to_le_bytes())
        })
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
