//! Pixel data and PNG output operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::error::Canvas2dResult;

impl Canvas2dContext {
    /// Get image data for a region of the canvas.
    ///
    /// Returns non-premultiplied RGBA bytes. Pixels outside the canvas are
    /// transparent black.
    pub fn get_image_data(&self, x: i32, y: i32, width: u32, height: u32) -> Vec<u8> {
        let mut data = vec![0u8; (width * height * 4) as usize];

        for dy in 0..height {
            for dx in 0..width {
                let src_x = x + dx as i32;
                let src_y = y + dy as i32;
                if src_x < 0
                    || src_x >= self.width as i32
                    || src_y < 0
                    || src_y >= self.height as i32
                {
                    continue;
                }

                let dst_idx = ((dy * width + dx) * 4) as usize;
                let src_idx = (src_y as u32 * self.width + src_x as u32) as usize;
                let pixel = &self.pixmap.data()[src_idx * 4..src_idx * 4 + 4];

                // Convert from premultiplied alpha to straight alpha
                match pixel[3] {
                    0 => {}
                    255 => data[dst_idx..dst_idx + 4].copy_from_slice(pixel),
                    a => {
                        let alpha_f = a as f32 / 255.0;
                        for c in 0..3 {
                            data[dst_idx + c] = (pixel[c] as f32 / alpha_f).round().min(255.0) as u8;
                        }
                        data[dst_idx + 3] = a;
                    }
                }
            }
        }

        data
    }

    /// Export the canvas as PNG data.
    pub fn to_png(&self) -> Canvas2dResult<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;

            // Convert from premultiplied to straight alpha for PNG
            let data = self.get_image_data(0, 0, self.width, self.height);
            writer.write_image_data(&data)?;
        }
        Ok(buf)
    }
}
