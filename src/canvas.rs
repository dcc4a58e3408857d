use crate::math::RGBColor;
use crate::vec2d::Vec2D;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info};

const PPM_MAX_LINE_LENGTH: usize = 70;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("failed to write image: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

/// Grid of linear colors, (0, 0) at the top left.
#[derive(Clone, Debug)]
pub struct Canvas {
    pixels: Vec2D<RGBColor>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Canvas {
        Canvas::with_background(width, height, RGBColor::BLACK)
    }

    pub fn with_background(width: usize, height: usize, background: RGBColor) -> Canvas {
        Canvas {
            pixels: Vec2D::new(width, height, background),
        }
    }

    pub fn from_pixels(pixels: Vec2D<RGBColor>) -> Canvas {
        Canvas { pixels }
    }

    pub fn width(&self) -> usize {
        self.pixels.width
    }

    pub fn height(&self) -> usize {
        self.pixels.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.pixels.contains(x, y)
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> CanvasError {
        CanvasError::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        }
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> Result<RGBColor, CanvasError> {
        self.pixels
            .get(x, y)
            .copied()
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    pub fn write_pixel(&mut self, x: usize, y: usize, color: RGBColor) -> Result<(), CanvasError> {
        if !self.contains(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        self.pixels.write_at(x, y, color);
        Ok(())
    }

    /// Plain PPM (P3). every canvas row starts on a new line, and no line exceeds 70 characters.
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> Result<(), CanvasError> {
        writeln!(writer, "P3\n{} {}\n255", self.width(), self.height())?;
        let mut line = String::with_capacity(PPM_MAX_LINE_LENGTH + 1);
        for row in self.pixels.rows() {
            for channel in row.iter().flat_map(|pixel| pixel.channels()) {
                let value = scale_channel(channel).to_string();
                if !line.is_empty() && line.len() + 1 + value.len() > PPM_MAX_LINE_LENGTH {
                    writeln!(writer, "{}", line)?;
                    line.clear();
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&value);
            }
            writeln!(writer, "{}", line)?;
            line.clear();
        }
        writer.flush()?;
        Ok(())
    }

    pub fn to_rgb_image(&self) -> image::RgbImage {
        let mut img: image::RgbImage =
            image::ImageBuffer::new(self.width() as u32, self.height() as u32);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let color = self.pixels.at(x as usize, y as usize);
            *pixel = image::Rgb(color.channels().map(scale_channel));
        }
        img
    }

    /// `.ppm` paths are written as plain PPM, anything else goes through `image`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CanvasError> {
        let path = path.as_ref();
        let now = Instant::now();
        let is_ppm = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("ppm"));
        if is_ppm {
            self.write_ppm(BufWriter::new(File::create(path)?))?;
        } else {
            self.to_rgb_image().save(path)?;
        }
        debug!("encoded {} pixels", self.pixels.total_pixels());
        info!(
            "saved {} in {}s",
            path.display(),
            (now.elapsed().as_millis() as f32) / 1000.0
        );
        Ok(())
    }
}

pub fn scale_channel(value: f32) -> u8 {
    if value <= 0.0 {
        0
    } else if value >= 1.0 {
        255
    } else {
        (255.0 * value).ceil() as u8
    }
}
