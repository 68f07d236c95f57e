use crate::core::actions::sample_grid::ports::render_sink::RenderSink;
use crate::core::data::colour::{Colour, Hsl};
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const DEFAULT_CANVAS_WIDTH: u32 = 600;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

fn canvas_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasError {
    InvalidSize { width: u32, height: u32 },
    BoundsMismatch {
        canvas_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "canvas size must be positive: {}x{}", width, height)
            }
            Self::BoundsMismatch {
                canvas_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "canvas size {} does not match buffer size {}",
                    canvas_size, buffer_size
                )
            }
        }
    }
}

impl Error for CanvasError {}

pub type CanvasData = Vec<u8>;

/// RGB raster that renders painted blocks, clipping anything outside its bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    buffer: CanvasData,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            buffer: vec![0; canvas_buffer_size(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)],
        }
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            buffer: vec![0; canvas_buffer_size(width, height)],
        })
    }

    pub fn from_data(width: u32, height: u32, buffer: CanvasData) -> Result<Self, CanvasError> {
        let mut canvas = Self::new(width, height)?;
        let canvas_size = canvas.buffer_size();

        if canvas_size != buffer.len() {
            return Err(CanvasError::BoundsMismatch {
                canvas_size,
                buffer_size: buffer.len(),
            });
        }

        canvas.buffer = buffer;
        Ok(canvas)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &CanvasData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn contains(&self, pixel: Point) -> bool {
        pixel.x >= 0
            && pixel.y >= 0
            && (pixel.x as u32) < self.width
            && (pixel.y as u32) < self.height
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.contains(pixel) {
            return None;
        }

        let index = self.index_of(pixel);

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Writes one pixel; returns false and leaves the canvas unchanged when out of bounds.
    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> bool {
        if !self.contains(pixel) {
            return false;
        }

        let index = self.index_of(pixel);

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        true
    }

    fn index_of(&self, pixel: Point) -> usize {
        (pixel.y as usize * self.width as usize + pixel.x as usize) * 3
    }
}

impl RenderSink for Canvas {
    fn paint_block(&mut self, x: i32, y: i32, width: u32, height: u32, colour: Hsl) {
        let rgb = colour.to_rgb();

        let x_start = i64::from(x).max(0);
        let y_start = i64::from(y).max(0);
        let x_end = (i64::from(x) + i64::from(width)).min(i64::from(self.width));
        let y_end = (i64::from(y) + i64::from(height)).min(i64::from(self.height));

        for py in y_start..y_end {
            for px in x_start..x_end {
                self.set_pixel(
                    Point {
                        x: px as i32,
                        y: py as i32,
                    },
                    rgb,
                );
            }
        }
    }
}
