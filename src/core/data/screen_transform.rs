use crate::core::data::complex::Complex;
use crate::core::data::point::Point;

/// Maps complex-plane coordinates onto screen positions and sets the painted block size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub block_size: u32,
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self {
            scale: 250.0,
            offset_x: 300.0,
            offset_y: 300.0,
            block_size: 2,
        }
    }
}

impl ScreenTransform {
    #[must_use]
    pub fn to_screen(&self, coordinate: Complex) -> Point {
        Point {
            x: (coordinate.real * self.scale + self.offset_x).round() as i32,
            y: (coordinate.imag * self.scale + self.offset_y).round() as i32,
        }
    }
}
