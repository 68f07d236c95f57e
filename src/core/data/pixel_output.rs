use crate::core::data::colour::Hsl;
use crate::core::data::point::Point;

/// A coloured block position handed to a render sink.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelOutput {
    pub screen: Point,
    pub colour: Hsl,
}
