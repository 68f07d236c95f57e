use std::time::Duration;

use crate::core::data::canvas::Canvas;
use crate::core::fractals::julia::function_catalog::JuliaFunction;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub function: JuliaFunction,
    pub canvas: Canvas,
    pub render_duration: Duration,
}
