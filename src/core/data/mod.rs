pub mod canvas;
pub mod colour;
pub mod complex;
pub mod escape_result;
pub mod pixel_output;
pub mod point;
pub mod sample_grid;
pub mod screen_transform;
