pub mod ports;
#[allow(clippy::module_inception)]
pub mod sample_grid;
pub mod sample_grid_parallel_rayon;
