pub mod cancellation;
pub mod sample_grid;
