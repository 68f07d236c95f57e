use crate::core::{
    data::{sample_grid::SampleGrid, screen_transform::ScreenTransform},
    fractals::julia::{
        algorithm::{DEFAULT_ESCAPE_RADIUS, DEFAULT_MAX_ITERATIONS, JuliaAlgorithm},
        errors::julia::JuliaError,
        function_catalog::JuliaFunction,
    },
};

/// Engine settings shared by every walk. Defaults reproduce the reference viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaConfig {
    pub grid: SampleGrid,
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub screen: ScreenTransform,
}

impl Default for JuliaConfig {
    fn default() -> Self {
        Self {
            grid: SampleGrid::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            screen: ScreenTransform::default(),
        }
    }
}

impl JuliaConfig {
    pub fn build_algorithm(&self, function: JuliaFunction) -> Result<JuliaAlgorithm, JuliaError> {
        JuliaAlgorithm::new(function, self.max_iterations, self.escape_radius)
    }
}
