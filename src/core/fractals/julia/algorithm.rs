use crate::core::actions::sample_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::julia::errors::julia::JuliaError;
use crate::core::fractals::julia::function_catalog::JuliaFunction;
use std::ops::ControlFlow;

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

/// Escape-time iteration of a [`JuliaFunction`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    function: JuliaFunction,
    max_iterations: u32,
    escape_radius: f64,
}

impl FractalAlgorithm for JuliaAlgorithm {
    fn compute(&self, point: Complex) -> EscapeResult {
        EscapeResult {
            coordinate: point,
            iterations: self.iterate(point),
        }
    }
}

impl JuliaAlgorithm {
    pub fn new(
        function: JuliaFunction,
        max_iterations: u32,
        escape_radius: f64,
    ) -> Result<Self, JuliaError> {
        if max_iterations == 0 {
            return Err(JuliaError::ZeroMaxIterationsError);
        }

        if !(escape_radius.is_finite() && escape_radius > 0.0) {
            return Err(JuliaError::InvalidEscapeRadius {
                radius: escape_radius,
            });
        }

        Ok(Self {
            function,
            max_iterations,
            escape_radius,
        })
    }

    #[must_use]
    pub fn with_defaults(function: JuliaFunction) -> Self {
        Self {
            function,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Index of the first orbit value outside the escape radius, or `max_iterations`.
    ///
    /// The radius test runs on each value before the map is applied, so a start point
    /// already outside the radius yields 0.
    #[must_use]
    pub fn iterate(&self, start: Complex) -> u32 {
        let iterations = (0..self.max_iterations).try_fold(start, |z, iteration| {
            if z.magnitude() > self.escape_radius {
                ControlFlow::Break(iteration)
            } else {
                ControlFlow::Continue(self.function.apply(z))
            }
        });

        match iterations {
            ControlFlow::Break(iteration) => iteration,
            ControlFlow::Continue(_) => self.max_iterations,
        }
    }
}
