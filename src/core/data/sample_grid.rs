use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

// Tolerates the representation error of spans like 2.4 / 0.005
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Largest grid a walk will accept: 8192 x 8192 samples.
pub const MAX_SAMPLES: usize = 1 << 26;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SampleGridError {
    NonPositiveStep { step: f64 },
    InvertedBounds { min: Complex, max: Complex },
    TooManySamples { step: f64, limit: usize },
}

impl fmt::Display for SampleGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveStep { step } => {
                write!(f, "sample grid step must be positive and finite: {}", step)
            }
            Self::InvertedBounds { min, max } => {
                write!(
                    f,
                    "sample grid bounds are inverted: min ({}, {}) max ({}, {})",
                    min.real, min.imag, max.real, max.imag
                )
            }
            Self::TooManySamples { step, limit } => {
                write!(
                    f,
                    "sample grid step {} yields more than {} samples",
                    step, limit
                )
            }
        }
    }
}

impl Error for SampleGridError {}

/// Rectangular region of the complex plane sampled at a uniform step, bounds inclusive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleGrid {
    min: Complex,
    max: Complex,
    step: f64,
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self {
            min: Complex::new(-1.2, -1.2),
            max: Complex::new(1.2, 1.2),
            step: 0.005,
        }
    }
}

impl SampleGrid {
    pub fn new(min: Complex, max: Complex, step: f64) -> Result<Self, SampleGridError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(SampleGridError::NonPositiveStep { step });
        }

        if max.real < min.real || max.imag < min.imag {
            return Err(SampleGridError::InvertedBounds { min, max });
        }

        let real_samples = whole_steps(min.real, max.real, step) + 1.0;
        let imag_samples = whole_steps(min.imag, max.imag, step) + 1.0;

        // also rejects NaN or infinite bounds, whose step counts are not finite
        if !(real_samples * imag_samples <= MAX_SAMPLES as f64) {
            return Err(SampleGridError::TooManySamples {
                step,
                limit: MAX_SAMPLES,
            });
        }

        Ok(Self { min, max, step })
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn with_step(self, step: f64) -> Result<Self, SampleGridError> {
        Self::new(self.min, self.max, step)
    }

    #[must_use]
    pub fn real_count(&self) -> usize {
        axis_count(self.min.real, self.max.real, self.step)
    }

    #[must_use]
    pub fn imag_count(&self) -> usize {
        axis_count(self.min.imag, self.max.imag, self.step)
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.real_count() * self.imag_count()
    }

    /// Real-axis value of column `index`.
    #[must_use]
    pub fn real_at(&self, index: usize) -> f64 {
        self.min.real + index as f64 * self.step
    }

    /// Imaginary-axis value of row `index`.
    #[must_use]
    pub fn imag_at(&self, index: usize) -> f64 {
        self.min.imag + index as f64 * self.step
    }

    /// All sample coordinates, real axis outermost.
    pub fn coordinates(&self) -> impl Iterator<Item = Complex> + '_ {
        (0..self.real_count()).flat_map(move |i| {
            let real = self.real_at(i);
            (0..self.imag_count()).map(move |j| Complex::new(real, self.imag_at(j)))
        })
    }
}

fn whole_steps(min: f64, max: f64, step: f64) -> f64 {
    let steps = (max - min) / step;
    let rounded = steps.round();

    if (steps - rounded).abs() < STEP_COUNT_TOLERANCE {
        rounded
    } else {
        steps.floor()
    }
}

// `new` bounds the product of both counts by MAX_SAMPLES, so neither conversion can overflow
fn axis_count(min: f64, max: f64, step: f64) -> usize {
    whole_steps(min, max, step) as usize + 1
}
