use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;

pub trait FractalAlgorithm {
    fn compute(&self, point: Complex) -> EscapeResult;
}
