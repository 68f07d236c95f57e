use crate::core::data::complex::Complex;

/// Outcome of iterating one sample point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    pub coordinate: Complex,
    pub iterations: u32,
}
