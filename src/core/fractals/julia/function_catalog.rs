use crate::core::data::complex::Complex;
use crate::core::fractals::julia::errors::invalid_selection::InvalidSelectionError;
use std::fmt;

/// The map `z -> z^power + constant`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaFunction {
    pub power: f64,
    pub constant: Complex,
}

impl JuliaFunction {
    #[must_use]
    pub const fn new(power: f64, constant: Complex) -> Self {
        Self { power, constant }
    }

    #[must_use]
    pub fn apply(&self, z: Complex) -> Complex {
        z.powf(self.power) + self.constant
    }
}

impl fmt::Display for JuliaFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Complex { real, imag } = self.constant;

        write!(f, "z^{} + {}", self.power, real)?;

        if imag > 0.0 {
            write!(f, " + {}i", imag)
        } else if imag < 0.0 {
            write!(f, " - {}i", -imag)
        } else {
            Ok(())
        }
    }
}

pub const JULIA_FUNCTIONS: [JuliaFunction; 5] = [
    JuliaFunction::new(2.0, Complex::new(0.279, 0.0)),
    JuliaFunction::new(3.0, Complex::new(0.4, 0.0)),
    JuliaFunction::new(6.0, Complex::new(0.59, 0.0)),
    JuliaFunction::new(2.0, Complex::new(0.279, 0.467)),
    JuliaFunction::new(2.0, Complex::new(0.285, -0.01)),
];

pub fn select_function(index: usize) -> Result<JuliaFunction, InvalidSelectionError> {
    JULIA_FUNCTIONS
        .get(index)
        .copied()
        .ok_or(InvalidSelectionError {
            index,
            len: JULIA_FUNCTIONS.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_holds_five_functions_in_order() {
        let expected = [
            (2.0, 0.279, 0.0),
            (3.0, 0.4, 0.0),
            (6.0, 0.59, 0.0),
            (2.0, 0.279, 0.467),
            (2.0, 0.285, -0.01),
        ];

        assert_eq!(JULIA_FUNCTIONS.len(), expected.len());

        for (index, (power, real, imag)) in expected.into_iter().enumerate() {
            let function = select_function(index).unwrap();
            assert_eq!(function.power, power);
            assert_eq!(function.constant, Complex::new(real, imag));
        }
    }

    #[test]
    fn test_select_out_of_range_fails() {
        assert_eq!(
            select_function(5),
            Err(InvalidSelectionError { index: 5, len: 5 })
        );
        assert!(select_function(usize::MAX).is_err());
    }

    #[test]
    fn test_invalid_selection_message() {
        let err = select_function(7).unwrap_err();

        assert_eq!(err.to_string(), "function index 7 is out of range, expected 0..=4");
    }

    #[test]
    fn test_apply_squares_and_adds_constant() {
        let function = select_function(0).unwrap();
        let result = function.apply(Complex::ZERO);

        assert_eq!(result, Complex::new(0.279, 0.0));
    }

    #[test]
    fn test_display_matches_viewer_labels() {
        let labels: Vec<String> = JULIA_FUNCTIONS.iter().map(ToString::to_string).collect();

        assert_eq!(
            labels,
            vec![
                "z^2 + 0.279",
                "z^3 + 0.4",
                "z^6 + 0.59",
                "z^2 + 0.279 + 0.467i",
                "z^2 + 0.285 - 0.01i",
            ]
        );
    }
}
