use std::f64::consts::PI;
use std::ops::Add;

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    /// Principal argument in (-π, π].
    #[must_use]
    pub fn argument(&self) -> f64 {
        let angle = self.imag.atan2(self.real);

        // atan2 yields -π for (-x, -0.0); fold it onto the closed end of the range
        if angle == -PI { PI } else { angle }
    }

    #[must_use]
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self {
            real: radius * angle.cos(),
            imag: radius * angle.sin(),
        }
    }

    /// Raises to a real power through the polar form, using the principal branch.
    ///
    /// Integer and fractional exponents go through the same formula. Zero maps to zero for
    /// every exponent because its angle is undefined.
    #[must_use]
    pub fn powf(&self, exponent: f64) -> Self {
        if self.real == 0.0 && self.imag == 0.0 {
            return Self::ZERO;
        }

        Self::from_polar(
            self.magnitude().powf(exponent),
            self.argument() * exponent,
        )
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}
