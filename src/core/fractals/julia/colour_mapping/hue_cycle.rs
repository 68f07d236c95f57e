use crate::core::actions::sample_grid::ports::colour_map::ColourMap;
use crate::core::data::colour::Hsl;

pub const HUE_DEGREES_PER_ITERATION: f64 = 10.0;
const SATURATION: f64 = 100.0;
const LIGHTNESS: f64 = 50.0;

/// Fully saturated mid-lightness colour whose hue advances ten degrees per iteration.
///
/// The hue is not wrapped here; [`Hsl::to_rgb`] reads it modulo 360.
#[derive(Debug, Default, Clone, Copy)]
pub struct JuliaHueCycle;

impl ColourMap<u32> for JuliaHueCycle {
    fn map(&self, iterations: u32) -> Hsl {
        Hsl::new(
            f64::from(iterations) * HUE_DEGREES_PER_ITERATION,
            SATURATION,
            LIGHTNESS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_is_ten_times_iterations() {
        let mapper = JuliaHueCycle;

        for iterations in 0..=256 {
            assert_eq!(mapper.map(iterations).hue, f64::from(iterations) * 10.0);
        }
    }

    #[test]
    fn test_saturation_and_lightness_are_fixed() {
        let colour = JuliaHueCycle.map(17);

        assert_eq!(colour.saturation, 100.0);
        assert_eq!(colour.lightness, 50.0);
    }

    #[test]
    fn test_hue_beyond_360_is_not_clamped() {
        let colour = JuliaHueCycle.map(40);

        assert_eq!(colour.hue, 400.0);
        assert_eq!(colour.to_rgb(), JuliaHueCycle.map(4).to_rgb());
    }
}
