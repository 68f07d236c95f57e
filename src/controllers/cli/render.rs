use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::sample_grid::sample_grid::sample_grid;
use crate::core::actions::sample_grid::sample_grid_parallel_rayon::sample_grid_parallel_rayon;
use crate::core::data::canvas::Canvas;
use crate::core::fractals::julia::colour_mapping::hue_cycle::JuliaHueCycle;
use crate::core::fractals::julia::function_catalog::{JuliaFunction, select_function};
use crate::core::fractals::julia::julia_config::JuliaConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSummary {
    pub function: JuliaFunction,
    pub samples: usize,
    pub duration: Duration,
}

/// Renders one catalog selection at a time into a canvas and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    config: JuliaConfig,
    canvas_size: (u32, u32),
    parallel: bool,
    canvas: Option<Canvas>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, config: JuliaConfig, canvas_size: (u32, u32), parallel: bool) -> Self {
        Self {
            presenter,
            config,
            canvas_size,
            parallel,
            canvas: None,
        }
    }

    /// Validates `index`, then walks the whole grid. Timing wraps the walk only.
    pub fn generate(&mut self, index: usize) -> Result<RenderSummary, Box<dyn std::error::Error>> {
        let function = select_function(index)?;
        let algorithm = self.config.build_algorithm(function)?;
        let (width, height) = self.canvas_size;
        let mut canvas = Canvas::new(width, height)?;
        let grid = &self.config.grid;

        info!("Rendering f(z) = {}", function);
        debug!(
            "grid {}x{} step {}, max iterations {}, parallel {}",
            grid.real_count(),
            grid.imag_count(),
            grid.step(),
            algorithm.max_iterations(),
            self.parallel
        );

        let start = Instant::now();
        if self.parallel {
            sample_grid_parallel_rayon(
                grid,
                &algorithm,
                &JuliaHueCycle,
                &self.config.screen,
                &mut canvas,
            );
        } else {
            sample_grid(grid, &algorithm, &JuliaHueCycle, &self.config.screen, &mut canvas);
        }
        let duration = start.elapsed();

        self.canvas = Some(canvas);

        Ok(RenderSummary {
            function,
            samples: grid.sample_count(),
            duration,
        })
    }

    #[must_use]
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(canvas) = &self.canvas {
            self.presenter.present(canvas, filepath)?
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Hsl;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::data::sample_grid::SampleGrid;
    use crate::core::fractals::julia::errors::invalid_selection::InvalidSelectionError;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, canvas: &Canvas, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), canvas.buffer_size()));
            Ok(())
        }
    }

    fn small_config() -> JuliaConfig {
        JuliaConfig {
            grid: SampleGrid::new(Complex::new(-1.2, -1.2), Complex::new(1.2, 1.2), 0.1).unwrap(),
            ..JuliaConfig::default()
        }
    }

    #[test]
    fn test_generate_renders_selected_function() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliRenderController::new(&presenter, small_config(), (600, 600), false);

        let summary = controller.generate(0).unwrap();

        assert_eq!(summary.function.to_string(), "z^2 + 0.279");
        assert_eq!(summary.samples, 25 * 25);
        let canvas = controller.canvas().expect("canvas after generate");
        // origin escapes after 17 iterations: hue 170
        assert_eq!(
            canvas.pixel(Point { x: 300, y: 300 }),
            Some(Hsl::new(170.0, 100.0, 50.0).to_rgb())
        );
    }

    #[test]
    fn test_serial_and_parallel_produce_identical_canvases() {
        let presenter = RecordingPresenter::default();
        let mut serial = CliRenderController::new(&presenter, small_config(), (600, 600), false);
        let mut parallel = CliRenderController::new(&presenter, small_config(), (600, 600), true);

        for index in 0..5 {
            serial.generate(index).unwrap();
            parallel.generate(index).unwrap();

            assert_eq!(serial.canvas(), parallel.canvas());
        }
    }

    #[test]
    fn test_invalid_index_fails_before_walk() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliRenderController::new(&presenter, small_config(), (600, 600), false);

        let err = controller.generate(9).unwrap_err();

        assert_eq!(
            err.downcast_ref::<InvalidSelectionError>(),
            Some(&InvalidSelectionError { index: 9, len: 5 })
        );
        assert!(controller.canvas().is_none());
    }

    #[test]
    fn test_write_without_generate_is_noop() {
        let presenter = RecordingPresenter::default();
        let controller = CliRenderController::new(&presenter, small_config(), (600, 600), false);

        controller.write("unused.ppm").unwrap();

        assert!(presenter.written.borrow().is_empty());
    }

    #[test]
    fn test_write_presents_generated_canvas() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliRenderController::new(&presenter, small_config(), (60, 40), true);

        controller.generate(4).unwrap();
        controller.write("julia.ppm").unwrap();

        assert_eq!(
            presenter.written.borrow().as_slice(),
            &[(PathBuf::from("julia.ppm"), 60 * 40 * 3)]
        );
    }
}
