//! Escape-time rendering of a fixed catalog of Julia sets.
//!
//! A grid of complex-plane samples is iterated under `z -> z^p + c`, each escape count is
//! coloured by hue, and the resulting blocks are painted onto a [`RenderSink`].

mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::render::{CliRenderController, RenderSummary};
pub use crate::controllers::interactive::data::frame_data::FrameData;
pub use crate::controllers::interactive::errors::render_error::RenderError;
pub use crate::controllers::interactive::{RenderController, RenderEvent, RenderPresenterPort};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::sample_grid::ports::colour_map::ColourMap;
pub use crate::core::actions::sample_grid::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::sample_grid::ports::render_sink::RenderSink;
pub use crate::core::actions::sample_grid::sample_grid::sample_grid;
pub use crate::core::actions::sample_grid::sample_grid_parallel_rayon::{
    sample_grid_parallel_rayon, sample_grid_parallel_rayon_cancelable,
};
pub use crate::core::data::canvas::{Canvas, CanvasError};
pub use crate::core::data::colour::{Colour, Hsl};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_result::EscapeResult;
pub use crate::core::data::pixel_output::PixelOutput;
pub use crate::core::data::point::Point;
pub use crate::core::data::sample_grid::{MAX_SAMPLES, SampleGrid, SampleGridError};
pub use crate::core::data::screen_transform::ScreenTransform;
pub use crate::core::fractals::julia::algorithm::{
    DEFAULT_ESCAPE_RADIUS, DEFAULT_MAX_ITERATIONS, JuliaAlgorithm,
};
pub use crate::core::fractals::julia::colour_mapping::hue_cycle::JuliaHueCycle;
pub use crate::core::fractals::julia::errors::invalid_selection::InvalidSelectionError;
pub use crate::core::fractals::julia::errors::julia::JuliaError;
pub use crate::core::fractals::julia::function_catalog::{JULIA_FUNCTIONS, JuliaFunction, select_function};
pub use crate::core::fractals::julia::julia_config::JuliaConfig;
pub use crate::presenters::file::ppm::PpmFilePresenter;
