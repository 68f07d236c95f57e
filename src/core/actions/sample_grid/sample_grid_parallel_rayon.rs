use log::debug;
use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::sample_grid::ports::colour_map::ColourMap;
use crate::core::actions::sample_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::sample_grid::ports::render_sink::RenderSink;
use crate::core::actions::sample_grid::sample_grid::{paint, shade_sample};
use crate::core::data::complex::Complex;
use crate::core::data::pixel_output::PixelOutput;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::data::screen_transform::ScreenTransform;

/// Samples computed between cancellation polls within one column.
pub const SAMPLES_PER_CANCEL_CHECK: usize = 256;

/// Walks the grid using rayon's work-stealing scheduler, one task per real-axis column.
///
/// Blocks reach the sink in the same order as [`sample_grid`](super::sample_grid::sample_grid).
/// For cancel-aware walks, use [`sample_grid_parallel_rayon_cancelable`].
pub fn sample_grid_parallel_rayon<Alg, CMap, S>(
    grid: &SampleGrid,
    algorithm: &Alg,
    colour_map: &CMap,
    screen: &ScreenTransform,
    sink: &mut S,
) where
    Alg: FractalAlgorithm + Sync + ?Sized,
    CMap: ColourMap<u32> + Sync + ?Sized,
    S: RenderSink + ?Sized,
{
    // NeverCancel never cancels, so the walk always completes
    let _ = sample_grid_parallel_rayon_cancelable(
        grid,
        algorithm,
        colour_map,
        screen,
        sink,
        &NeverCancel,
    );
}

/// Parallel walk that stops early once `cancel` reports cancellation.
///
/// The token is polled at the start of each column and every
/// [`SAMPLES_PER_CANCEL_CHECK`] samples within it. All samples are computed before any
/// block is painted, so a cancelled walk leaves the sink untouched.
pub fn sample_grid_parallel_rayon_cancelable<Alg, CMap, S, C>(
    grid: &SampleGrid,
    algorithm: &Alg,
    colour_map: &CMap,
    screen: &ScreenTransform,
    sink: &mut S,
    cancel: &C,
) -> Result<(), Cancelled>
where
    Alg: FractalAlgorithm + Sync + ?Sized,
    CMap: ColourMap<u32> + Sync + ?Sized,
    S: RenderSink + ?Sized,
    C: CancelToken,
{
    let column_height = grid.imag_count();

    debug!(
        "sampling {}x{} grid with rayon",
        grid.real_count(),
        column_height
    );

    let columns: Vec<Vec<PixelOutput>> = (0..grid.real_count())
        .into_par_iter()
        .map(|i| {
            let real = grid.real_at(i);
            let mut column = Vec::with_capacity(column_height);

            for j in 0..column_height {
                if j % SAMPLES_PER_CANCEL_CHECK == 0 {
                    cancel.check()?;
                }

                let point = Complex::new(real, grid.imag_at(j));
                column.push(shade_sample(point, algorithm, colour_map, screen));
            }

            Ok(column)
        })
        .collect::<Result<_, Cancelled>>()?;

    for output in columns.into_iter().flatten() {
        paint(sink, output, screen.block_size);
    }

    Ok(())
}
