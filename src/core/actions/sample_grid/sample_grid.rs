use log::debug;

use crate::core::actions::sample_grid::ports::colour_map::ColourMap;
use crate::core::actions::sample_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::sample_grid::ports::render_sink::RenderSink;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_output::PixelOutput;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::data::screen_transform::ScreenTransform;

pub(crate) fn shade_sample<Alg, CMap>(
    point: Complex,
    algorithm: &Alg,
    colour_map: &CMap,
    screen: &ScreenTransform,
) -> PixelOutput
where
    Alg: FractalAlgorithm + ?Sized,
    CMap: ColourMap<u32> + ?Sized,
{
    let result = algorithm.compute(point);

    PixelOutput {
        screen: screen.to_screen(result.coordinate),
        colour: colour_map.map(result.iterations),
    }
}

pub(crate) fn paint<S: RenderSink + ?Sized>(sink: &mut S, output: PixelOutput, block_size: u32) {
    sink.paint_block(
        output.screen.x,
        output.screen.y,
        block_size,
        block_size,
        output.colour,
    );
}

/// Walks every grid sample on the calling thread, real axis outermost, painting each one.
pub fn sample_grid<Alg, CMap, S>(
    grid: &SampleGrid,
    algorithm: &Alg,
    colour_map: &CMap,
    screen: &ScreenTransform,
    sink: &mut S,
) where
    Alg: FractalAlgorithm + ?Sized,
    CMap: ColourMap<u32> + ?Sized,
    S: RenderSink + ?Sized,
{
    debug!(
        "sampling {}x{} grid serially",
        grid.real_count(),
        grid.imag_count()
    );

    for point in grid.coordinates() {
        let output = shade_sample(point, algorithm, colour_map, screen);
        paint(sink, output, screen.block_size);
    }
}
