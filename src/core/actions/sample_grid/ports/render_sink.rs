use crate::core::data::colour::Hsl;

/// Surface receiving painted blocks. Out-of-range coordinates are the sink's to handle.
pub trait RenderSink {
    fn paint_block(&mut self, x: i32, y: i32, width: u32, height: u32, colour: Hsl);
}
