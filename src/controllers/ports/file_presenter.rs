use std::path::Path;

use crate::core::data::canvas::Canvas;

pub trait FilePresenterPort {
    fn present(&self, canvas: &Canvas, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
