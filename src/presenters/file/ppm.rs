use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::canvas::Canvas;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, canvas: &Canvas, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = BufWriter::new(std::fs::File::create(filepath)?);
        write_ppm(&mut file, canvas)?;
        file.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

pub(crate) fn write_ppm<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", canvas.width(), canvas.height())?;
    writeln!(out, "255")?;
    out.write_all(canvas.buffer())
}
