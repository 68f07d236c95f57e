use crate::core::fractals::julia::function_catalog::{JuliaFunction, select_function};
use crate::core::fractals::julia::errors::invalid_selection::InvalidSelectionError;

/// A validated selection from the function catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub index: usize,
    pub function: JuliaFunction,
}

impl RenderRequest {
    pub fn select(index: usize) -> Result<Self, InvalidSelectionError> {
        Ok(Self {
            index,
            function: select_function(index)?,
        })
    }
}
