use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSelectionError {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for InvalidSelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "function index {} is out of range, expected 0..={}",
            self.index,
            self.len.saturating_sub(1)
        )
    }
}

impl Error for InvalidSelectionError {}
