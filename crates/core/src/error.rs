use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeError {
    #[error("Terminal size query failed: {0}")]
    TerminalSize(#[from] std::io::Error),

    #[error("Grid has no cells ({width}x{height})")]
    EmptyGrid { width: u16, height: u16 },

    #[error("Pattern '{pattern}' does not fit a {width}x{height} grid")]
    PatternOutOfBounds {
        pattern: &'static str,
        width: u16,
        height: u16,
    },
}

pub type Result<T> = std::result::Result<T, LifeError>;
