use thiserror::Error;

use crate::direction::Direction;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scroll step must be a positive number, got {0}")]
    InvalidStep(f64),

    #[error("Edge threshold for {direction} must be non-negative, got {value}")]
    InvalidThreshold { direction: Direction, value: f64 },

    #[error("Unknown direction: {0}")]
    InvalidDirection(String),

    #[error("Unknown tracking mode: {0} (expected \"mousemove\" or \"drag\")")]
    InvalidTrackingMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
