use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the engine. All of them are fatal to the current call;
/// nothing is retried or swallowed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,

    #[error("framerate must be at least 1 fps")]
    ZeroFramerate,

    #[error("({dx}, {dy}) is not one of the 8 neighbor offsets")]
    BadNeighborOffset { dx: i32, dy: i32 },

    #[error("point ({x}, {y}) lies outside the {cell_size}x{cell_size} cell area")]
    PointOutOfCell {
        x: usize,
        y: usize,
        cell_size: usize,
    },

    #[error("simulation is already running")]
    AlreadyRunning,

    #[error("simulation is not running")]
    NotRunning,
}
