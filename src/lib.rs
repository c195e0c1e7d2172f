#![warn(clippy::all)]

mod automaton;
mod color;
mod error;
mod gui;

pub use automaton::{Automaton, Builder, Cell, Direction, IdMode, Raster, Rule, Simulation};
pub use color::Color;
pub use error::{Error, Result};
pub use gui::Viewer;
