mod grid;
mod raster;
mod scheduler;
mod topology;

pub use grid::{Automaton, Builder, Cell, IdMode};
pub use raster::Raster;
pub use scheduler::{Rule, Simulation};
pub use topology::Direction;
