mod bitgrid;
mod board;
mod common;
mod config;
mod game;
mod grid;
mod logging;
mod ship;
mod targeting;
mod tracking;
mod ui;

pub use bitgrid::{BitGrid, BitGridError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use ship::*;
pub use targeting::*;
pub use tracking::*;
pub use ui::*;
