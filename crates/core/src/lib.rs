pub mod config;
pub mod mapgen;
pub mod sim;
pub mod state;
pub mod types;

pub use config::SimConfig;
pub use sim::{Simulation, TickReport};
pub use state::{Grid, Guard, GuardState, Player, SearchStage, World};
pub use types::*;
