pub mod app_coordinator;
pub mod app_implementation;
pub mod app_state;
pub mod components;
pub mod fonts;
pub mod mappers;
pub mod state;

pub use app_state::*;
pub use components::*;
pub use mappers::*;
