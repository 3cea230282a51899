pub mod formulas;
mod game_state;
mod resource_store;
mod store;

pub use game_state::GameState;
pub use resource_store::ResourceStore;
pub use store::GameStore;
