pub mod console;
pub mod core;
pub mod format;
pub mod model;
pub mod save;

pub use console::{Console, ConsoleCommand, ConsoleError};
pub use crate::core::{GameState, GameStore, ResourceStore, formulas};
pub use format::format_number;
pub use model::{ProducerKind, SkinId, UpgradeKind};
pub use save::{
    FileStorage, MemoryStorage, SaveData, SaveState, SaveStorage, STORAGE_KEY, apply_save_data,
    decode_state, discard_saved_game, encode_state, export_to_base64, import_from_base64, load_from_json_string,
    load_or_initial, persist, save_data_from_state, save_to_json_string, state_from_save_data,
};
