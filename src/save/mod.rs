mod bridge;
mod codec;
mod model;
mod storage;

pub use bridge::{apply_save_data, save_data_from_state, state_from_save_data};
pub use codec::{
    decode_state, encode_state, export_to_base64, import_from_base64, load_from_json_string,
    save_to_json_string,
};
pub use model::{MIN_COMPATIBLE_VERSION, SAVE_VERSION, SaveData, SaveState};
pub use storage::{
    FileStorage, MemoryStorage, STORAGE_KEY, SaveStorage, discard_saved_game, load_or_initial,
    persist,
};
