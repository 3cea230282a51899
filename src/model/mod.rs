mod producer;
mod skin;

pub use producer::{ProducerKind, UpgradeKind};
pub use skin::SkinId;
