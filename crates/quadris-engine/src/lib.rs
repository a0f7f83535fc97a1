pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece cannot occupy the target cells")]
pub struct CollisionError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("spawn cell is already occupied")]
pub struct SpawnBlockedError;
