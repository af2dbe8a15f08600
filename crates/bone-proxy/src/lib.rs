//! Keeps a display entity in sync with one bone of an animated model.
//!
//! A [`proxy::BoneProxy`] receives the bone's local transform once per
//! tick, folds in whatever [`modifier`]s are attached to it, and pushes
//! the result to the rendering layer through a [`display::DisplayHandle`].
//! Writes are batched and suppressed entirely when nothing changed.
//!
pub mod config;
pub mod display;
pub mod error;
pub mod modifier;
pub mod proxy;
pub mod state;

pub use bone_asset as asset;
pub use bone_protocol as protocol;
