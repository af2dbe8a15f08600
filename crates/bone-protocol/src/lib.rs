//! Values written to the rendering layer by a bone proxy.
pub mod color;
pub mod item;
pub mod metadata;
