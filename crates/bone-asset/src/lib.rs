//! Static model data shared by every bone proxy.
//!
//! Everything in this crate is produced by the model loader and handed
//! to the proxies read-only: bone descriptors, resource keys pointing
//! into the model's asset set, and the skins a player rig can wear.
//!
pub mod bone;
pub mod index;
pub mod skin;
pub mod transform;
