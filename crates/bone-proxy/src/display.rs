use bone_protocol::metadata::MetadataUpdate;

/// Write side of the rendering layer for one display entity.
///
/// Every call is one atomic batch: the rendering layer must never expose
/// part of an update. Writes are fire-and-forget.
pub trait DisplayHandle {
    fn apply(&mut self, update: MetadataUpdate);
}

// Records every batch, in order
impl DisplayHandle for Vec<MetadataUpdate> {
    fn apply(&mut self, update: MetadataUpdate) {
        self.push(update);
    }
}
