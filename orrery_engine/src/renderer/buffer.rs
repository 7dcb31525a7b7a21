/// Buffer trait and buffer descriptor

/// Descriptor for creating a vertex buffer
///
/// The buffer is created with `data` as its content and never written again;
/// its size is fixed to `data.len()`.
#[derive(Debug, Clone)]
pub struct BufferDesc {
    /// Debug name
    pub name: String,
    /// Initial content
    pub data: Vec<u8>,
}

/// Buffer resource trait
///
/// Implemented by backend-specific buffer types. The GPU buffer is destroyed
/// when the last reference is dropped.
pub trait Buffer: Send + Sync {
    /// Backend handle (never 0 for a live buffer)
    fn id(&self) -> u32;

    /// Size in bytes
    fn size(&self) -> u64;
}
