/// Texture trait and texture descriptor

/// Texture sampling filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Linear,
}

/// Texture coordinate wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    Repeat,
    ClampToEdge,
}

/// Descriptor for creating an RGBA8 2D texture
#[derive(Debug, Clone)]
pub struct TextureDesc {
    /// Debug name
    pub name: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Tightly packed RGBA8 pixels (`width * height * 4` bytes)
    pub data: Vec<u8>,
    /// Minification / magnification filter
    pub filter: FilterMode,
    /// Wrapping on both axes
    pub wrap: WrapMode,
    /// Generate a full mip chain after upload
    pub generate_mipmaps: bool,
}

impl TextureDesc {
    /// Linear filtering, repeat wrapping, mipmapped: the settings every
    /// body texture of the scene uses
    pub fn rgba8(name: impl Into<String>, width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            data,
            filter: FilterMode::Linear,
            wrap: WrapMode::Repeat,
            generate_mipmaps: true,
        }
    }

    /// Number of bytes `data` must contain
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

/// Texture information, including the sampler state fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub width: u32,
    pub height: u32,
    pub mip_levels: u32,
    pub filter: FilterMode,
    pub wrap: WrapMode,
}

/// Texture resource trait
///
/// Implemented by backend-specific texture types.
pub trait Texture: Send + Sync {
    /// Backend handle (never 0: handle 0 is the "no texture" binding)
    fn id(&self) -> u32;

    /// Dimensions, mip count and sampler state
    fn info(&self) -> &TextureInfo;
}
