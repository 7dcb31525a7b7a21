/// Resource-level material type.
///
/// A Material is plain data: a base color, Phong-style coefficients
/// (ambient, diffuse, specular), an opacity and an optional texture.
/// Materials are owned by scene nodes by value; the texture is a key into
/// the [`ResourceManager`](crate::resource::ResourceManager) texture table.

use glam::{Vec3, Vec4};
use crate::error::Result;
use crate::engine_bail;
use super::resource_manager::TextureKey;

/// Material creation descriptor
///
/// The texture is referenced by name and resolved by
/// `ResourceManager::create_material`.
#[derive(Debug, Clone)]
pub struct MaterialDesc {
    pub color: Vec3,
    pub ka: f32,
    pub kd: f32,
    pub ks: f32,
    pub alpha: f32,
    pub texture: Option<String>,
}

impl MaterialDesc {
    /// Self-lit body (stars, sky sphere): ambient only, white base color
    pub fn emissive(texture: &str) -> Self {
        Self {
            color: Vec3::ONE,
            ka: 1.0,
            kd: 0.0,
            ks: 0.0,
            alpha: 1.0,
            texture: Some(texture.to_string()),
        }
    }

    /// Lit body: black base color, the texture provides the albedo
    pub fn lit(texture: &str, ka: f32, kd: f32, ks: f32) -> Self {
        Self {
            color: Vec3::ZERO,
            ka,
            kd,
            ks,
            alpha: 1.0,
            texture: Some(texture.to_string()),
        }
    }
}

/// Material resource
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    color: Vec3,
    ka: f32,
    kd: f32,
    ks: f32,
    alpha: f32,
    texture: Option<TextureKey>,
}

impl Material {
    /// Create an untextured material
    ///
    /// # Errors
    ///
    /// Coefficients must be finite and non-negative, alpha within [0, 1].
    pub fn new(color: Vec3, ka: f32, kd: f32, ks: f32, alpha: f32) -> Result<Self> {
        for (name, value) in [("ka", ka), ("kd", kd), ("ks", ks)] {
            if !value.is_finite() || value < 0.0 {
                engine_bail!("orrery::Material",
                    "Coefficient {} must be >= 0 (got {})", name, value);
            }
        }
        if !(0.0..=1.0).contains(&alpha) {
            engine_bail!("orrery::Material", "Alpha must be within [0, 1] (got {})", alpha);
        }
        if !color.is_finite() {
            engine_bail!("orrery::Material", "Color must be finite (got {:?})", color);
        }
        Ok(Self { color, ka, kd, ks, alpha, texture: None })
    }

    /// Same material sampling `texture`
    pub fn with_texture(mut self, texture: TextureKey) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn ka(&self) -> f32 {
        self.ka
    }

    pub fn kd(&self) -> f32 {
        self.kd
    }

    pub fn ks(&self) -> f32 {
        self.ks
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// `None` is the untextured sentinel (texture handle 0)
    pub fn texture(&self) -> Option<TextureKey> {
        self.texture
    }

    /// (ka, kd, ks, alpha) packed for a single vec4 uniform
    pub fn packed_constants(&self) -> Vec4 {
        Vec4::new(self.ka, self.kd, self.ks, self.alpha)
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
