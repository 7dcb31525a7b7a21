/// ResourceManager - table of GPU resources shared by the scene.
///
/// Geometries and textures are stored in slot maps and referenced by scene
/// nodes through copyable keys. The manager must outlive every scene graph
/// that holds its keys; nodes never own GPU resources.

use std::sync::{Arc, Mutex, MutexGuard};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use crate::error::Result;
use crate::{engine_bail, engine_err, engine_info};
use crate::renderer::{Renderer, Texture, TextureDesc};
use super::geometry::{Geometry, SphereMesh};
use super::material::{Material, MaterialDesc};

new_key_type! {
    /// Stable key of a geometry in the ResourceManager
    pub struct GeometryKey;
    /// Stable key of a texture in the ResourceManager
    pub struct TextureKey;
}

struct TextureEntry {
    name: String,
    texture: Arc<dyn Texture>,
}

pub struct ResourceManager {
    renderer: Arc<Mutex<dyn Renderer>>,
    geometries: SlotMap<GeometryKey, Geometry>,
    geometry_names: FxHashMap<String, GeometryKey>,
    textures: SlotMap<TextureKey, TextureEntry>,
    texture_names: FxHashMap<String, TextureKey>,
}

impl ResourceManager {
    pub fn new(renderer: Arc<Mutex<dyn Renderer>>) -> Self {
        Self {
            renderer,
            geometries: SlotMap::with_key(),
            geometry_names: FxHashMap::default(),
            textures: SlotMap::with_key(),
            texture_names: FxHashMap::default(),
        }
    }

    pub fn renderer(&self) -> &Arc<Mutex<dyn Renderer>> {
        &self.renderer
    }

    fn lock_renderer(&self) -> Result<MutexGuard<'_, dyn Renderer + 'static>> {
        self.renderer.lock()
            .map_err(|_| {
                engine_err!(@BackendError, "orrery::ResourceManager", "Renderer lock poisoned")
            })
    }

    // ===== GEOMETRY =====

    /// Tessellate and upload a unit sphere under `name`
    pub fn create_sphere_geometry(
        &mut self,
        name: &str,
        slices: u32,
        stacks: u32,
    ) -> Result<GeometryKey> {
        self.ensure_geometry_name_free(name)?;
        let mesh = SphereMesh::generate(slices, stacks);
        let geometry = {
            let mut renderer = self.lock_renderer()?;
            Geometry::upload_sphere(&mut *renderer, name, &mesh)?
        };
        engine_info!("orrery::ResourceManager",
            "Sphere geometry '{}' uploaded ({} vertices)", name, geometry.vertex_count());
        self.add_geometry(geometry)
    }

    /// Register an existing geometry under its own name
    pub fn add_geometry(&mut self, geometry: Geometry) -> Result<GeometryKey> {
        self.ensure_geometry_name_free(geometry.name())?;
        let name = geometry.name().to_string();
        let key = self.geometries.insert(geometry);
        self.geometry_names.insert(name, key);
        Ok(key)
    }

    fn ensure_geometry_name_free(&self, name: &str) -> Result<()> {
        if self.geometry_names.contains_key(name) {
            engine_bail!("orrery::ResourceManager", "Geometry '{}' already exists", name);
        }
        Ok(())
    }

    pub fn geometry(&self, key: GeometryKey) -> Option<&Geometry> {
        self.geometries.get(key)
    }

    pub fn geometry_key(&self, name: &str) -> Option<GeometryKey> {
        self.geometry_names.get(name).copied()
    }

    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }

    // ===== TEXTURE =====

    /// Upload a texture and register it under `desc.name`
    pub fn create_texture(&mut self, desc: TextureDesc) -> Result<TextureKey> {
        if self.texture_names.contains_key(&desc.name) {
            engine_bail!("orrery::ResourceManager", "Texture '{}' already exists", desc.name);
        }
        let name = desc.name.clone();
        let texture = self.lock_renderer()?.create_texture(desc)?;
        self.add_texture(&name, texture)
    }

    /// Register an already created GPU texture
    pub fn add_texture(&mut self, name: &str, texture: Arc<dyn Texture>) -> Result<TextureKey> {
        if self.texture_names.contains_key(name) {
            engine_bail!("orrery::ResourceManager", "Texture '{}' already exists", name);
        }
        let key = self.textures.insert(TextureEntry { name: name.to_string(), texture });
        self.texture_names.insert(name.to_string(), key);
        Ok(key)
    }

    pub fn texture(&self, key: TextureKey) -> Option<&Arc<dyn Texture>> {
        self.textures.get(key).map(|entry| &entry.texture)
    }

    pub fn texture_name(&self, key: TextureKey) -> Option<&str> {
        self.textures.get(key).map(|entry| entry.name.as_str())
    }

    pub fn texture_key(&self, name: &str) -> Option<TextureKey> {
        self.texture_names.get(name).copied()
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    // ===== MATERIAL =====

    /// Validate a material descriptor and resolve its texture name
    pub fn create_material(&self, desc: &MaterialDesc) -> Result<Material> {
        let material = Material::new(desc.color, desc.ka, desc.kd, desc.ks, desc.alpha)?;
        match &desc.texture {
            None => Ok(material),
            Some(name) => {
                let key = self.texture_key(name)
                    .ok_or_else(|| {
                        engine_err!("orrery::ResourceManager", "Texture '{}' not found", name)
                    })?;
                Ok(material.with_texture(key))
            }
        }
    }
}

#[cfg(test)]
#[path = "resource_manager_tests.rs"]
mod tests;
