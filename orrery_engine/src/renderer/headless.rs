/// Headless renderer backend (no GPU required)
///
/// Resources live in CPU memory and every command is recorded instead of
/// being submitted. Used by the demo to run the frame loop without a window
/// and by tests to inspect exactly what a traversal emitted.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::{engine_bail, engine_debug};
use crate::renderer::{
    Renderer, RendererStats, Buffer, Texture, TextureInfo, ShaderProgram, CommandList,
    BufferDesc, TextureDesc, ProgramDesc, PrimitiveTopology, UniformValue,
};

// ============================================================================
// Headless Buffer
// ============================================================================

pub struct HeadlessBuffer {
    id: u32,
    name: String,
    data: Vec<u8>,
}

impl HeadlessBuffer {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Buffer for HeadlessBuffer {
    fn id(&self) -> u32 {
        self.id
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

// ============================================================================
// Headless Texture
// ============================================================================

pub struct HeadlessTexture {
    id: u32,
    name: String,
    info: TextureInfo,
}

impl HeadlessTexture {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Texture for HeadlessTexture {
    fn id(&self) -> u32 {
        self.id
    }

    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

// ============================================================================
// Headless Program
// ============================================================================

/// Program whose interface is reflected from the GLSL declarations
pub struct HeadlessProgram {
    id: u32,
    name: String,
    attributes: FxHashMap<String, u32>,
    uniforms: FxHashMap<String, u32>,
}

impl HeadlessProgram {
    /// Build a program exposing exactly the given attributes and uniforms.
    ///
    /// Locations are assigned in declaration order, attributes and uniforms
    /// numbered independently.
    pub fn with_interface(id: u32, name: &str, attributes: &[&str], uniforms: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            attributes: attributes.iter().enumerate()
                .map(|(location, name)| (name.to_string(), location as u32))
                .collect(),
            uniforms: uniforms.iter().enumerate()
                .map(|(location, name)| (name.to_string(), location as u32))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the uniform bound at `location`
    pub fn uniform_name(&self, location: u32) -> Option<&str> {
        self.uniforms.iter()
            .find(|(_, &loc)| loc == location)
            .map(|(name, _)| name.as_str())
    }
}

impl ShaderProgram for HeadlessProgram {
    fn id(&self) -> u32 {
        self.id
    }

    fn attribute_location(&self, name: &str) -> Option<u32> {
        self.attributes.get(name).copied()
    }

    fn uniform_location(&self, name: &str) -> Option<u32> {
        self.uniforms.get(name).copied()
    }
}

/// Collect `in`/`attribute` (vertex stage only) and `uniform` declarations
/// from GLSL source, in order of appearance.
pub fn reflect_glsl(
    source: &str,
    vertex_stage: bool,
    attributes: &mut Vec<String>,
    uniforms: &mut Vec<String>,
) {
    for raw_line in source.lines() {
        let line = raw_line.split("//").next().unwrap_or("").trim();
        let line = match line.strip_prefix("layout") {
            Some(rest) => rest.split_once(')').map(|(_, decl)| decl.trim()).unwrap_or(""),
            None => line,
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 || !line.ends_with(';') {
            continue;
        }
        let name = tokens[tokens.len() - 1]
            .trim_end_matches(';')
            .split('[')
            .next()
            .unwrap_or("")
            .to_string();
        if name.is_empty() {
            continue;
        }
        let target = match tokens[0] {
            "uniform" => &mut *uniforms,
            "in" | "attribute" if vertex_stage => &mut *attributes,
            _ => continue,
        };
        if !target.contains(&name) {
            target.push(name);
        }
    }
}

// ============================================================================
// Headless Renderer
// ============================================================================

pub struct HeadlessRenderer {
    next_id: u32,
    stats: RendererStats,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            stats: RendererStats::default(),
        }
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HeadlessRenderer {
    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        if desc.data.is_empty() {
            engine_bail!(@BackendError, "orrery::HeadlessRenderer",
                "Buffer '{}' created with no data", desc.name);
        }
        self.stats.buffers += 1;
        self.stats.bytes_uploaded += desc.data.len() as u64;
        let buffer = HeadlessBuffer {
            id: self.allocate_id(),
            name: desc.name,
            data: desc.data,
        };
        engine_debug!("orrery::HeadlessRenderer",
            "Created buffer '{}' (id {})", buffer.name, buffer.id);
        Ok(Arc::new(buffer))
    }

    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        if desc.width == 0 || desc.height == 0 {
            engine_bail!("orrery::HeadlessRenderer",
                "Texture '{}' has zero size {}x{}", desc.name, desc.width, desc.height);
        }
        if desc.data.len() != desc.expected_len() {
            engine_bail!("orrery::HeadlessRenderer",
                "Texture '{}' expects {} bytes of RGBA8 data, got {}",
                desc.name, desc.expected_len(), desc.data.len());
        }
        let mip_levels = if desc.generate_mipmaps {
            32 - desc.width.max(desc.height).leading_zeros()
        } else {
            1
        };
        self.stats.textures += 1;
        self.stats.bytes_uploaded += desc.data.len() as u64;
        let texture = HeadlessTexture {
            id: self.allocate_id(),
            name: desc.name,
            info: TextureInfo {
                width: desc.width,
                height: desc.height,
                mip_levels,
                filter: desc.filter,
                wrap: desc.wrap,
            },
        };
        engine_debug!("orrery::HeadlessRenderer",
            "Created texture '{}' (id {})", texture.name, texture.id);
        Ok(Arc::new(texture))
    }

    fn create_program(&mut self, desc: ProgramDesc) -> Result<Arc<dyn ShaderProgram>> {
        if desc.vertex_source.trim().is_empty() || desc.fragment_source.trim().is_empty() {
            engine_bail!(@BackendError, "orrery::HeadlessRenderer",
                "Program '{}' has an empty shader stage", desc.name);
        }
        let mut attributes = Vec::new();
        let mut uniforms = Vec::new();
        reflect_glsl(&desc.vertex_source, true, &mut attributes, &mut uniforms);
        reflect_glsl(&desc.fragment_source, false, &mut attributes, &mut uniforms);

        let attribute_refs: Vec<&str> = attributes.iter().map(String::as_str).collect();
        let uniform_refs: Vec<&str> = uniforms.iter().map(String::as_str).collect();
        let id = self.allocate_id();
        self.stats.programs += 1;
        engine_debug!("orrery::HeadlessRenderer",
            "Linked program '{}' ({} attributes, {} uniforms)",
            desc.name, attributes.len(), uniforms.len());
        let program =
            HeadlessProgram::with_interface(id, &desc.name, &attribute_refs, &uniform_refs);
        Ok(Arc::new(program))
    }

    fn stats(&self) -> RendererStats {
        self.stats
    }
}

// ============================================================================
// Recording CommandList
// ============================================================================

/// One recorded command. Resources are identified by their backend handle.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCommand {
    UseProgram { program: u32 },
    BindVertexBuffer { buffer: u32 },
    SetVertexAttribute { location: u32, components: u32, byte_offset: u64 },
    BindTexture { unit: u32, texture: u32 },
    SetUniform { location: u32, value: UniformValue },
    Draw { topology: PrimitiveTopology, first_vertex: u32, vertex_count: u32 },
}

/// Pipeline state captured at the moment of a draw
#[derive(Debug, Clone)]
pub struct DrawRecord {
    pub program: u32,
    pub buffer: u32,
    pub texture: u32,
    pub attributes: FxHashMap<u32, (u32, u64)>,
    pub uniforms: FxHashMap<u32, UniformValue>,
    pub topology: PrimitiveTopology,
    pub first_vertex: u32,
    pub vertex_count: u32,
}

impl DrawRecord {
    pub fn uniform(&self, location: u32) -> Option<&UniformValue> {
        self.uniforms.get(&location)
    }
}

/// Command list that records commands and enforces immediate-mode ordering
/// (a program must be current before uniforms and draws, a buffer must be
/// bound before attribute pointers).
#[derive(Debug, Default)]
pub struct RecordingCommandList {
    commands: Vec<RecordedCommand>,
    current_program: Option<u32>,
    current_buffer: Option<u32>,
}

impl RecordingCommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[RecordedCommand] {
        &self.commands
    }

    pub fn draw_count(&self) -> usize {
        self.commands.iter()
            .filter(|cmd| matches!(cmd, RecordedCommand::Draw { .. }))
            .count()
    }

    /// Forget recorded commands and bound state (start of a new frame)
    pub fn clear(&mut self) {
        self.commands.clear();
        self.current_program = None;
        self.current_buffer = None;
    }

    /// Replay the command stream and snapshot the state seen by each draw
    pub fn draws(&self) -> Vec<DrawRecord> {
        let mut records = Vec::new();
        let mut program = 0;
        let mut buffer = 0;
        let mut texture = 0;
        let mut attributes = FxHashMap::default();
        let mut uniforms = FxHashMap::default();

        for cmd in &self.commands {
            match *cmd {
                RecordedCommand::UseProgram { program: id } => program = id,
                RecordedCommand::BindVertexBuffer { buffer: id } => buffer = id,
                RecordedCommand::SetVertexAttribute { location, components, byte_offset } => {
                    attributes.insert(location, (components, byte_offset));
                }
                RecordedCommand::BindTexture { texture: id, .. } => texture = id,
                RecordedCommand::SetUniform { location, value } => {
                    uniforms.insert(location, value);
                }
                RecordedCommand::Draw { topology, first_vertex, vertex_count } => {
                    records.push(DrawRecord {
                        program,
                        buffer,
                        texture,
                        attributes: attributes.clone(),
                        uniforms: uniforms.clone(),
                        topology,
                        first_vertex,
                        vertex_count,
                    });
                }
            }
        }
        records
    }
}

impl CommandList for RecordingCommandList {
    fn use_program(&mut self, program: &Arc<dyn ShaderProgram>) -> Result<()> {
        self.current_program = Some(program.id());
        self.commands.push(RecordedCommand::UseProgram { program: program.id() });
        Ok(())
    }

    fn bind_vertex_buffer(&mut self, buffer: &Arc<dyn Buffer>) -> Result<()> {
        self.current_buffer = Some(buffer.id());
        self.commands.push(RecordedCommand::BindVertexBuffer { buffer: buffer.id() });
        Ok(())
    }

    fn set_vertex_attribute(
        &mut self,
        location: u32,
        components: u32,
        byte_offset: u64,
    ) -> Result<()> {
        if self.current_buffer.is_none() {
            engine_bail!(@BackendError, "orrery::RecordingCommandList",
                "Attribute {} set with no vertex buffer bound", location);
        }
        self.commands.push(RecordedCommand::SetVertexAttribute {
            location,
            components,
            byte_offset,
        });
        Ok(())
    }

    fn bind_texture(&mut self, unit: u32, texture: Option<&Arc<dyn Texture>>) -> Result<()> {
        let texture = texture.map(|t| t.id()).unwrap_or(0);
        self.commands.push(RecordedCommand::BindTexture { unit, texture });
        Ok(())
    }

    fn set_uniform(&mut self, location: u32, value: UniformValue) -> Result<()> {
        if self.current_program.is_none() {
            engine_bail!(@BackendError, "orrery::RecordingCommandList",
                "Uniform {} set with no program in use", location);
        }
        self.commands.push(RecordedCommand::SetUniform { location, value });
        Ok(())
    }

    fn draw(
        &mut self,
        topology: PrimitiveTopology,
        first_vertex: u32,
        vertex_count: u32,
    ) -> Result<()> {
        if self.current_program.is_none() || self.current_buffer.is_none() {
            engine_bail!(@BackendError, "orrery::RecordingCommandList",
                "Draw issued without a program and vertex buffer bound");
        }
        self.commands.push(RecordedCommand::Draw { topology, first_vertex, vertex_count });
        Ok(())
    }
}

#[cfg(test)]
#[path = "headless_tests.rs"]
mod tests;
