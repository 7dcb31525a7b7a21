/// Shader program trait and program descriptor

/// Descriptor for compiling and linking a program
#[derive(Debug, Clone)]
pub struct ProgramDesc {
    /// Debug name
    pub name: String,
    /// Vertex stage source
    pub vertex_source: String,
    /// Fragment stage source
    pub fragment_source: String,
}

/// Linked shader program
///
/// Exposes named vertex attributes and uniforms. Lookups are expected to be
/// done once after link; the returned locations stay valid for the lifetime
/// of the program.
pub trait ShaderProgram: Send + Sync {
    /// Backend handle
    fn id(&self) -> u32;

    /// Location of a vertex attribute, `None` if the program does not use it
    fn attribute_location(&self, name: &str) -> Option<u32>;

    /// Location of a uniform, `None` if the program does not use it
    fn uniform_location(&self, name: &str) -> Option<u32>;
}
