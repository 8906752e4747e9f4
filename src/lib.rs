pub mod app;
pub mod assets;
pub mod config;
pub mod render;

// Re-export commonly used types
pub use app::{FrameLoop, LoopState};
pub use assets::shaders::ShaderSource;
pub use config::AppConfig;
pub use render::mesh::TriangleMesh;
pub use render::pipeline::RenderPipeline;
pub use render::shaders::{ShaderError, ShaderKind, ShaderProgram};
