use serde::{Deserialize, Serialize};

/// Startup parameters for the window, the GL context, and the shader asset.
/// Built once in `main` and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Minimum core-profile context version to request.
    pub gl_version: (u8, u8),
    pub shader_path: String,
    pub clear_color: [f32; 4],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Hello Triangle".to_string(),
            window_width: 640,
            window_height: 480,
            gl_version: (3, 3),
            shader_path: "res/shaders/basic.shader".to_string(),
            clear_color: [0.2, 0.3, 0.3, 1.0],
        }
    }
}
