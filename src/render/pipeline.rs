use crate::render::mesh::TriangleMesh;
use crate::render::shaders::ShaderProgram;

/// Everything one frame needs, held as explicit values instead of relying on
/// whatever program or buffer happens to be bound.
pub struct RenderPipeline {
    shader: ShaderProgram,
    mesh: TriangleMesh,
    clear_color: [f32; 4],
}

impl RenderPipeline {
    pub fn new(shader: ShaderProgram, mesh: TriangleMesh, clear_color: [f32; 4]) -> Self {
        Self {
            shader,
            mesh,
            clear_color,
        }
    }

    /// Renders one frame in fixed order: clear the color target, bind the
    /// program, draw the triangle. Presenting the frame belongs to the
    /// surface owner.
    pub fn draw_frame(&self) {
        let [r, g, b, a] = self.clear_color;
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        self.shader.set_used();
        self.mesh.draw();
    }
}
