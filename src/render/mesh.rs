use gl::types::*;
use std::mem;
use std::ptr;

/// One triangle in normalized device coordinates, two floats per vertex.
pub const TRIANGLE_VERTICES: [f32; 6] = [
    -0.5, -0.5, // bottom left
    0.0, 0.5, // top
    0.5, -0.5, // bottom right
];

/// GPU-side copy of the triangle: a static VBO whose layout is recorded in a
/// VAO. Both handles are deleted on drop.
pub struct TriangleMesh {
    vao: GLuint,
    vbo: GLuint,
}

impl TriangleMesh {
    /// Uploads the vertex array once and declares its layout: attribute slot
    /// 0 holds two tightly packed floats per vertex. Core profile contexts
    /// refuse to draw without a bound VAO, so the layout lives in one.
    pub fn new() -> Self {
        let mut vao = 0;
        let mut vbo = 0;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);

            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (TRIANGLE_VERTICES.len() * mem::size_of::<f32>()) as isize,
                TRIANGLE_VERTICES.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );

            gl::VertexAttribPointer(
                0,
                2,
                gl::FLOAT,
                gl::FALSE,
                (2 * mem::size_of::<f32>()) as GLsizei,
                ptr::null(),
            );
            gl::EnableVertexAttribArray(0);

            gl::BindVertexArray(0);
        }

        Self { vao, vbo }
    }

    /// Draws the three uploaded vertices as one triangle.
    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, Self::vertex_count());
            gl::BindVertexArray(0);
        }
    }

    fn vertex_count() -> GLsizei {
        (TRIANGLE_VERTICES.len() / 2) as GLsizei
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TriangleMesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
