//! Static vertex buffers and their attribute layout.
//!
//! The demos all draw from one interleaved float buffer uploaded once; this
//! wraps the VAO/VBO(/EBO) setup and the draw call.

use anyhow::{Result, anyhow};
use glow::HasContext;

/// Interleaved per-vertex float attributes, in location order.
///
/// `VertexLayout::position_color()` describes `location 0 = vec3 position,
/// location 1 = vec3 color` and so on. Stride and offsets are derived, never
/// written by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    attribute_sizes: Vec<i32>,
}

impl VertexLayout {
    pub fn new(attribute_sizes: &[i32]) -> Self {
        debug_assert!(attribute_sizes.iter().all(|&size| (1..=4).contains(&size)));
        Self {
            attribute_sizes: attribute_sizes.to_vec(),
        }
    }

    /// vec3 position.
    pub fn position() -> Self {
        Self::new(&[3])
    }

    /// vec3 position + vec3 color.
    pub fn position_color() -> Self {
        Self::new(&[3, 3])
    }

    /// vec3 position + vec3 color + vec2 texture coordinates.
    pub fn position_color_uv() -> Self {
        Self::new(&[3, 3, 2])
    }

    /// vec3 position + vec2 texture coordinates.
    pub fn position_uv() -> Self {
        Self::new(&[3, 2])
    }

    /// Floats per vertex.
    pub fn stride_floats(&self) -> i32 {
        self.attribute_sizes.iter().sum()
    }

    /// Bytes per vertex.
    pub fn stride_bytes(&self) -> i32 {
        self.stride_floats() * size_of::<f32>() as i32
    }

    /// Byte offset of the attribute at `location`.
    pub fn byte_offset(&self, location: usize) -> i32 {
        self.attribute_sizes[..location].iter().sum::<i32>() * size_of::<f32>() as i32
    }

    /// Number of whole vertices a buffer of `floats` values holds.
    pub fn vertex_count(&self, floats: usize) -> i32 {
        debug_assert_eq!(floats % self.stride_floats() as usize, 0);
        (floats / self.stride_floats() as usize) as i32
    }

    fn attributes(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.attribute_sizes.iter().copied().enumerate()
    }
}

/// A VAO with its vertex buffer, an optional index buffer, and a draw count.
///
/// Draws with TRIANGLES topology, which is all the demos use.
pub struct Mesh {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
    count: i32,
}

impl Mesh {
    /// Uploads `vertices` once (STATIC_DRAW) and records the attribute
    /// layout in a fresh VAO.
    pub fn new(gl: &glow::Context, vertices: &[f32], layout: &VertexLayout) -> Result<Self> {
        Self::build(gl, vertices, None, layout)
    }

    /// Like [`new`](Self::new), with an index buffer; `draw` then issues an
    /// indexed draw over `indices.len()` elements.
    pub fn with_indices(
        gl: &glow::Context,
        vertices: &[f32],
        indices: &[u32],
        layout: &VertexLayout,
    ) -> Result<Self> {
        Self::build(gl, vertices, Some(indices), layout)
    }

    fn build(
        gl: &glow::Context,
        vertices: &[f32],
        indices: Option<&[u32]>,
        layout: &VertexLayout,
    ) -> Result<Self> {
        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(|e| anyhow!("failed to create vertex array: {e}"))?;
            let vbo = gl
                .create_buffer()
                .map_err(|e| anyhow!("failed to create vertex buffer: {e}"))?;

            gl.bind_vertex_array(Some(vao));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            let ebo = match indices {
                Some(indices) => {
                    let ebo = gl
                        .create_buffer()
                        .map_err(|e| anyhow!("failed to create index buffer: {e}"))?;
                    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                    gl.buffer_data_u8_slice(
                        glow::ELEMENT_ARRAY_BUFFER,
                        bytemuck::cast_slice(indices),
                        glow::STATIC_DRAW,
                    );
                    Some(ebo)
                }
                None => None,
            };

            let stride = layout.stride_bytes();
            for (location, size) in layout.attributes() {
                gl.vertex_attrib_pointer_f32(
                    location as u32,
                    size,
                    glow::FLOAT,
                    false,
                    stride,
                    layout.byte_offset(location),
                );
                gl.enable_vertex_attrib_array(location as u32);
            }

            // The element buffer binding lives in the VAO; only the array
            // buffer may be unbound before the VAO is.
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);

            let count = match indices {
                Some(indices) => indices.len() as i32,
                None => layout.vertex_count(vertices.len()),
            };

            Ok(Self { vao, vbo, ebo, count })
        }
    }

    /// Binds the VAO and issues the draw call: `glDrawElements` when indexed,
    /// `glDrawArrays` otherwise, both with TRIANGLES.
    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            match self.ebo {
                Some(_) => gl.draw_elements(glow::TRIANGLES, self.count, glow::UNSIGNED_INT, 0),
                None => gl.draw_arrays(glow::TRIANGLES, 0, self.count),
            }
        }
    }

    /// Vertices (non-indexed) or indices (indexed) issued per draw.
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Deletes the buffers and the vertex array. Call before the context is
    /// torn down.
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
            if let Some(ebo) = self.ebo {
                gl.delete_buffer(ebo);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── stride / offsets ──────────────────────────────────────────────────

    #[test]
    fn position_layout_stride() {
        let layout = VertexLayout::position();
        assert_eq!(layout.stride_floats(), 3);
        assert_eq!(layout.stride_bytes(), 12);
        assert_eq!(layout.byte_offset(0), 0);
    }

    #[test]
    fn position_color_layout_offsets() {
        let layout = VertexLayout::position_color();
        assert_eq!(layout.stride_bytes(), 24);
        assert_eq!(layout.byte_offset(0), 0);
        assert_eq!(layout.byte_offset(1), 12);
    }

    #[test]
    fn position_color_uv_layout_offsets() {
        let layout = VertexLayout::position_color_uv();
        assert_eq!(layout.stride_bytes(), 32);
        assert_eq!(layout.byte_offset(1), 12);
        assert_eq!(layout.byte_offset(2), 24);
    }

    #[test]
    fn position_uv_layout_offsets() {
        let layout = VertexLayout::position_uv();
        assert_eq!(layout.stride_bytes(), 20);
        assert_eq!(layout.byte_offset(1), 12);
    }

    // ── vertex count ──────────────────────────────────────────────────────

    #[test]
    fn triangle_array_yields_three_vertices() {
        // 3 vertices of interleaved position+color, as the triangle demo
        // uploads them: one TRIANGLES draw over exactly 3 vertices.
        let layout = VertexLayout::position_color();
        assert_eq!(layout.vertex_count(18), 3);
    }

    #[test]
    fn cube_array_yields_thirty_six_vertices() {
        let layout = VertexLayout::position_uv();
        assert_eq!(layout.vertex_count(36 * 5), 36);
    }
}
