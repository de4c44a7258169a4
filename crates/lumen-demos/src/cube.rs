//! Geometry and motion for the cubes demo.

use glam::{Mat4, Vec3};

/// 36 vertices (6 faces, two triangles each), interleaved position + uv.
#[rustfmt::skip]
pub const VERTICES: [f32; 180] = [
    // back face
    -0.5, -0.5, -0.5,  0.0, 0.0,
     0.5, -0.5, -0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 0.0,
    // front face
    -0.5, -0.5,  0.5,  0.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
    -0.5,  0.5,  0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    // left face
    -0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5,  0.5,  1.0, 0.0,
    // right face
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5,  0.5,  0.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
    // bottom face
    -0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  1.0, 1.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    // top face
    -0.5,  0.5, -0.5,  0.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
];

/// World-space offsets for the ten cube instances.
pub const OFFSETS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Spin angle in radians for cube `index` at time `elapsed`.
///
/// Each cube spins at 20 degrees per second per index, so cube 0 stands
/// still and the rest rotate at staggered speeds.
pub fn spin_angle(index: usize, elapsed: f32) -> f32 {
    elapsed * (20.0 * index as f32).to_radians()
}

/// Model matrix for cube `index`: translation to its offset, spinning around
/// a fixed tilted axis.
pub fn model_matrix(index: usize, elapsed: f32) -> Mat4 {
    let axis = Vec3::new(1.0, 0.3, 0.5).normalize();
    Mat4::from_translation(OFFSETS[index]) * Mat4::from_axis_angle(axis, spin_angle(index, elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_array_holds_a_full_cube() {
        // 36 vertices of 5 floats each.
        assert_eq!(VERTICES.len(), 36 * 5);
    }

    #[test]
    fn ten_cube_instances() {
        assert_eq!(OFFSETS.len(), 10);
    }

    // ── spin ──────────────────────────────────────────────────────────────

    #[test]
    fn cube_zero_never_spins() {
        assert_eq!(spin_angle(0, 12.5), 0.0);
    }

    #[test]
    fn spin_rate_is_twenty_degrees_per_index() {
        let angle = spin_angle(3, 2.0);
        assert!((angle - 2.0 * (60.0f32).to_radians()).abs() < 1e-6);
    }

    #[test]
    fn model_matrix_of_cube_zero_is_identity() {
        assert!(model_matrix(0, 5.0).abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn model_matrix_translates_to_the_offset() {
        let m = model_matrix(1, 0.0);
        assert!(m.w_axis.truncate().abs_diff_eq(OFFSETS[1], 1e-6));
    }
}
