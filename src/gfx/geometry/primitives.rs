//! # Primitive Shape Generation

use super::GeometryData;

/// Generate a plane in the XY plane facing the default camera
///
/// # Arguments
/// * `width` - Width of the plane (X direction)
/// * `height` - Height of the plane (Y direction)
/// * `width_segments` - Number of subdivisions along width
/// * `height_segments` - Number of subdivisions along height
///
/// Returns a plane centered at the origin with normal pointing at +Z.
/// Rows run top to bottom so `v` is 1 at the top edge and 0 at the bottom.
pub fn generate_plane(
    width: f32,
    height: f32,
    width_segments: u32,
    height_segments: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let w_segs = width_segments.max(1);
    let h_segs = height_segments.max(1);

    for row in 0..=h_segs {
        let t = row as f32 / h_segs as f32;
        let pos_y = (0.5 - t) * height;

        for col in 0..=w_segs {
            let u = col as f32 / w_segs as f32;
            let pos_x = (u - 0.5) * width;

            data.vertices.push([pos_x, pos_y, 0.0]);
            data.normals.push([0.0, 0.0, 1.0]);
            data.tex_coords.push([u, 1.0 - t]);
        }
    }

    let stride = w_segs + 1;
    for row in 0..h_segs {
        for col in 0..w_segs {
            let a = row * stride + col;
            let b = a + stride;
            let c = b + 1;
            let d = a + 1;

            // Counter-clockwise seen from +Z
            data.indices.extend_from_slice(&[a, b, d]);
            data.indices.extend_from_slice(&[b, c, d]);
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_generation() {
        let plane = generate_plane(2.0, 2.0, 2, 2);
        assert_eq!(plane.vertices.len(), 9); // 3x3 grid
        assert_eq!(plane.indices.len(), 24); // 4 quads * 2 triangles * 3 indices
        assert_eq!(plane.vertices.len(), plane.normals.len());
        assert_eq!(plane.vertices.len(), plane.tex_coords.len());
    }

    #[test]
    fn test_default_plane_counts() {
        let plane = generate_plane(2.0, 2.0, 32, 32);
        assert_eq!(plane.vertex_count(), 1089);
        assert_eq!(plane.triangle_count(), 2048);
    }

    #[test]
    fn test_plane_extents_and_uvs() {
        let plane = generate_plane(2.0, 4.0, 4, 4);
        assert_eq!(plane.vertices[0], [-1.0, 2.0, 0.0]);
        assert_eq!(plane.tex_coords[0], [0.0, 1.0]);
        let last = plane.vertex_count() - 1;
        assert_eq!(plane.vertices[last], [1.0, -2.0, 0.0]);
        assert_eq!(plane.tex_coords[last], [1.0, 0.0]);
    }

    #[test]
    fn test_plane_winding_faces_positive_z() {
        let plane = generate_plane(1.0, 1.0, 1, 1);
        for tri in plane.indices.chunks(3) {
            let p0 = plane.vertices[tri[0] as usize];
            let p1 = plane.vertices[tri[1] as usize];
            let p2 = plane.vertices[tri[2] as usize];
            let e1 = [p1[0] - p0[0], p1[1] - p0[1]];
            let e2 = [p2[0] - p0[0], p2[1] - p0[1]];
            assert!(e1[0] * e2[1] - e1[1] * e2[0] > 0.0);
        }
    }

    #[test]
    fn test_zero_segments_clamped() {
        let plane = generate_plane(1.0, 1.0, 0, 0);
        assert_eq!(plane.vertex_count(), 4);
        assert_eq!(plane.triangle_count(), 2);
    }
}
