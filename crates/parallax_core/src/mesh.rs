//! Mesh geometry for the ray tracer.
//!
//! Indexed triangle data, decoupled from any file format. The renderer only
//! reads triangle corners; face normals are derived from edge vectors at
//! intersection time, so no per-vertex normals are stored.

use parallax_math::Vec3;

/// An indexed triangle mesh.
///
/// Read-only after construction. Every 3 indices form one triangle.
#[derive(Clone, Debug)]
pub struct Mesh {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Create a new mesh from vertex positions and triangle indices.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the position of vertex `index`.
    pub fn vertex_position(&self, index: usize) -> Vec3 {
        self.positions[index]
    }

    /// Get the vertex index of `corner` (0..3) of triangle `face`.
    pub fn triangle_vertex(&self, face: usize, corner: usize) -> usize {
        self.indices[face * 3 + corner] as usize
    }

    /// Get the three corner positions of triangle `face`.
    pub fn triangle(&self, face: usize) -> [Vec3; 3] {
        [
            self.vertex_position(self.triangle_vertex(face, 0)),
            self.vertex_position(self.triangle_vertex(face, 1)),
            self.vertex_position(self.triangle_vertex(face, 2)),
        ]
    }

    /// Iterate over every triangle's corner positions.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        (0..self.triangle_count()).map(|face| self.triangle(face))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.0), // v0
            Vec3::new(1.0, 0.0, 0.0), // v1
            Vec3::new(0.0, 1.0, 0.0), // v2
            Vec3::new(1.0, 1.0, 0.0), // v3
        ];
        // Two triangles: [0,1,2] and [1,3,2]
        Mesh::new(positions, vec![0, 1, 2, 1, 3, 2])
    }

    #[test]
    fn test_mesh_counts() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_triangle_accessors() {
        let mesh = quad();

        assert_eq!(mesh.triangle_vertex(1, 0), 1);
        assert_eq!(mesh.triangle_vertex(1, 1), 3);
        assert_eq!(mesh.triangle_vertex(1, 2), 2);

        let tri = mesh.triangle(0);
        assert_eq!(tri[0], Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(tri[1], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(tri[2], Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_triangles_iterator() {
        let mesh = quad();
        let tris: Vec<_> = mesh.triangles().collect();

        assert_eq!(tris.len(), 2);
        assert_eq!(tris[1][0], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(tris[1][1], Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(tris[1][2], Vec3::new(0.0, 1.0, 0.0));
    }
}
