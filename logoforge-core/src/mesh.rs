//! Triangle mesh produced by the extrusion pipeline

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// A triangle mesh with vertices, faces and optional per-vertex normals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3f>,
    pub faces: Vec<[usize; 3]>,
    pub normals: Option<Vec<Vector3f>>,
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            normals: None,
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3f>, faces: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            faces,
            normals: None,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Add a vertex to the mesh, returning its index
    pub fn add_vertex(&mut self, vertex: Point3f) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a face to the mesh
    pub fn add_face(&mut self, face: [usize; 3]) {
        self.faces.push(face);
    }

    /// Axis-aligned bounding box, `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Point3f, Point3f)> {
        let first = self.vertices.first()?;
        let mut min = *first;
        let mut max = *first;
        for v in &self.vertices {
            for i in 0..3 {
                min[i] = min[i].min(v[i]);
                max[i] = max[i].max(v[i]);
            }
        }
        Some((min, max))
    }

    /// Translate the mesh so its bounding box is centered at the origin
    pub fn center(&mut self) {
        let Some((min, max)) = self.bounds() else {
            return;
        };
        let offset = Vector3f::new(
            (min.x + max.x) * 0.5,
            (min.y + max.y) * 0.5,
            (min.z + max.z) * 0.5,
        );
        for v in &mut self.vertices {
            *v -= offset;
        }
    }

    /// Compute smooth per-vertex normals by accumulating area-weighted face
    /// normals and normalizing. Shared vertices shade smoothly; duplicated
    /// vertices keep flat facets.
    pub fn compute_vertex_normals(&mut self) {
        let mut normals = vec![Vector3f::zeros(); self.vertices.len()];

        for face in &self.faces {
            let v0 = self.vertices[face[0]];
            let v1 = self.vertices[face[1]];
            let v2 = self.vertices[face[2]];

            // Unnormalized cross product weights by twice the triangle area.
            let face_normal = (v1 - v0).cross(&(v2 - v0));
            for &vi in face {
                normals[vi] += face_normal;
            }
        }

        for n in &mut normals {
            let len = n.magnitude();
            if len > 1e-12 {
                *n /= len;
            } else {
                *n = Vector3f::new(0.0, 0.0, 1.0);
            }
        }

        self.normals = Some(normals);
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}
