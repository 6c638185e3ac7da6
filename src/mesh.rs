//! Decoded mesh data and the seam to whatever stores it.

use serde::{Deserialize, Serialize};

/// Most records reserved up front from a header count. Past this the vectors
/// grow as records are decoded.
pub(crate) const RESERVE_LIMIT: usize = 1 << 20;

/// A vertex position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl MeshPoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A triangle referencing three vertices by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshFacet {
    pub indices: [u32; 3],
}

impl MeshFacet {
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { indices: [a, b, c] }
    }
}

/// RGB color with channels in `0.0..=1.0` for 8-bit input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Scale 8-bit channel values down to the unit range.
    pub fn from_channels(r: f32, g: f32, b: f32) -> Self {
        Self::new(r / 255.0, g / 255.0, b / 255.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaterialBinding {
    #[default]
    Overall,
    PerVertex,
}

/// Receives vertex colors while the body is decoded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Material {
    pub binding: MaterialBinding,
    pub diffuse_color: Vec<Color>,
}

impl Material {
    pub fn per_vertex(capacity: usize) -> Self {
        Self {
            binding: MaterialBinding::PerVertex,
            diffuse_color: Vec::with_capacity(capacity.min(RESERVE_LIMIT)),
        }
    }
}

/// Faces that were dropped without failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodeStats {
    /// Faces that were not triangles, or ASCII lines that did not parse as one.
    pub non_triangle: usize,
    /// Binary triangles referencing a vertex past the declared count.
    pub out_of_range: usize,
}

impl DecodeStats {
    pub fn rejected(&self) -> usize {
        self.non_triangle + self.out_of_range
    }
}

/// Points and facets as they came out of the file.
///
/// Facets read from ASCII bodies are not checked against the number of points,
/// so consumers must be prepared for out-of-range indices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawMesh {
    pub points: Vec<MeshPoint>,
    pub facets: Vec<MeshFacet>,
    pub material: Option<Material>,
    pub stats: DecodeStats,
}

/// Storage that takes over a successfully decoded mesh.
///
/// Implementors are expected to drop invalid elements and build adjacency
/// before keeping the data.
pub trait MeshKernel {
    fn adopt(&mut self, mesh: RawMesh);
}

impl MeshKernel for RawMesh {
    fn adopt(&mut self, mesh: RawMesh) {
        *self = mesh;
    }
}
