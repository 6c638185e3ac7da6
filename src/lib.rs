//! A PLY (Polygon File Format) triangle mesh reader.
//!
//! The header is parsed first into a [`MeshSchema`], which is checked for a
//! usable vertex layout before either body decoder runs. ASCII and binary
//! (little or big endian) bodies decode into the same [`RawMesh`]: points,
//! triangles and, when the vertices carry RGB, per-vertex colors.
//!
//! Faces that are not triangles are dropped and counted in [`DecodeStats`]
//! rather than failing the load. Binary facets are checked against the vertex
//! count, ASCII facets are not.
//!
//! # Example
//!
//! ```rust
//! let ply_data = r#"ply
//! format ascii 1.0
//! element vertex 3
//! property float x
//! property float y
//! property float z
//! element face 1
//! property list uchar int vertex_indices
//! end_header
//! 0 0 0
//! 1 0 0
//! 0 1 0
//! 3 0 1 2
//! "#;
//!
//! let mesh = ply_mesh::from_str(ply_data).unwrap();
//! assert_eq!(mesh.points.len(), 3);
//! assert_eq!(mesh.facets[0].indices, [0, 1, 2]);
//! ```

pub mod de;
mod error;
mod header;
mod mesh;
mod reader;
mod schema;

pub use error::PlyError;
pub use header::{check_magic, parse_header};
pub use mesh::{
    Color, DecodeStats, Material, MaterialBinding, MeshFacet, MeshKernel, MeshPoint, RawMesh,
};
pub use reader::{from_bytes, from_reader, from_str, PlyReader, ReadOptions};
pub use schema::{
    ColorBinding, ElementCounts, LexClass, MeshSchema, NumericKind, PlyFormat, PropertyRole,
    VertexProperty,
};
