use std::io::{BufRead, Cursor};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::de::decode_body;
use crate::header::{check_magic, parse_header};
use crate::mesh::{Material, MeshKernel, RawMesh};
use crate::schema::ColorBinding;
use crate::PlyError;

/// Caller-side switches for [`PlyReader`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Collect per-vertex colors into a [`Material`] when the file has them.
    ///
    /// Color properties are validated and consumed either way.
    pub vertex_colors: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            vertex_colors: true,
        }
    }
}

/// Reads triangle meshes from PLY streams.
#[derive(Debug, Clone, Default)]
pub struct PlyReader {
    options: ReadOptions,
}

impl PlyReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Decode a complete PLY stream.
    ///
    /// Nothing is returned on failure; whatever was decoded up to the error is
    /// dropped.
    #[tracing::instrument(skip_all)]
    pub fn load<R: BufRead>(&self, mut reader: R) -> Result<RawMesh, PlyError> {
        check_magic(&mut reader)?;
        let schema = parse_header(&mut reader)?;

        let material = match schema.validate()? {
            ColorBinding::PerVertex if self.options.vertex_colors => {
                Some(Material::per_vertex(schema.counts.vertices))
            }
            _ => None,
        };

        let mesh = decode_body(&mut reader, &schema, material)?;
        info!(
            format = %schema.format,
            points = mesh.points.len(),
            facets = mesh.facets.len(),
            "Loaded PLY mesh"
        );
        Ok(mesh)
    }

    /// Decode a PLY stream and hand the result to `kernel`.
    ///
    /// `kernel` is only touched when the whole stream decoded successfully.
    pub fn load_into<R: BufRead, K: MeshKernel + ?Sized>(
        &self,
        reader: R,
        kernel: &mut K,
    ) -> Result<(), PlyError> {
        let mesh = self.load(reader)?;
        kernel.adopt(mesh);
        Ok(())
    }
}

/// Decode a mesh with default options.
pub fn from_reader<R: BufRead>(reader: R) -> Result<RawMesh, PlyError> {
    PlyReader::new().load(reader)
}

/// Convenience function for decoding from an in-memory buffer
pub fn from_bytes(data: &[u8]) -> Result<RawMesh, PlyError> {
    from_reader(Cursor::new(data))
}

/// Convenience function for decoding from a string
pub fn from_str(ply_str: &str) -> Result<RawMesh, PlyError> {
    from_bytes(ply_str.as_bytes())
}
