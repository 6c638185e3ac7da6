//! Body decoding: turns vertex and face records into a [`RawMesh`].
//!
//! Both encodings share the same vertex path: a [`ScalarReader`] yields one
//! value per schema slot and [`read_vertex`] files them by role. Faces differ
//! per encoding but come out as the same [`FaceRecord`].

mod ascii;
mod binary;
mod lex;

pub mod val_reader;

use std::io::BufRead;

use byteorder::{BigEndian, LittleEndian};
use tracing::{debug, trace};

use crate::mesh::{
    Color, Material, MaterialBinding, MeshFacet, MeshPoint, RawMesh, RESERVE_LIMIT,
};
use crate::schema::{MeshSchema, PlyFormat, PropertyRole, VertexProperty};
use crate::PlyError;
use val_reader::ScalarReader;

/// Values of one vertex record that the mesh cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PropertyValues {
    slots: [f32; 6],
}

impl PropertyValues {
    fn slot(role: PropertyRole) -> Option<usize> {
        match role {
            PropertyRole::X => Some(0),
            PropertyRole::Y => Some(1),
            PropertyRole::Z => Some(2),
            PropertyRole::Red => Some(3),
            PropertyRole::Green => Some(4),
            PropertyRole::Blue => Some(5),
            PropertyRole::Generic => None,
        }
    }

    pub fn set(&mut self, role: PropertyRole, value: f32) {
        if let Some(slot) = Self::slot(role) {
            self.slots[slot] = value;
        }
    }

    /// Generic properties are never kept and read back as zero.
    pub fn get(&self, role: PropertyRole) -> f32 {
        Self::slot(role).map_or(0.0, |slot| self.slots[slot])
    }

    pub fn point(&self) -> MeshPoint {
        MeshPoint::new(
            self.get(PropertyRole::X),
            self.get(PropertyRole::Y),
            self.get(PropertyRole::Z),
        )
    }

    pub fn color(&self) -> Color {
        Color::from_channels(
            self.get(PropertyRole::Red),
            self.get(PropertyRole::Green),
            self.get(PropertyRole::Blue),
        )
    }
}

/// Read every vertex property in declared order, keeping the ones with a role.
pub fn read_vertex<S: ScalarReader>(
    props: &[VertexProperty],
    reader: &mut S,
) -> Result<PropertyValues, PlyError> {
    let mut values = PropertyValues::default();
    for prop in props {
        let value = reader.read_scalar(prop.kind)?;
        values.set(prop.role, value);
    }
    Ok(values)
}

/// Why a face record produced no facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotTriangle,
    IndexOutOfRange,
}

/// Outcome of decoding one face record. Rejections are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceRecord {
    Triangle(MeshFacet),
    Rejected(Rejection),
}

/// Mutable state of a single body decode.
pub struct DecodeContext<'s> {
    schema: &'s MeshSchema,
    mesh: RawMesh,
}

impl<'s> DecodeContext<'s> {
    pub fn new(schema: &'s MeshSchema, material: Option<Material>) -> Self {
        let mesh = RawMesh {
            points: Vec::with_capacity(schema.counts.vertices.min(RESERVE_LIMIT)),
            facets: Vec::with_capacity(schema.counts.faces.min(RESERVE_LIMIT)),
            material,
            ..Default::default()
        };
        Self { schema, mesh }
    }

    pub fn schema(&self) -> &'s MeshSchema {
        self.schema
    }

    pub fn push_vertex(&mut self, values: &PropertyValues) {
        self.mesh.points.push(values.point());

        if let Some(material) = &mut self.mesh.material {
            if material.binding == MaterialBinding::PerVertex {
                material.diffuse_color.push(values.color());
            }
        }
    }

    pub fn push_face(&mut self, record: FaceRecord) {
        match record {
            FaceRecord::Triangle(facet) => self.mesh.facets.push(facet),
            FaceRecord::Rejected(reason) => {
                trace!(?reason, facets = self.mesh.facets.len(), "Dropped face record");
                match reason {
                    Rejection::NotTriangle => self.mesh.stats.non_triangle += 1,
                    Rejection::IndexOutOfRange => self.mesh.stats.out_of_range += 1,
                }
            }
        }
    }

    pub fn finish(self) -> RawMesh {
        self.mesh
    }
}

/// Decode the vertex and face bodies following a parsed header.
pub fn decode_body<R: BufRead>(
    reader: R,
    schema: &MeshSchema,
    material: Option<Material>,
) -> Result<RawMesh, PlyError> {
    let mut ctx = DecodeContext::new(schema, material);

    match schema.format {
        PlyFormat::Ascii => ascii::decode(reader, &mut ctx)?,
        PlyFormat::BinaryLittleEndian => binary::decode::<_, LittleEndian>(reader, &mut ctx)?,
        PlyFormat::BinaryBigEndian => binary::decode::<_, BigEndian>(reader, &mut ctx)?,
    }

    let mesh = ctx.finish();
    debug!(
        points = mesh.points.len(),
        facets = mesh.facets.len(),
        rejected = mesh.stats.rejected(),
        "Decoded PLY body"
    );
    Ok(mesh)
}
