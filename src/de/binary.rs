use std::io::Read;

use byteorder::ByteOrder;

use super::val_reader::{BinValReader, ScalarReader};
use super::{read_vertex, DecodeContext, FaceRecord, Rejection};
use crate::mesh::MeshFacet;
use crate::schema::{MeshSchema, NumericKind};
use crate::PlyError;

/// Read one face record, leaving the reader at the start of the next one
/// whether or not the face is kept.
pub(crate) fn read_face<R: Read, E: ByteOrder>(
    reader: &mut BinValReader<R, E>,
    schema: &MeshSchema,
) -> Result<FaceRecord, PlyError> {
    let count = reader.read_u8()?;
    let record = if count == 3 {
        let indices = [reader.read_u32()?, reader.read_u32()?, reader.read_u32()?];
        if indices
            .iter()
            .all(|&index| (index as usize) < schema.counts.vertices)
        {
            let [a, b, c] = indices;
            FaceRecord::Triangle(MeshFacet::new(a, b, c))
        } else {
            FaceRecord::Rejected(Rejection::IndexOutOfRange)
        }
    } else {
        FaceRecord::Rejected(Rejection::NotTriangle)
    };

    for &kind in &schema.face_props {
        match kind {
            // Floating point face properties are stored as one-byte counted lists.
            NumericKind::F32 | NumericKind::F64 => {
                let len = reader.read_u8()?;
                for _ in 0..len {
                    reader.skip_scalar(kind)?;
                }
            }
            NumericKind::I8
            | NumericKind::U8
            | NumericKind::I16
            | NumericKind::U16
            | NumericKind::I32
            | NumericKind::U32 => reader.skip_scalar(kind)?,
        }
    }

    Ok(record)
}

pub(crate) fn decode<R: Read, E: ByteOrder>(
    reader: R,
    ctx: &mut DecodeContext,
) -> Result<(), PlyError> {
    let schema = ctx.schema();
    let mut reader = BinValReader::<_, E>::new(reader);

    for _ in 0..schema.counts.vertices {
        let values = read_vertex(&schema.vertex_props, &mut reader)?;
        ctx.push_vertex(&values);
    }

    for _ in 0..schema.counts.faces {
        let record = read_face(&mut reader, schema)?;
        ctx.push_face(record);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ElementCounts;
    use byteorder::{LittleEndian, WriteBytesExt};
    use std::io::Cursor;

    fn schema(vertices: usize, face_props: Vec<NumericKind>) -> MeshSchema {
        MeshSchema {
            counts: ElementCounts::new(vertices, 1),
            face_props,
            ..Default::default()
        }
    }

    #[test]
    fn test_out_of_range_face_keeps_alignment() {
        let schema = schema(3, vec![NumericKind::U8]);
        let mut data = Vec::new();
        for face in [[0u32, 1, 3], [0, 1, 2]] {
            data.write_u8(3).unwrap();
            for index in face {
                data.write_u32::<LittleEndian>(index).unwrap();
            }
            data.write_u8(0xff).unwrap();
        }

        let mut reader = BinValReader::<_, LittleEndian>::new(Cursor::new(data));
        assert_eq!(
            read_face(&mut reader, &schema).unwrap(),
            FaceRecord::Rejected(Rejection::IndexOutOfRange)
        );
        assert_eq!(
            read_face(&mut reader, &schema).unwrap(),
            FaceRecord::Triangle(MeshFacet::new(0, 1, 2))
        );
    }

    #[test]
    fn test_float_face_props_are_counted_lists() {
        let schema = schema(3, vec![NumericKind::F32, NumericKind::I16, NumericKind::F64]);
        let mut data = Vec::new();
        data.write_u8(3).unwrap();
        for index in [2u32, 1, 0] {
            data.write_u32::<LittleEndian>(index).unwrap();
        }
        data.write_u8(2).unwrap();
        data.write_f32::<LittleEndian>(0.5).unwrap();
        data.write_f32::<LittleEndian>(0.25).unwrap();
        data.write_i16::<LittleEndian>(-1).unwrap();
        data.write_u8(1).unwrap();
        data.write_f64::<LittleEndian>(2.0).unwrap();
        data.write_u8(42).unwrap();

        let mut reader = BinValReader::<_, LittleEndian>::new(Cursor::new(data));
        assert_eq!(
            read_face(&mut reader, &schema).unwrap(),
            FaceRecord::Triangle(MeshFacet::new(2, 1, 0))
        );
        assert_eq!(reader.read_u8().unwrap(), 42);
    }

    #[test]
    fn test_non_triangle_skips_index_read() {
        let schema = schema(8, vec![NumericKind::U16]);
        let mut data = Vec::new();
        data.write_u8(4).unwrap();
        data.write_u16::<LittleEndian>(7).unwrap();
        data.write_u8(42).unwrap();

        let mut reader = BinValReader::<_, LittleEndian>::new(Cursor::new(data));
        assert_eq!(
            read_face(&mut reader, &schema).unwrap(),
            FaceRecord::Rejected(Rejection::NotTriangle)
        );
        assert_eq!(reader.read_u8().unwrap(), 42);
    }
}
