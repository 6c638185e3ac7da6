use std::io::BufRead;

use tracing::warn;

use super::lex;
use super::val_reader::AsciiValReader;
use super::{read_vertex, DecodeContext, FaceRecord, PropertyValues, Rejection};
use crate::mesh::MeshFacet;
use crate::schema::VertexProperty;
use crate::PlyError;

/// One vertex per line, tokens in declared property order.
pub(crate) fn read_vertex_line(
    line: &str,
    record: usize,
    props: &[VertexProperty],
) -> Result<PropertyValues, PlyError> {
    read_vertex(props, &mut AsciiValReader::new(line, record))
}

/// Only `3 a b c` lines become facets. Indices are taken as written; anything
/// after the third index, declared face properties included, is ignored.
pub(crate) fn read_face_line(line: &str) -> FaceRecord {
    match lex::triangle(line) {
        Some([a, b, c]) => FaceRecord::Triangle(MeshFacet::new(a, b, c)),
        None => FaceRecord::Rejected(Rejection::NotTriangle),
    }
}

fn next_line<R: BufRead>(reader: &mut R, line: &mut String) -> Result<bool, PlyError> {
    line.clear();
    Ok(reader.read_line(line)? > 0)
}

pub(crate) fn decode<R: BufRead>(mut reader: R, ctx: &mut DecodeContext) -> Result<(), PlyError> {
    let schema = ctx.schema();
    let mut line = String::new();
    let mut record = 0;

    for _ in 0..schema.counts.vertices {
        if !next_line(&mut reader, &mut line)? {
            warn!(
                expected = schema.counts.vertices,
                read = record,
                "ASCII body ended inside the vertex element"
            );
            return Ok(());
        }
        record += 1;

        let values = read_vertex_line(&line, record, &schema.vertex_props)?;
        ctx.push_vertex(&values);
    }

    for face in 0..schema.counts.faces {
        if !next_line(&mut reader, &mut line)? {
            warn!(
                expected = schema.counts.faces,
                read = face,
                "ASCII body ended inside the face element"
            );
            return Ok(());
        }

        ctx.push_face(read_face_line(&line));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshPoint;
    use crate::schema::{NumericKind, PropertyRole};

    #[test]
    fn test_vertex_line_by_kind() {
        let props = [
            VertexProperty::new(PropertyRole::X, NumericKind::I8),
            VertexProperty::new(PropertyRole::Y, NumericKind::U16),
            VertexProperty::new(PropertyRole::Z, NumericKind::F64),
        ];
        let values = read_vertex_line("-4 12 .25\n", 1, &props).unwrap();
        assert_eq!(values.point(), MeshPoint::new(-4.0, 12.0, 0.25));
    }

    #[test]
    fn test_vertex_line_lexical_failure() {
        let props = [
            VertexProperty::new(PropertyRole::X, NumericKind::F32),
            VertexProperty::new(PropertyRole::Y, NumericKind::U8),
        ];
        let err = read_vertex_line("1.0 -3", 7, &props).unwrap_err();
        assert!(matches!(err, PlyError::InvalidAsciiToken { record: 7, .. }));
    }

    #[test]
    fn test_face_lines() {
        assert_eq!(
            read_face_line("3 0 1 2\n"),
            FaceRecord::Triangle(MeshFacet::new(0, 1, 2))
        );
        assert_eq!(
            read_face_line("4 0 1 2 3\n"),
            FaceRecord::Rejected(Rejection::NotTriangle)
        );
    }
}
