//! Header parsing.

use std::io::{BufRead, ErrorKind, Read};

use tracing::{debug, warn};

use crate::schema::{MeshSchema, NumericKind, PlyFormat, PropertyRole, VertexProperty};
use crate::PlyError;

/// Consume the 4-byte magic (`ply` plus the line terminator).
pub fn check_magic<R: Read>(mut reader: R) -> Result<(), PlyError> {
    let mut magic = [0u8; 4];
    match reader.read_exact(&mut magic) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Err(PlyError::NotPly),
        Err(e) => return Err(PlyError::Io(e)),
    }

    if &magic[..3] != b"ply" {
        return Err(PlyError::NotPly);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementContext {
    None,
    Vertex,
    Face,
}

/// Parse the header lines that follow the magic, stopping after `end_header`.
///
/// A stream that ends before `end_header` is accepted as-is.
pub fn parse_header<R: BufRead>(mut reader: R) -> Result<MeshSchema, PlyError> {
    let mut schema = MeshSchema::default();
    let mut context = ElementContext::None;
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            warn!("PLY header ended without end_header");
            break;
        }

        let mut parts = line.split_ascii_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };

        match keyword {
            "format" => {
                let (Some(name), Some(version)) = (parts.next(), parts.next()) else {
                    return Err(PlyError::InvalidHeader(format!(
                        "Invalid format line: {}",
                        line.trim_end()
                    )));
                };
                schema.format = PlyFormat::parse(name)?;
                if version != "1.0" {
                    return Err(PlyError::UnsupportedVersion(version.to_string()));
                }
            }
            "element" => {
                let (Some(name), Some(count)) = (parts.next(), parts.next()) else {
                    return Err(PlyError::InvalidHeader(format!(
                        "Invalid element line: {}",
                        line.trim_end()
                    )));
                };
                let count = count.parse::<usize>().map_err(|_| {
                    PlyError::InvalidHeader(format!("Invalid element count: {count}"))
                })?;

                context = match name {
                    "vertex" => {
                        schema.counts.vertices = count;
                        ElementContext::Vertex
                    }
                    "face" => {
                        schema.counts.faces = count;
                        ElementContext::Face
                    }
                    _ => ElementContext::None,
                };
            }
            "property" => match context {
                ElementContext::Vertex => {
                    let kind = NumericKind::parse(parts.next().unwrap_or_default())?;
                    let role = PropertyRole::from_name(parts.next().unwrap_or_default());
                    schema.vertex_props.push(VertexProperty::new(role, kind));
                }
                ElementContext::Face => {
                    let first = parts.next().unwrap_or_default();
                    let value_type = if first == "list" {
                        // The count type is not used: binary counts are always one byte.
                        parts.next();
                        parts.next().unwrap_or_default()
                    } else {
                        first
                    };
                    let name = parts.next().unwrap_or_default();
                    if !is_index_list(name) {
                        schema.face_props.push(NumericKind::parse(value_type)?);
                    }
                }
                ElementContext::None => {}
            },
            "end_header" => {
                schema.saw_end_header = true;
                break;
            }
            _ => {}
        }
    }

    debug!(
        format = %schema.format,
        vertices = schema.counts.vertices,
        faces = schema.counts.faces,
        vertex_props = schema.vertex_props.len(),
        face_props = schema.face_props.len(),
        "Parsed PLY header"
    );

    Ok(schema)
}

fn is_index_list(name: &str) -> bool {
    name == "vertex_indices" || name == "vertex_index"
}
