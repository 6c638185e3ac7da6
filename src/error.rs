use thiserror::Error;

use crate::schema::NumericKind;

#[derive(Error, Debug)]
pub enum PlyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a PLY file: missing 'ply' magic")]
    NotPly,

    #[error("Invalid PLY header: {0}")]
    InvalidHeader(String),

    #[error("Unsupported PLY format: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported PLY version: {0}")]
    UnsupportedVersion(String),

    #[error("Unknown property type: {0}")]
    UnknownPropertyType(String),

    #[error("Vertex element needs exactly one x, y and z property (found {x}, {y}, {z})")]
    MissingCoordinates { x: usize, y: usize, z: usize },

    #[error("Vertex colors need all of red, green and blue (found {0} channels)")]
    IncompleteColor(usize),

    /// `record` counts vertex records from 1; header lines are not included.
    #[error("Invalid {kind} value in ASCII vertex record {record}")]
    InvalidAsciiToken { record: usize, kind: NumericKind },
}
