//! Property schema of a PLY mesh: numeric kinds, semantic roles and the
//! validation that gates body decoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PlyError;

/// PLY file format (ascii or binary)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlyFormat {
    #[default]
    Ascii,
    BinaryLittleEndian,
    BinaryBigEndian,
}

impl PlyFormat {
    pub fn parse(s: &str) -> Result<Self, PlyError> {
        match s {
            "ascii" => Ok(PlyFormat::Ascii),
            "binary_little_endian" => Ok(PlyFormat::BinaryLittleEndian),
            "binary_big_endian" => Ok(PlyFormat::BinaryBigEndian),
            _ => Err(PlyError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for PlyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlyFormat::Ascii => write!(f, "ascii"),
            PlyFormat::BinaryLittleEndian => write!(f, "binary_little_endian"),
            PlyFormat::BinaryBigEndian => write!(f, "binary_big_endian"),
        }
    }
}

/// Lexical shape of a scalar in the ASCII encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexClass {
    Signed,
    Unsigned,
    Decimal,
}

/// PLY scalar data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    F32,
    F64,
}

impl NumericKind {
    pub fn parse(s: &str) -> Result<Self, PlyError> {
        match s {
            "char" | "int8" => Ok(NumericKind::I8),
            "uchar" | "uint8" => Ok(NumericKind::U8),
            "short" | "int16" => Ok(NumericKind::I16),
            "ushort" | "uint16" => Ok(NumericKind::U16),
            "int" | "int32" => Ok(NumericKind::I32),
            "uint" | "uint32" => Ok(NumericKind::U32),
            "float" | "float32" => Ok(NumericKind::F32),
            "double" | "float64" => Ok(NumericKind::F64),
            _ => Err(PlyError::UnknownPropertyType(s.to_string())),
        }
    }

    pub fn size_bytes(&self) -> usize {
        match self {
            NumericKind::I8 | NumericKind::U8 => 1,
            NumericKind::I16 | NumericKind::U16 => 2,
            NumericKind::I32 | NumericKind::U32 | NumericKind::F32 => 4,
            NumericKind::F64 => 8,
        }
    }

    pub fn lex_class(&self) -> LexClass {
        match self {
            NumericKind::I8 | NumericKind::I16 | NumericKind::I32 => LexClass::Signed,
            NumericKind::U8 | NumericKind::U16 | NumericKind::U32 => LexClass::Unsigned,
            NumericKind::F32 | NumericKind::F64 => LexClass::Decimal,
        }
    }
}

impl FromStr for NumericKind {
    type Err = PlyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericKind::I8 => "int8",
            NumericKind::U8 => "uint8",
            NumericKind::I16 => "int16",
            NumericKind::U16 => "uint16",
            NumericKind::I32 => "int32",
            NumericKind::U32 => "uint32",
            NumericKind::F32 => "float32",
            NumericKind::F64 => "float64",
        };
        f.write_str(name)
    }
}

/// What a vertex property means to the mesh, decided by its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyRole {
    X,
    Y,
    Z,
    Red,
    Green,
    Blue,
    /// Read and dropped.
    Generic,
}

impl PropertyRole {
    pub fn from_name(name: &str) -> Self {
        match name {
            "x" => PropertyRole::X,
            "y" => PropertyRole::Y,
            "z" => PropertyRole::Z,
            "red" | "diffuse_red" => PropertyRole::Red,
            "green" | "diffuse_green" => PropertyRole::Green,
            "blue" | "diffuse_blue" => PropertyRole::Blue,
            _ => PropertyRole::Generic,
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(
            self,
            PropertyRole::Red | PropertyRole::Green | PropertyRole::Blue
        )
    }
}

/// One `property` line of the vertex element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexProperty {
    pub role: PropertyRole,
    pub kind: NumericKind,
}

impl VertexProperty {
    pub fn new(role: PropertyRole, kind: NumericKind) -> Self {
        Self { role, kind }
    }
}

/// Declared record counts of the `vertex` and `face` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementCounts {
    pub vertices: usize,
    pub faces: usize,
}

impl ElementCounts {
    pub fn new(vertices: usize, faces: usize) -> Self {
        Self { vertices, faces }
    }
}

/// Whether vertex colors get bound to the decoded mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBinding {
    None,
    PerVertex,
}

/// Everything the header tells the body decoders.
///
/// Built once by [`crate::parse_header`] and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct MeshSchema {
    pub format: PlyFormat,
    pub counts: ElementCounts,
    /// Vertex properties in the order they appear in every record.
    pub vertex_props: Vec<VertexProperty>,
    /// Face properties other than the vertex index list.
    pub face_props: Vec<NumericKind>,
    pub saw_end_header: bool,
}

impl MeshSchema {
    fn role_count(&self, role: PropertyRole) -> usize {
        self.vertex_props.iter().filter(|p| p.role == role).count()
    }

    /// Check that vertices carry a usable position and either no color or a
    /// full RGB triple.
    pub fn validate(&self) -> Result<ColorBinding, PlyError> {
        let x = self.role_count(PropertyRole::X);
        let y = self.role_count(PropertyRole::Y);
        let z = self.role_count(PropertyRole::Z);
        if x != 1 || y != 1 || z != 1 {
            return Err(PlyError::MissingCoordinates { x, y, z });
        }

        let channels = self.vertex_props.iter().filter(|p| p.role.is_color()).count();
        match channels {
            0 => Ok(ColorBinding::None),
            3 => Ok(ColorBinding::PerVertex),
            n => Err(PlyError::IncompleteColor(n)),
        }
    }
}
