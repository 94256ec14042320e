//! Serde model for the model schema: the API surface under audit.
//!
//! A schema lists every declared type together with its public members and
//! the UML metadata attached to them. It stands in for the annotations a
//! compiler would otherwise expose through reflection.
//!
//! Design notes:
//! - We use `#[serde(default)]` liberally so that hand-written schemas can omit
//!   anything but the qualified type name.
//! - We do NOT use `#[serde(deny_unknown_fields)]` -- unknown fields are ignored.
//! - Enum values use the spelling of the UML annotation constants
//!   (`ISO_19115`, `OGC_01009`, ...).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level schema document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    /// Namespace whose types are audited. `None` lets the caller decide.
    #[serde(default)]
    pub root_namespace: Option<String>,
    /// Declared types, in scan order.
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

/// A declared type: interface, class, exception or code list.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDecl {
    /// Dot-separated qualified name, e.g. `org.opengis.metadata.Identifier`.
    pub qualified_name: String,
    /// Simple name. Defaults to the last segment of the qualified name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub visibility: Visibility,
    /// Primary reference-vocabulary tag.
    #[serde(default)]
    pub uml: Option<UmlTag>,
    /// Secondary XML element name, consulted when `uml` is absent.
    #[serde(default)]
    pub xml_element: Option<String>,
    /// Directly extended or implemented types, by qualified (or simple) name.
    #[serde(default)]
    pub supertypes: Vec<String>,
    #[serde(default)]
    pub members: Vec<MemberDecl>,
}

impl TypeDecl {
    /// Simple name as written in the implementation.
    pub fn simple_name(&self) -> &str {
        match &self.name {
            Some(name) => name,
            None => last_segment(&self.qualified_name),
        }
    }

    /// Package part of the qualified name (everything before the last dot).
    pub fn package_name(&self) -> &str {
        match self.qualified_name.rfind('.') {
            Some(split) => &self.qualified_name[..split],
            None => &self.qualified_name,
        }
    }
}

/// A public or non-public member of a declared type.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberDecl {
    pub name: String,
    #[serde(default)]
    pub kind: MemberKind,
    #[serde(default)]
    pub visibility: Visibility,
    /// Return type for methods, declared type for fields.
    #[serde(default)]
    pub value_type: Option<String>,
    /// Parameter types, in declaration order.
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub uml: Option<UmlTag>,
    #[serde(default)]
    pub xml_element: Option<String>,
}

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Interface,
    Class,
    Exception,
    CodeList,
}

/// Kind of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    #[default]
    Method,
    Field,
}

/// Declared visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

/// UML annotation attached to a type or member.
#[derive(Debug, Clone, Deserialize)]
pub struct UmlTag {
    /// Identifier in the reference model, e.g. `MD_Metadata` or `dateStamp`.
    pub identifier: String,
    #[serde(default)]
    pub specification: Specification,
    #[serde(default)]
    pub obligation: Option<Obligation>,
}

/// Standard an identifier comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Specification {
    #[serde(rename = "ISO_19103")]
    Iso19103,
    #[serde(rename = "ISO_19107")]
    Iso19107,
    #[serde(rename = "ISO_19108")]
    Iso19108,
    #[serde(rename = "ISO_19111")]
    Iso19111,
    #[serde(rename = "ISO_19115")]
    Iso19115,
    #[serde(rename = "ISO_19115_2")]
    Iso19115_2,
    #[serde(rename = "ISO_19117")]
    Iso19117,
    #[serde(rename = "ISO_19123")]
    Iso19123,
    #[serde(rename = "ISO_19128")]
    Iso19128,
    #[serde(rename = "ISO_19139")]
    Iso19139,
    #[serde(rename = "OGC_03064")]
    Ogc03064,
    /// Implementation specification superseded by ISO 19111.
    #[serde(rename = "OGC_01009")]
    Ogc01009,
    #[serde(rename = "OGC_01004")]
    Ogc01004,
    #[default]
    #[serde(rename = "UNSPECIFIED")]
    Unspecified,
}

impl Specification {
    /// Whether identifiers from this specification have no current reference
    /// counterpart.
    pub fn is_legacy(self) -> bool {
        matches!(self, Specification::Ogc01009)
    }
}

impl fmt::Display for Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Specification::Iso19103 => "ISO 19103",
            Specification::Iso19107 => "ISO 19107",
            Specification::Iso19108 => "ISO 19108",
            Specification::Iso19111 => "ISO 19111",
            Specification::Iso19115 => "ISO 19115",
            Specification::Iso19115_2 => "ISO 19115-2",
            Specification::Iso19117 => "ISO 19117",
            Specification::Iso19123 => "ISO 19123",
            Specification::Iso19128 => "ISO 19128",
            Specification::Iso19139 => "ISO 19139",
            Specification::Ogc03064 => "OGC 03-064",
            Specification::Ogc01009 => "OGC 01-009",
            Specification::Ogc01004 => "OGC 01-004",
            Specification::Unspecified => "unspecified",
        };
        f.write_str(label)
    }
}

/// Obligation of an attribute in the reference model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Obligation {
    Mandatory,
    Optional,
    Conditional,
    Forbidden,
}

/// Last dot-separated segment of a name.
pub fn last_segment(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Erase generic arguments and array brackets from a type reference.
///
/// Returns the erased name and whether the reference denoted an array.
pub fn erase_type(type_ref: &str) -> (&str, bool) {
    let trimmed = type_ref.trim();
    let (base, is_array) = match trimmed.strip_suffix("[]") {
        Some(element) => (element.trim_end(), true),
        None => match trimmed.strip_suffix("...") {
            Some(element) => (element.trim_end(), true),
            None => (trimmed, false),
        },
    };
    let base = match base.find('<') {
        Some(split) => base[..split].trim_end(),
        None => base,
    };
    (base, is_array)
}
