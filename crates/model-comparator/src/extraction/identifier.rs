//! Reference identifier extraction from UML and XML metadata.

use serde::Serialize;

use crate::model::schema::{Obligation, Specification, UmlTag};

/// Displayed in place of an identifier adapted from a superseded specification.
pub const LEGACY: &str = "(none - adapted from legacy OGC specification)";

/// Displayed in place of an identifier for implementation additions.
pub const EXTENSION: &str = "(none - this is a GeoAPI extension)";

/// Why an element does or does not have a reference identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Identifier defined by the reference standard.
    Reference,
    /// Adapted from a superseded specification; no current counterpart.
    Legacy,
    /// Implementation addition with no counterpart at all.
    Extension,
}

/// Reference identifier attached to a declared element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceIdentifier {
    pub provenance: Provenance,
    /// Present only for [`Provenance::Reference`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specification: Option<Specification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obligation: Option<Obligation>,
}

impl ReferenceIdentifier {
    pub fn extension() -> Self {
        Self {
            provenance: Provenance::Extension,
            identifier: None,
            specification: None,
            obligation: None,
        }
    }

    /// The identifier, or the fixed placeholder for legacy and extension
    /// elements.
    pub fn display(&self) -> &str {
        match self.provenance {
            Provenance::Reference => self.identifier.as_deref().unwrap_or_default(),
            Provenance::Legacy => LEGACY,
            Provenance::Extension => EXTENSION,
        }
    }

    /// Informational findings are shown muted and never count as defects.
    pub fn is_informational(&self) -> bool {
        self.provenance != Provenance::Reference
    }
}

/// Extract the reference identifier of an element from its metadata.
///
/// The UML tag wins over the XML element name. When several identifiers were
/// collapsed into one comma-separated string, only the first one is kept.
pub fn identifier_of(uml: Option<&UmlTag>, xml_element: Option<&str>) -> ReferenceIdentifier {
    let (identifier, specification, obligation) = match (uml, xml_element) {
        (Some(tag), _) if tag.specification.is_legacy() => {
            return ReferenceIdentifier {
                provenance: Provenance::Legacy,
                identifier: None,
                specification: Some(tag.specification),
                obligation: tag.obligation,
            };
        }
        (Some(tag), _) => (tag.identifier.as_str(), Some(tag.specification), tag.obligation),
        (None, Some(xml)) => (xml, None, None),
        (None, None) => return ReferenceIdentifier::extension(),
    };
    let identifier = match identifier.find(',') {
        Some(split) => &identifier[..split],
        None => identifier,
    };
    ReferenceIdentifier {
        provenance: Provenance::Reference,
        identifier: Some(identifier.to_string()),
        specification,
        obligation,
    }
}
