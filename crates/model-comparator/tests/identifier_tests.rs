use model_comparator::extraction::identifier::{
    identifier_of, Provenance, ReferenceIdentifier, EXTENSION, LEGACY,
};
use model_comparator::model::schema::{Obligation, Specification, UmlTag};

fn uml(identifier: &str, specification: Specification) -> UmlTag {
    UmlTag {
        identifier: identifier.to_string(),
        specification,
        obligation: None,
    }
}

#[test]
fn uml_identifier_is_a_reference() {
    let tag = uml("MD_Metadata", Specification::Iso19115);
    let id = identifier_of(Some(&tag), None);
    assert_eq!(id.provenance, Provenance::Reference);
    assert_eq!(id.identifier.as_deref(), Some("MD_Metadata"));
    assert_eq!(id.specification, Some(Specification::Iso19115));
    assert_eq!(id.display(), "MD_Metadata");
    assert!(!id.is_informational());
}

#[test]
fn superseded_specification_is_legacy() {
    let tag = uml("CT_MathTransform", Specification::Ogc01009);
    let id = identifier_of(Some(&tag), Some("mathTransform"));
    assert_eq!(id.provenance, Provenance::Legacy);
    assert_eq!(id.identifier, None);
    assert_eq!(id.display(), LEGACY);
    assert!(id.is_informational());
}

#[test]
fn uml_wins_over_xml_element() {
    let tag = uml("dateStamp", Specification::Iso19115);
    let id = identifier_of(Some(&tag), Some("dateInfo"));
    assert_eq!(id.identifier.as_deref(), Some("dateStamp"));
}

#[test]
fn xml_element_is_a_fallback() {
    let id = identifier_of(None, Some("interpolation"));
    assert_eq!(id.provenance, Provenance::Reference);
    assert_eq!(id.identifier.as_deref(), Some("interpolation"));
    assert_eq!(id.specification, None);
}

#[test]
fn missing_metadata_is_an_extension() {
    let id = identifier_of(None, None);
    assert_eq!(id, ReferenceIdentifier::extension());
    assert_eq!(id.display(), EXTENSION);
    assert!(id.is_informational());
}

#[test]
fn collapsed_identifiers_keep_the_first() {
    let tag = uml("parentIdentifier,parentId", Specification::Iso19115);
    assert_eq!(
        identifier_of(Some(&tag), None).identifier.as_deref(),
        Some("parentIdentifier")
    );
    let id = identifier_of(None, Some("a,b,c"));
    assert_eq!(id.identifier.as_deref(), Some("a"));
    let id = identifier_of(None, Some(",leading"));
    assert_eq!(id.identifier.as_deref(), Some(""));
}

#[test]
fn obligation_is_carried() {
    let tag = UmlTag {
        identifier: "contact".to_string(),
        specification: Specification::Iso19115,
        obligation: Some(Obligation::Mandatory),
    };
    assert_eq!(
        identifier_of(Some(&tag), None).obligation,
        Some(Obligation::Mandatory)
    );
}

#[test]
fn specification_labels() {
    assert_eq!(Specification::Iso19115_2.to_string(), "ISO 19115-2");
    assert_eq!(Specification::Ogc01009.to_string(), "OGC 01-009");
    assert!(Specification::Ogc01009.is_legacy());
    assert!(!Specification::Ogc01004.is_legacy());
}
