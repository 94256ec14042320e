use model_comparator::model::links::{LinkMinter, REPORT_FILE};

fn minter() -> LinkMinter {
    LinkMinter::new("org.opengis")
}

// --- Types under the root namespace ---

#[test]
fn type_href_under_root() {
    assert_eq!(
        minter().type_href("org.opengis.metadata.MetaData"),
        "../metadata/MetaData.html"
    );
}

#[test]
fn type_href_nested_package() {
    assert_eq!(
        minter().type_href("org.opengis.referencing.crs.ProjectedCRS"),
        "../referencing/crs/ProjectedCRS.html"
    );
}

// --- Types elsewhere ---

#[test]
fn type_href_outside_root_climbs_to_source_root() {
    assert_eq!(
        minter().type_href("java.util.Collection"),
        "../../../java/util/Collection.html"
    );
}

#[test]
fn root_prefix_must_end_at_segment() {
    assert_eq!(
        minter().type_href("org.opengisx.Foo"),
        "../../../org/opengisx/Foo.html"
    );
}

#[test]
fn empty_root_namespace() {
    let m = LinkMinter::new("");
    assert_eq!(m.type_href("a.B"), "../a/B.html");
    assert_eq!(m.report_path(), REPORT_FILE);
}

// --- Escaping ---

#[test]
fn special_characters_are_percent_encoded() {
    assert_eq!(
        minter().type_href("org.opengis.util.Weird Name"),
        "../util/Weird%20Name.html"
    );
    assert_eq!(
        minter().type_href("org.opengis.util.CodeList$Filter"),
        "../util/CodeList$Filter.html"
    );
}

// --- Report location ---

#[test]
fn report_path_under_root() {
    assert_eq!(minter().report_path(), "org/opengis/doc-files/departures-list.html");
}
