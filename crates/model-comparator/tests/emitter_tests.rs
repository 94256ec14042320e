use model_comparator::comparison::departures::{ClassDeparture, MemberDeparture, TypeHeader};
use model_comparator::emitter::html::HtmlEmitter;
use model_comparator::emitter::json::JsonEmitter;
use model_comparator::emitter::ReportEmitter;
use model_comparator::extraction::identifier::{Provenance, ReferenceIdentifier, LEGACY};
use model_comparator::model::schema::Specification;

fn reference(identifier: &str) -> ReferenceIdentifier {
    ReferenceIdentifier {
        provenance: Provenance::Reference,
        identifier: Some(identifier.to_string()),
        specification: Some(Specification::Iso19111),
        obligation: None,
    }
}

fn legacy() -> ReferenceIdentifier {
    ReferenceIdentifier {
        provenance: Provenance::Legacy,
        identifier: None,
        specification: None,
        obligation: None,
    }
}

fn class(name: &str, href: &str, reference: ReferenceIdentifier) -> ClassDeparture {
    ClassDeparture {
        package: "org.opengis.referencing.crs".to_string(),
        name: name.to_string(),
        qualified_name: format!("org.opengis.referencing.crs.{name}"),
        href: href.to_string(),
        reference,
    }
}

fn header(name: &str, code_list: bool) -> TypeHeader {
    TypeHeader {
        name: name.to_string(),
        qualified_name: format!("org.opengis.metadata.{name}"),
        href: format!("../metadata/{name}.html"),
        code_list,
    }
}

fn member(name: &str, reference: ReferenceIdentifier) -> MemberDeparture {
    MemberDeparture {
        name: name.to_string(),
        reference,
    }
}

// ---------------------------------------------------------------------------
// HTML tests
// ---------------------------------------------------------------------------

#[test]
fn html_empty_report_structure() {
    let out = HtmlEmitter::new().render();
    assert!(out.starts_with("<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\">\n<HTML>\n"));
    assert!(out.contains("  <H1>Significant name changes for classes</H1>\n"));
    assert!(out.contains(
        "  <TR><TH bgcolor='#CCCCFF'>GeoAPI name</TH><TH bgcolor='#CCCCFF'>ISO name</TH></TR>\n  </TABLE>\n<P>&nbsp;</P>\n<HR>\n"
    ));
    assert!(out.contains(
        "  <TR><TH bgcolor='#CCCCFF'>GeoAPI name</TH bgcolor='#CCCCFF'><TH>ISO name</TH></TR>\n"
    ));
    assert!(out.ends_with("  </TABLE>\n  </BODY>\n</HTML>\n"));
    assert_eq!(out.matches("<TABLE").count(), 2);
    assert_eq!(out.matches("</TABLE>").count(), 2);
}

#[test]
fn html_package_header_row() {
    let mut em = HtmlEmitter::new();
    em.package_header("org.opengis.referencing.crs");
    assert!(em.render().contains(
        "  <TR><TD>&nbsp;</TD></TR>\n  <TR><TD bgcolor='#DDDDFF'><STRONG>Package&nbsp; <CODE>org.opengis.referencing.crs</CODE></STRONG></TD></TR>\n"
    ));
}

#[test]
fn html_class_row() {
    let mut em = HtmlEmitter::new();
    em.class_departure(&class("CoordinateReferenceSystem", "../crs/CoordinateReferenceSystem.html", reference("SC_CRS")));
    assert_eq!(em.departure_count(), 1);
    assert!(em.render().contains(
        "  <TR><TD><CODE><A HREF=\"../crs/CoordinateReferenceSystem.html\">CoordinateReferenceSystem</A></CODE></TD><TD><CODE>&nbsp;&nbsp;SC_CRS</CODE></TD></TR>\n"
    ));
}

#[test]
fn html_type_headers() {
    let mut em = HtmlEmitter::new();
    em.type_header(&header("MetaData", false));
    em.type_header(&header("CharacterSet", true));
    let out = em.render();
    assert!(out.contains(
        "  <TR><TD>&nbsp;</TD></TR>\n  <TR><TD bgcolor='#DDDDFF'><STRONG>Interface&nbsp; <CODE><A HREF=\"../metadata/MetaData.html\">MetaData</A></CODE></STRONG></TD></TR>\n"
    ));
    assert!(out.contains(
        "<STRONG>Code list&nbsp; <CODE><A HREF=\"../metadata/CharacterSet.html\">CharacterSet</A></CODE></STRONG>"
    ));
    assert_eq!(em.departure_count(), 0);
}

#[test]
fn html_member_rows_follow_class_table() {
    let mut em = HtmlEmitter::new();
    em.type_header(&header("MetaData", false));
    em.member_departure(&member("getLocale", reference("language")));
    em.class_departure(&class("GeodeticCRS", "../crs/GeodeticCRS.html", reference("SC_GeographicCRS")));
    let out = em.render();

    let row = "  <TR><TD><CODE>getLocale</CODE></TD><TD><CODE>&nbsp;&nbsp;language</CODE></TD></TR>\n";
    let member_at = out.find(row).expect("member row");
    let class_at = out.find("GeodeticCRS</A>").expect("class row");
    let divider = out.find("<HR>").expect("divider");
    assert!(class_at < divider);
    assert!(divider < member_at);
}

#[test]
fn html_informational_rows_are_muted() {
    let mut em = HtmlEmitter::new();
    em.type_header(&header("MetaData", false));
    em.member_departure(&member("getDimension", legacy()));
    em.member_departure(&member("getExtra", ReferenceIdentifier::extension()));
    let out = em.render();
    assert!(out.contains(&format!(
        "  <TR><TD><CODE>getDimension</CODE></TD><TD><CODE>&nbsp;&nbsp;</CODE><FONT SIZE='-1' COLOR='#808080'>{LEGACY}</FONT></TD></TR>\n"
    )));
    assert!(out.contains(
        "<FONT SIZE='-1' COLOR='#808080'>(none - this is a GeoAPI extension)</FONT>"
    ));
}

#[test]
fn html_escaping() {
    let mut em = HtmlEmitter::new();
    em.type_header(&header("Holder", false));
    em.member_departure(&member("get<T>", reference("a&b \"c\"")));
    let out = em.render();
    assert!(out.contains("<CODE>get&lt;T&gt;</CODE>"));
    assert!(out.contains("&nbsp;&nbsp;a&amp;b &quot;c&quot;</CODE>"));
}

// ---------------------------------------------------------------------------
// JSON tests
// ---------------------------------------------------------------------------

#[test]
fn json_empty_report() {
    let out = JsonEmitter::new().render().unwrap();
    assert!(out.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["summary"]["classes"], 0);
    assert_eq!(value["classes"].as_array().unwrap().len(), 0);
    assert_eq!(value["members"].as_array().unwrap().len(), 0);
}

#[test]
fn json_groups_members_under_headers() {
    let mut em = JsonEmitter::new();
    em.package_header("org.opengis.referencing.crs");
    em.class_departure(&class("CoordinateReferenceSystem", "../crs/CoordinateReferenceSystem.html", reference("SC_CRS")));
    em.type_header(&header("MetaData", false));
    em.member_departure(&member("getLocale", reference("language")));
    em.member_departure(&member("getDimension", legacy()));
    assert_eq!(em.departure_count(), 3);
    assert_eq!(em.departures().member_count(), 2);

    let value: serde_json::Value = serde_json::from_str(&em.render().unwrap()).unwrap();
    let summary = &value["summary"];
    assert_eq!(summary["classes"], 1);
    assert_eq!(summary["members"], 2);
    assert_eq!(summary["significant"], 2);
    assert_eq!(summary["informational"], 1);

    let class = &value["classes"][0];
    assert_eq!(class["name"], "CoordinateReferenceSystem");
    assert_eq!(class["reference"]["provenance"], "reference");
    assert_eq!(class["reference"]["identifier"], "SC_CRS");

    let group = &value["members"][0];
    assert_eq!(group["name"], "MetaData");
    assert_eq!(group["code_list"], false);
    assert_eq!(group["members"][1]["reference"]["provenance"], "legacy");
    assert!(group["members"][1]["reference"].get("identifier").is_none());
}
