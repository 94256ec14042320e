use crate::comparison::departures::{ClassDeparture, MemberDeparture, TypeHeader};
use crate::extraction::identifier::ReferenceIdentifier;

use super::ReportEmitter;

const CLASSES_PREAMBLE: &[&str] = &[
    "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\">",
    "<HTML>",
    "  <HEAD>",
    "    <TITLE>Significant name changes between GeoAPI and OGC models</TITLE>",
    "  </HEAD>",
    "  <BODY>",
    "  <H1>Significant name changes for classes</H1>",
    "  <P>This list do not includes the following changes:</P>",
    "  <UL>",
    "    <LI>Omission of 2 letters prefix (<CODE>MD_</CODE>, <CODE>RS_</CODE>, etc...)</LI>",
    "    <LI>Omission of <CODE>Code</CODE> suffix for code list</LI>",
    "    <LI>Addition of <CODE>Exception</CODE> suffix for exceptions</LI>",
    "  </UL>",
    "  <TABLE cellpadding='0' cellspacing='0'>",
    "  <TR><TH bgcolor='#CCCCFF'>GeoAPI name</TH><TH bgcolor='#CCCCFF'>ISO name</TH></TR>",
];

// The member table header keeps the attribute misplaced on the closing TH so
// that reports stay byte-identical to the published ones.
const MEMBERS_PREAMBLE: &[&str] = &[
    "<P>&nbsp;</P>",
    "<HR>",
    "<P>&nbsp;</P>",
    "  <H1>Significant name changes for operations, attributes or codes</H1>",
    "  <P>This list do not includes the following changes:</P>",
    "  <UL>",
    "    <LI>Omission of 2 letters prefix (<CODE>MD_</CODE>, <CODE>RS_</CODE>, etc...)</LI>",
    "    <LI>Omission of <CODE>uses</CODE> or <CODE>includes</CODE> prefixes for associations</LI>",
    "    <LI>Addition of <CODE>get</CODE> or <CODE>is</CODE> prefix</LI>",
    "    <LI>Plural form for methods returning an array or a collection</LI>",
    "    <LI>Code list elements in upper case</LI>",
    "  </UL>",
    "  <TABLE cellpadding='0' cellspacing='0'>",
    "  <TR><TH bgcolor='#CCCCFF'>GeoAPI name</TH bgcolor='#CCCCFF'><TH>ISO name</TH></TR>",
];

/// HTML emitter producing the two-table departures list.
///
/// Class rows and member rows go to separate buffers, concatenated by
/// [`render`](Self::render).
pub struct HtmlEmitter {
    classes: String,
    members: String,
    count: u64,
}

impl Default for HtmlEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlEmitter {
    pub fn new() -> Self {
        let mut classes = String::new();
        let mut members = String::new();
        for line in CLASSES_PREAMBLE {
            push_line(&mut classes, line);
        }
        for line in MEMBERS_PREAMBLE {
            push_line(&mut members, line);
        }
        Self {
            classes,
            members,
            count: 0,
        }
    }

    /// The complete document.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.classes.len() + self.members.len() + 64);
        out.push_str(&self.classes);
        push_line(&mut out, "  </TABLE>");
        out.push_str(&self.members);
        push_line(&mut out, "  </TABLE>");
        push_line(&mut out, "  </BODY>");
        push_line(&mut out, "</HTML>");
        out
    }

    /// Escape text for HTML element content and attribute values.
    fn escape(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                _ => out.push(c),
            }
        }
        out
    }

    /// Second cell of a row. Legacy and extension placeholders are muted.
    fn reference_cell(out: &mut String, reference: &ReferenceIdentifier) {
        let display = Self::escape(reference.display());
        out.push_str("<TD><CODE>&nbsp;&nbsp;");
        if reference.is_informational() {
            out.push_str("</CODE><FONT SIZE='-1' COLOR='#808080'>");
            out.push_str(&display);
            out.push_str("</FONT></TD>");
        } else {
            out.push_str(&display);
            out.push_str("</CODE></TD>");
        }
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

impl ReportEmitter for HtmlEmitter {
    fn package_header(&mut self, package: &str) {
        push_line(&mut self.classes, "  <TR><TD>&nbsp;</TD></TR>");
        self.classes
            .push_str("  <TR><TD bgcolor='#DDDDFF'><STRONG>Package&nbsp; <CODE>");
        self.classes.push_str(&Self::escape(package));
        push_line(&mut self.classes, "</CODE></STRONG></TD></TR>");
    }

    fn class_departure(&mut self, departure: &ClassDeparture) {
        let out = &mut self.classes;
        out.push_str("  <TR><TD><CODE><A HREF=\"");
        out.push_str(&Self::escape(&departure.href));
        out.push_str("\">");
        out.push_str(&Self::escape(&departure.name));
        out.push_str("</A></CODE></TD>");
        Self::reference_cell(out, &departure.reference);
        push_line(out, "</TR>");
        self.count += 1;
    }

    fn type_header(&mut self, header: &TypeHeader) {
        let out = &mut self.members;
        push_line(out, "  <TR><TD>&nbsp;</TD></TR>");
        out.push_str("  <TR><TD bgcolor='#DDDDFF'><STRONG>");
        out.push_str(if header.code_list { "Code list" } else { "Interface" });
        out.push_str("&nbsp; <CODE><A HREF=\"");
        out.push_str(&Self::escape(&header.href));
        out.push_str("\">");
        out.push_str(&Self::escape(&header.name));
        push_line(out, "</A></CODE></STRONG></TD></TR>");
    }

    fn member_departure(&mut self, departure: &MemberDeparture) {
        let out = &mut self.members;
        out.push_str("  <TR><TD><CODE>");
        out.push_str(&Self::escape(&departure.name));
        out.push_str("</CODE></TD>");
        Self::reference_cell(out, &departure.reference);
        push_line(out, "</TR>");
        self.count += 1;
    }

    fn departure_count(&self) -> u64 {
        self.count
    }
}
