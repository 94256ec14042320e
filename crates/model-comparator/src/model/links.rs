//! Relative links from the report to per-type documentation pages.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that need percent-encoding in a relative path segment.
/// We keep alphanumeric, -, _, ., ~ and $ (nested type pages) untouched.
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Name of the report file, relative to the root namespace directory.
pub const REPORT_FILE: &str = "doc-files/departures-list.html";

/// Mints documentation hrefs relative to `<root>/doc-files/`.
pub struct LinkMinter {
    root_path: String,
    depth: usize,
}

impl LinkMinter {
    pub fn new(root_namespace: &str) -> Self {
        let segments: Vec<&str> = root_namespace
            .split('.')
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            root_path: segments.join("/"),
            depth: segments.len(),
        }
    }

    fn escape(value: &str) -> String {
        utf8_percent_encode(value, PATH_ENCODE_SET).to_string()
    }

    fn encode_path(qualified_name: &str) -> String {
        qualified_name
            .split('.')
            .map(Self::escape)
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Href from the report to the documentation page of a type.
    pub fn type_href(&self, qualified_name: &str) -> String {
        let path = Self::encode_path(qualified_name);
        if !self.root_path.is_empty() {
            if let Some(rest) = path
                .strip_prefix(self.root_path.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
            {
                return format!("../{rest}.html");
            }
        }
        format!("{}{path}.html", "../".repeat(self.depth + 1))
    }

    /// Default location of the report, relative to the source tree root.
    pub fn report_path(&self) -> String {
        if self.root_path.is_empty() {
            REPORT_FILE.to_string()
        } else {
            format!("{}/{REPORT_FILE}", self.root_path)
        }
    }
}
