//! Accepted name transformations between reference identifiers and
//! implementation names.
//!
//! Every function here is pure. A comparison returns `true` when the
//! implementation name is an accepted rendering of the reference name, and
//! `false` when the difference is significant.

use std::borrow::Cow;

/// What the comparator knows about a declared type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeShape {
    pub exception: bool,
    pub code_list: bool,
}

/// What the comparator knows about a member's return or value type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueShape {
    pub boolean: bool,
    /// Arrays, collections, maps and the other container-like types.
    pub multi_valued: bool,
}

/// Drop a two upper-case letters prefix followed by `_` (`MD_`, `CS_`, ...).
pub fn drop_prefix(name: &str) -> &str {
    let mut chars = name.chars();
    let prefixed = name.chars().count() >= 4
        && chars.next().is_some_and(char::is_uppercase)
        && chars.next().is_some_and(char::is_uppercase)
        && chars.next() == Some('_');
    if prefixed {
        chars.as_str()
    } else {
        name
    }
}

/// Lower-case the first character unless the second one is upper-case too,
/// in which case the name starts with an acronym and is left untouched.
pub fn first_char_as_lower_case(name: &str) -> Cow<'_, str> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if first.is_uppercase() && second.is_lowercase() => {
            let mut lowered: String = first.to_lowercase().collect();
            lowered.push_str(&name[first.len_utf8()..]);
            Cow::Owned(lowered)
        }
        _ => Cow::Borrowed(name),
    }
}

/// English plural of a reference name.
///
/// A single trailing `s` is assumed to be plural already.
pub fn pluralize(name: &str) -> String {
    let mut chars = name.chars().rev();
    let (Some(last), previous) = (chars.next(), chars.next()) else {
        return String::new();
    };
    match last {
        'y' => format!("{}ies", &name[..name.len() - 1]),
        's' if previous != Some('s') => name.to_string(),
        's' | 'h' | 'x' => format!("{name}es"),
        _ => format!("{name}s"),
    }
}

/// Remove the `uses` or `includes` prefix of association roles.
pub fn strip_association_prefix(name: &str) -> Cow<'_, str> {
    if let Some(rest) = name.strip_prefix("uses") {
        first_char_as_lower_case(rest)
    } else if let Some(rest) = name.strip_prefix("includes") {
        first_char_as_lower_case(rest)
    } else {
        Cow::Borrowed(name)
    }
}

/// Rewrite a reference code name into the upper-case constant convention.
///
/// Whitespace is dropped. An underscore goes before every upper-case letter
/// that follows a lower-case one, and between letters and non-letters, except
/// before a final `D` that follows a digit (`1D`, `2D`, `3D`).
pub fn code_constant_name(reference: &str) -> String {
    let reference = first_char_as_lower_case(drop_prefix(reference));
    let chars: Vec<char> = reference.chars().collect();
    let last = chars.len().saturating_sub(1);
    let mut buffer = String::with_capacity(reference.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        if i != 0 {
            let p = chars[i - 1];
            let boundary = (c.is_uppercase() && p.is_lowercase())
                || c.is_alphabetic() != p.is_alphabetic();
            if boundary && !(i == last && p.is_numeric() && c == 'D') {
                buffer.push('_');
            }
        }
        buffer.extend(c.to_uppercase());
    }
    buffer
}

/// Compare a type name with its reference identifier.
pub fn compare_class_name(implementation: &str, reference: &str, shape: TypeShape) -> bool {
    let mut reference = drop_prefix(reference).to_string();
    if shape.exception {
        reference.push_str("Exception");
    }
    if shape.code_list {
        if implementation == reference {
            return true;
        }
        if reference.ends_with("Code") {
            reference.truncate(reference.len() - 4);
        }
    }
    implementation == reference
}

/// Compare a method name with its reference identifier.
pub fn compare_method_name(implementation: &str, reference: &str, shape: ValueShape) -> bool {
    let reference = strip_association_prefix(reference);
    let lower_case_start = reference.chars().next().is_some_and(char::is_lowercase);

    let accessor = if shape.boolean {
        implementation
            .strip_prefix("is")
            .filter(|_| !reference.starts_with("is"))
    } else {
        ["get", "set"].iter().find_map(|&prefix| {
            implementation
                .strip_prefix(prefix)
                .filter(|_| !reference.starts_with(prefix))
        })
    };
    let implementation = match accessor {
        Some(rest) if lower_case_start => first_char_as_lower_case(rest),
        Some(rest) => Cow::Borrowed(rest),
        None => Cow::Borrowed(implementation),
    };

    if *implementation == *reference {
        return true;
    }
    if shape.multi_valued {
        return *implementation == pluralize(&reference);
    }
    false
}

/// Compare a code list constant with its reference identifier.
pub fn compare_code_name(implementation: &str, reference: &str) -> bool {
    code_constant_name(reference) == implementation
}
