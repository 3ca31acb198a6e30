//! Placeholder substitution
//!
//! Templates use `{name}` placeholders, where `name` is made of ASCII
//! letters, digits and underscores. `{{` and `}}` produce literal braces.
//! Any other brace is copied through unchanged.

use std::collections::BTreeMap;

use crate::domain::errors::DomainError;

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Split a template into literal text and placeholder names.
///
/// Only ASCII bytes are used as cut points, so every slice stays on a
/// char boundary.
fn parse(template: &str) -> Vec<Segment<'_>> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' | b'}' if bytes.get(i + 1) == Some(&bytes[i]) => {
                // Keep one brace of the escaped pair
                segments.push(Segment::Literal(&template[literal_start..=i]));
                i += 2;
                literal_start = i;
            }
            b'{' => {
                let name_start = i + 1;
                let mut name_end = name_start;
                while name_end < bytes.len() && is_name_byte(bytes[name_end]) {
                    name_end += 1;
                }

                if name_end > name_start && bytes.get(name_end) == Some(&b'}') {
                    if literal_start < i {
                        segments.push(Segment::Literal(&template[literal_start..i]));
                    }
                    segments.push(Segment::Placeholder(&template[name_start..name_end]));
                    i = name_end + 1;
                    literal_start = i;
                } else {
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }

    if literal_start < bytes.len() {
        segments.push(Segment::Literal(&template[literal_start..]));
    }

    segments
}

/// Placeholder names in the order they appear, repeats included
pub fn placeholders(template: &str) -> Vec<&str> {
    parse(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Substitute every placeholder with its value from `variables`.
///
/// Fails with `MissingVariable` naming the first placeholder (in template
/// order) that has no value. Unreferenced variables are ignored and values
/// are inserted verbatim.
pub fn render_template(
    template: &str,
    variables: &BTreeMap<String, String>,
) -> Result<String, DomainError> {
    let segments = parse(template);

    if let Some(missing) = segments.iter().find_map(|segment| match segment {
        Segment::Placeholder(name) if !variables.contains_key(*name) => Some(*name),
        _ => None,
    }) {
        return Err(DomainError::MissingVariable(missing.to_string()));
    }

    let mut rendered = String::with_capacity(template.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => rendered.push_str(text),
            Segment::Placeholder(name) => {
                if let Some(value) = variables.get(name) {
                    rendered.push_str(value);
                }
            }
        }
    }

    Ok(rendered)
}
