// src/dom/parse.rs
//
// Tolerant scanner for saved page markup. Element structure and attributes
// are all the filler needs, so text nodes are dropped. Case-insensitive tags,
// quoted/unquoted attribute values, void and self-closed elements, comments
// and raw script/style blocks skipped.

use crate::core::sanitize::normalize_entities;
use crate::dom::tree::{NodeId, PageDoc};
use crate::error::SetupError;

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
    "source", "track", "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

pub fn parse_snapshot(html: &str) -> Result<PageDoc, SetupError> {
    let mut doc = PageDoc::new();
    let bytes = html.as_bytes();
    let mut stack: Vec<(String, NodeId)> = Vec::new();
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }
        if html[i..].starts_with("<!--") {
            i = match html[i + 4..].find("-->") {
                Some(j) => i + 4 + j + 3,
                None => bytes.len(),
            };
            continue;
        }
        if html[i..].starts_with("<!") || html[i..].starts_with("<?") {
            // doctype / processing junk
            i = skip_to_gt(html, i);
            continue;
        }
        if html[i..].starts_with("</") {
            let (name, after) = read_tag_name(html, i + 2);
            if !name.is_empty() {
                close_tag(&mut stack, &name);
            }
            i = skip_to_gt(html, after);
            continue;
        }

        let (name, after_name) = read_tag_name(html, i + 1);
        if name.is_empty() {
            // stray '<' in text
            i += 1;
            continue;
        }
        let (attrs, after_tag, self_closed) = read_attrs(html, after_name);

        let parent = stack.last().map(|(_, id)| *id);
        let attr_refs: Vec<(&str, &str)> =
            attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        let id = doc.add(&name, &attr_refs, parent);

        if self_closed || is_void(&name) {
            i = after_tag;
        } else if name == "script" || name == "style" {
            // raw content, scan straight to the closing tag
            let close = format!("</{name}");
            let lower = html[after_tag..].to_ascii_lowercase();
            i = match lower.find(&close) {
                Some(j) => skip_to_gt(html, after_tag + j),
                None => bytes.len(),
            };
        } else {
            stack.push((name, id));
            i = after_tag;
        }
    }

    if doc.is_empty() {
        return Err(SetupError::EmptyDocument);
    }
    Ok(doc)
}

/// Pop until the matching open tag is discarded; unclosed intermediates go
/// with it. A close with no matching open is ignored.
fn close_tag(stack: &mut Vec<(String, NodeId)>, name: &str) {
    if let Some(pos) = stack.iter().rposition(|(t, _)| t == name) {
        stack.truncate(pos);
    }
}

fn skip_to_gt(html: &str, from: usize) -> usize {
    match html[from..].find('>') {
        Some(j) => from + j + 1,
        None => html.len(),
    }
}

fn read_tag_name(html: &str, from: usize) -> (String, usize) {
    let bytes = html.as_bytes();
    let mut i = from;
    while i < bytes.len()
        && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-' || bytes[i] == b':')
    {
        i += 1;
    }
    (html[from..i].to_ascii_lowercase(), i)
}

fn read_attrs(html: &str, mut i: usize) -> (Vec<(String, String)>, usize, bool) {
    let bytes = html.as_bytes();
    let mut attrs = Vec::new();

    while i < bytes.len() {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }
        match bytes[i] {
            b'>' => return (attrs, i + 1, false),
            b'/' => {
                if i + 1 < bytes.len() && bytes[i + 1] == b'>' {
                    return (attrs, i + 2, true);
                }
                i += 1;
            }
            _ => {
                let start = i;
                while i < bytes.len()
                    && !matches!(bytes[i], b'=' | b'>' | b'/')
                    && !bytes[i].is_ascii_whitespace()
                {
                    i += 1;
                }
                if i == start {
                    i += 1;
                    continue;
                }
                let name = html[start..i].to_ascii_lowercase();

                while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                let mut value = s!();
                if i < bytes.len() && bytes[i] == b'=' {
                    i += 1;
                    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                        i += 1;
                    }
                    if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                        let quote = bytes[i];
                        i += 1;
                        let vstart = i;
                        while i < bytes.len() && bytes[i] != quote {
                            i += 1;
                        }
                        value = normalize_entities(&html[vstart..i]);
                        if i < bytes.len() {
                            i += 1;
                        }
                    } else {
                        let vstart = i;
                        while i < bytes.len()
                            && bytes[i] != b'>'
                            && !bytes[i].is_ascii_whitespace()
                        {
                            i += 1;
                        }
                        value = normalize_entities(&html[vstart..i]);
                    }
                }
                attrs.push((name, value));
            }
        }
    }
    (attrs, i, false)
}
