//! Minimal YAML reader for framework configuration files (`application.yaml`).
//!
//! Only block mappings with scalar leaves are understood. Nested mappings are
//! flattened into dotted keys (`quarkus: { http: { port: 8080 } }` becomes
//! `quarkus.http.port = 8080`). Sequences, anchors and flow collections are skipped.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YamlEntry {
    pub key: String,
    pub value: String,
    /// 1-based line of the scalar.
    pub line: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct YamlDocument {
    pub entries: Vec<YamlEntry>,
}

impl YamlDocument {
    /// Effective value of a flattened key; later entries win.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }
}

#[must_use]
pub fn parse(text: &str) -> YamlDocument {
    let mut entries = Vec::new();
    // (indent, key segment) of the enclosing mappings.
    let mut stack: Vec<(usize, String)> = Vec::new();
    // Lines nested deeper than this indent belong to a sequence and are skipped.
    let mut sequence_indent: Option<usize> = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed == "---" || trimmed == "..." {
            stack.clear();
            sequence_indent = None;
            continue;
        }

        let indent = raw_line.len() - raw_line.trim_start().len();
        if let Some(seq) = sequence_indent {
            if indent > seq {
                continue;
            }
            sequence_indent = None;
        }
        if trimmed.starts_with("- ") || trimmed == "-" {
            sequence_indent = Some(indent);
            continue;
        }

        let Some((raw_key, raw_value)) = split_mapping_line(trimmed) else {
            continue;
        };
        let key = unquote(raw_key.trim());
        if key.is_empty() {
            continue;
        }

        while stack.last().is_some_and(|(prev, _)| *prev >= indent) {
            stack.pop();
        }

        let value = strip_inline_comment(raw_value.trim());
        if value.is_empty() {
            stack.push((indent, key));
            continue;
        }
        if value.starts_with('[') || value.starts_with('{') || value.starts_with('&') {
            continue;
        }

        let mut full_key = stack
            .iter()
            .map(|(_, segment)| segment.as_str())
            .collect::<Vec<_>>()
            .join(".");
        if !full_key.is_empty() {
            full_key.push('.');
        }
        full_key.push_str(&key);

        entries.push(YamlEntry {
            key: full_key,
            value: unquote(value),
            line: line_no,
        });
    }

    YamlDocument { entries }
}

/// Splits `key: value` at the first `:` that is outside quotes and followed by
/// whitespace or end of line.
fn split_mapping_line(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    let mut quote: Option<u8> = None;
    for (i, &b) in bytes.iter().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b':' => {
                let next = bytes.get(i + 1);
                if next.is_none() || next.is_some_and(|n| *n == b' ' || *n == b'\t') {
                    return Some((&line[..i], &line[i + 1..]));
                }
            }
            None => {}
        }
    }
    None
}

fn strip_inline_comment(value: &str) -> &str {
    if let Some(end) = closing_quote(value) {
        return &value[..=end];
    }
    match value.find(" #") {
        Some(pos) => value[..pos].trim_end(),
        None => value,
    }
}

/// Byte index of the quote closing a scalar that starts with `"` or `'`.
fn closing_quote(value: &str) -> Option<usize> {
    let bytes = value.as_bytes();
    let quote = *bytes.first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if quote == b'"' => i += 2,
            b'\'' if quote == b'\'' && bytes.get(i + 1) == Some(&b'\'') => i += 2,
            b if b == quote => return Some(i),
            _ => i += 1,
        }
    }
    None
}

fn unquote(text: &str) -> String {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == b'\'' && last == b'\'' {
            return text[1..text.len() - 1].replace("''", "'");
        }
        if first == b'"' && last == b'"' {
            return text[1..text.len() - 1]
                .replace("\\\"", "\"")
                .replace("\\\\", "\\");
        }
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(doc: &YamlDocument) -> Vec<(&str, &str)> {
        doc.entries
            .iter()
            .map(|e| (e.key.as_str(), e.value.as_str()))
            .collect()
    }

    #[test]
    fn flattens_nested_mappings() {
        let text = "\
quarkus:
  http:
    port: 9090
    root-path: /api
  application:
    name: demo # trailing comment
";
        let doc = parse(text);
        assert_eq!(
            pairs(&doc),
            vec![
                ("quarkus.http.port", "9090"),
                ("quarkus.http.root-path", "/api"),
                ("quarkus.application.name", "demo"),
            ]
        );
        assert_eq!(doc.entries[0].line, 3);
    }

    #[test]
    fn quoted_profile_keys_and_values() {
        let text = "\
\"%dev\":
  quarkus:
    http:
      port: '8181'
greeting: \"hello: world\"
";
        let doc = parse(text);
        assert_eq!(doc.get("%dev.quarkus.http.port"), Some("8181"));
        assert_eq!(doc.get("greeting"), Some("hello: world"));
    }

    #[test]
    fn skips_sequences_and_flow_collections() {
        let text = "\
servers:
  - host: a
    port: 1
  - host: b
tags: [a, b]
after: yes
";
        let doc = parse(text);
        assert_eq!(pairs(&doc), vec![("after", "yes")]);
    }

    #[test]
    fn document_separator_resets_nesting() {
        let text = "a:\n  b: 1\n---\nc: 2\n";
        assert_eq!(pairs(&parse(text)), vec![("a.b", "1"), ("c", "2")]);
    }

    #[test]
    fn urls_are_not_split_on_colon() {
        let doc = parse("url: http://localhost:8080/q\n");
        assert_eq!(doc.get("url"), Some("http://localhost:8080/q"));
    }

    #[test]
    fn comments_after_quoted_scalars_are_dropped() {
        let text = "\
quarkus:
  http:
    port: \"9090\" # dev port
    root-path: '/it''s' # quoted
    host: \"a \\\" # b\"
";
        let doc = parse(text);
        assert_eq!(doc.get("quarkus.http.port"), Some("9090"));
        assert_eq!(doc.get("quarkus.http.root-path"), Some("/it's"));
        assert_eq!(doc.get("quarkus.http.host"), Some("a \" # b"));
    }
}
