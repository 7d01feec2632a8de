//! A small parser for Java `.properties` files, as read by MicroProfile Config.
//!
//! The goal is framework tooling support rather than perfect spec compliance:
//! logical lines (with `\` continuations), `=`/`:`/whitespace separators,
//! comments and the usual escapes are handled. Quarkus profile keys
//! (`%dev.quarkus.http.port`) are kept verbatim; see [`split_profile`].

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyEntry {
    pub key: String,
    pub value: String,
    /// 1-based line on which the logical line started.
    pub line: u32,
}

impl PropertyEntry {
    /// Profile the entry is scoped to (`%dev.foo` -> `dev`).
    pub fn profile(&self) -> Option<&str> {
        split_profile(&self.key).0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertiesFile {
    pub entries: Vec<PropertyEntry>,
}

impl PropertiesFile {
    #[must_use]
    pub fn by_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a PropertyEntry> + 'a {
        self.entries.iter().filter(move |e| e.key == key)
    }

    /// Effective value of `key`: the last occurrence wins, like `java.util.Properties`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }
}

/// Splits a Quarkus profile prefix off a property key.
///
/// `%dev.quarkus.http.port` -> `(Some("dev"), "quarkus.http.port")`. Keys without a
/// well-formed `%profile.` prefix are returned unchanged.
pub fn split_profile(key: &str) -> (Option<&str>, &str) {
    let Some(rest) = key.strip_prefix('%') else {
        return (None, key);
    };
    match rest.split_once('.') {
        Some((profile, name)) if !profile.is_empty() && !name.is_empty() => (Some(profile), name),
        _ => (None, key),
    }
}

/// Builds the profile-scoped form of `key` (`dev`, `foo` -> `%dev.foo`).
pub fn profiled_key(profile: &str, key: &str) -> String {
    format!("%{profile}.{key}")
}

struct LogicalLine {
    bytes: Vec<u8>,
    line: u32,
}

/// Parse a `.properties` file into key/value entries, in file order.
#[must_use]
pub fn parse(text: &str) -> PropertiesFile {
    let bytes = text.as_bytes();
    let mut offset = 0usize;
    let mut line = 1u32;
    let mut entries = Vec::new();

    while offset < bytes.len() {
        let start = offset;
        let logical = read_logical_line(bytes, &mut offset, &mut line);
        if let Some((key, value)) = split_key_value(&logical.bytes) {
            entries.push(PropertyEntry {
                key,
                value,
                line: logical.line,
            });
        }

        // Ensure we always make progress even on pathological inputs.
        if offset == start {
            offset += 1;
        }
    }

    PropertiesFile { entries }
}

fn read_logical_line(bytes: &[u8], offset: &mut usize, line: &mut u32) -> LogicalLine {
    let first_line = *line;
    let mut out = Vec::new();

    loop {
        let segment_start = *offset;
        let mut line_end = segment_start;
        while line_end < bytes.len() && bytes[line_end] != b'\n' {
            line_end += 1;
        }

        let mut content_end = line_end;
        if content_end > segment_start && bytes[content_end - 1] == b'\r' {
            content_end -= 1;
        }

        let segment = &bytes[segment_start..content_end];
        // Comment lines never continue, even when they end with `\`.
        let is_comment = out.is_empty()
            && segment
                .iter()
                .find(|b| !is_whitespace(**b))
                .is_some_and(|b| *b == b'#' || *b == b'!');
        let continues = !is_comment && ends_with_unescaped_backslash(segment);
        let copy_end = if continues {
            segment.len() - 1
        } else {
            segment.len()
        };
        out.extend_from_slice(&segment[..copy_end]);

        *offset = if line_end < bytes.len() {
            *line += 1;
            line_end + 1
        } else {
            line_end
        };

        if !continues || *offset >= bytes.len() {
            break;
        }

        // Continuation: leading whitespace of the next physical line is dropped.
        while *offset < bytes.len() && is_whitespace(bytes[*offset]) {
            *offset += 1;
        }
    }

    LogicalLine {
        bytes: out,
        line: first_line,
    }
}

fn ends_with_unescaped_backslash(line: &[u8]) -> bool {
    line.iter().rev().take_while(|b| **b == b'\\').count() % 2 == 1
}

fn split_key_value(line: &[u8]) -> Option<(String, String)> {
    let mut i = 0usize;
    while i < line.len() && is_whitespace(line[i]) {
        i += 1;
    }

    if i >= line.len() || line[i] == b'#' || line[i] == b'!' {
        return None;
    }

    let key_start = i;
    while i < line.len() {
        match line[i] {
            b'\\' => i += 2,
            b'=' | b':' => break,
            b if is_whitespace(b) => break,
            _ => i += 1,
        }
    }
    let key_end = i.min(line.len());
    i = key_end;

    while i < line.len() && is_whitespace(line[i]) {
        i += 1;
    }
    if i < line.len() && (line[i] == b'=' || line[i] == b':') {
        i += 1;
    }
    while i < line.len() && is_whitespace(line[i]) {
        i += 1;
    }

    Some((unescape(&line[key_start..key_end]), unescape(&line[i..])))
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\x0C')
}

fn unescape(bytes: &[u8]) -> String {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        i += 1;
        let Some(&escaped) = bytes.get(i) else {
            break;
        };

        match escaped {
            b't' => out.push(b'\t'),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b'f' => out.push(b'\x0C'),
            b'u' => match decode_unicode_escape(bytes.get(i + 1..i + 5)) {
                Some(ch) => {
                    let mut buf = [0u8; 4];
                    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                    i += 4;
                }
                None => out.push(b'u'),
            },
            other => out.push(other),
        }
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn decode_unicode_escape(hex: Option<&[u8]>) -> Option<char> {
    let hex = std::str::from_utf8(hex?).ok()?;
    char::from_u32(u32::from_str_radix(hex, 16).ok()?)
}
