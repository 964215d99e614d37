/// Output ceiling, in UTF-16 code units, for encoded and sanitized text.
pub const DEFAULT_MAX_LENGTH: usize = 500;

/// The entity references this encoder emits.
const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#x27;"];

/// HTML encoding utilities
pub struct XssEncoder;

impl XssEncoder {
    /// Encode HTML-significant characters and cap the result at
    /// [`DEFAULT_MAX_LENGTH`] code units.
    pub fn encode_entities(text: &str) -> String {
        let encoded = Self::encode_html(text);
        truncate_encoded(&encoded, DEFAULT_MAX_LENGTH).to_string()
    }

    /// Encode `&`, `<`, `>`, `"` and `'` in a single pass.
    ///
    /// Every character is visited once, so the `&` of an entity produced here
    /// is never encoded again.
    pub fn encode_html(text: &str) -> String {
        let mut encoded = String::with_capacity(text.len());
        for c in text.chars() {
            push_encoded(&mut encoded, c);
        }
        encoded
    }

    /// Like [`encode_html`](Self::encode_html), but an `&` that already starts
    /// one of the entities this encoder emits is copied through untouched.
    ///
    /// Encoding text produced by this function a second time is a no-op.
    pub fn encode_text(text: &str) -> String {
        let mut encoded = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            if let Some(entity) = entity_at(rest) {
                encoded.push_str(entity);
                rest = &rest[entity.len()..];
                continue;
            }
            push_encoded(&mut encoded, c);
            rest = &rest[c.len_utf8()..];
        }

        encoded
    }
}

fn push_encoded(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#x27;"),
        _ => out.push(c),
    }
}

fn entity_at(text: &str) -> Option<&'static str> {
    if !text.starts_with('&') {
        return None;
    }
    ENTITIES.iter().copied().find(|entity| text.starts_with(entity))
}

/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Longest prefix of encoded `text` that fits in `max_units` UTF-16 code units.
///
/// Entities and characters are kept or dropped whole, so the prefix never ends
/// in a dangling `&am` or half a surrogate pair.
pub fn truncate_encoded(text: &str, max_units: usize) -> &str {
    let mut units = 0;
    let mut end = 0;
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        let token = entity_at(rest).map_or(c.len_utf8(), str::len);
        let token_units = utf16_len(&rest[..token]);
        if units + token_units > max_units {
            break;
        }
        units += token_units;
        end += token;
        rest = &rest[token..];
    }

    &text[..end]
}
