use crate::character_sets::classify_form_byte;
use crate::compat::{Cow, String};
use crate::multi_map::QueryMultiMap;
use percent_encoding::percent_decode_str;

/// Decode a query string (without the leading `?`) into a multi-map.
///
/// Pairs are split on `&` or `;`, empty segments are skipped and a pair
/// without `=` becomes a key with an empty value. Decoding never fails:
/// malformed percent sequences pass through literally.
pub fn decode_query(query: &str) -> QueryMultiMap {
    let mut map = QueryMultiMap::new();
    let bytes = query.as_bytes();
    let mut start = 0;

    while start <= bytes.len() {
        let end = memchr::memchr2(b'&', b';', &bytes[start..])
            .map_or(bytes.len(), |pos| start + pos);
        let pair = &query[start..end];
        if !pair.is_empty() {
            let (key, value) = match memchr::memchr(b'=', pair.as_bytes()) {
                Some(pos) => (&pair[..pos], &pair[pos + 1..]),
                None => (pair, ""),
            };
            map.append(&decode_component(key), &decode_component(value));
        }
        start = end + 1;
    }

    map
}

/// Encode a multi-map as a query string (without the leading `?`).
///
/// Keys are emitted in map order, values in insertion order; a key with N
/// values emits N `key=value` pairs joined by `&`. An empty map encodes to
/// an empty string so callers can drop the `?` separator entirely.
pub fn encode_query(map: &QueryMultiMap) -> String {
    let mut result = String::new();
    for (key, values) in map.iter() {
        for value in values {
            if !result.is_empty() {
                result.push('&');
            }
            encode_component_into(&mut result, key);
            result.push('=');
            encode_component_into(&mut result, value);
        }
    }
    result
}

/// Percent-encode one key or value directly into the output buffer.
/// Hex digits are emitted in lowercase.
fn encode_component_into(buffer: &mut String, input: &str) {
    use core::fmt::Write;

    // Reserve space to reduce reallocations
    buffer.reserve(input.len());

    for byte in input.bytes() {
        match classify_form_byte(byte) {
            1 => buffer.push(byte as char),
            2 => buffer.push('+'),
            _ => {
                let _ = write!(buffer, "%{byte:02x}");
            }
        }
    }
}

/// Decode one key or value component.
/// `+` means space in form encoding and is rewritten before percent
/// decoding so an escaped `%2b` still comes back as a literal `+`.
fn decode_component(input: &str) -> String {
    let spaced = if memchr::memchr(b'+', input.as_bytes()).is_some() {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    };

    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
