//! Inner-markup extraction for SVG documents.
//!
//! This is a text-offset slice, not a markup parser. It has no notion of nested
//! `<svg>` elements, comments or CDATA: it takes everything between the first
//! opening `<svg ...>` tag and the last `</svg>` in the input. Upstream badge
//! markup is simple enough for that to hold.

const OPEN_TAG: &[u8] = b"<svg";
const CLOSE_TAG: &[u8] = b"</svg>";

/// Return the inner content of the outermost `<svg>` element of `text`.
///
/// Tag matching is ASCII case-insensitive. Whenever the markup does not look
/// like `<svg ...> ... </svg>` (no opening tag, unterminated opening tag, no
/// closing tag, or a closing tag that does not follow the opening one) the
/// input is returned unchanged.
pub fn extract_inner_fragment(text: &str) -> &str {
    let bytes = text.as_bytes();

    let Some(open) = find_ignore_ascii_case(bytes, OPEN_TAG) else {
        return text;
    };
    let Some(gt) = bytes[open..].iter().position(|&b| b == b'>') else {
        return text;
    };
    let content_start = open + gt + 1;

    match rfind_ignore_ascii_case(bytes, CLOSE_TAG) {
        Some(close) if close > content_start => &text[content_start..close],
        _ => text,
    }
}

fn find_ignore_ascii_case(hay: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > hay.len() {
        return None;
    }
    hay.windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
}

fn rfind_ignore_ascii_case(hay: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > hay.len() {
        return None;
    }
    hay.windows(needle.len())
        .rposition(|w| w.eq_ignore_ascii_case(needle))
}
