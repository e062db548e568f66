//! Final SVG document assembly.

use std::fmt::Write;

use crate::card::Card;
use crate::params::CardParams;

/// Inputs of one composition. Output is a pure function of these values.
#[derive(Debug, Clone, Copy)]
pub struct Composition<'a> {
    pub card: Card,
    pub width: i64,
    pub height: i64,
    /// Inner markup of the upstream card.
    pub upstream: &'a str,
    /// Inner markup of the role decoration; empty means no overlay.
    pub role: &'a str,
    pub role_x: i64,
    pub role_y: i64,
}

impl<'a> Composition<'a> {
    pub fn new(params: &CardParams, upstream: &'a str, role: &'a str) -> Self {
        Self {
            card: params.card,
            width: params.width,
            height: params.height,
            upstream,
            role,
            role_x: params.role_x,
            role_y: params.role_y,
        }
    }
}

/// Render the composed SVG document.
pub fn compose(c: &Composition<'_>) -> String {
    let mut out = String::with_capacity(c.upstream.len() + c.role.len() + 512);

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "<svg width=\"{w}\" height=\"{h}\" xmlns=\"http://www.w3.org/2000/svg\">\n  \
         <rect x=\"0.5\" y=\"0.5\" rx=\"4.5\" height=\"{rect_h}\" width=\"{inner_w}\" \
         fill=\"#fffefe\" stroke=\"#e4e2e2\" stroke-opacity=\"1\"/>\n  <g>\n{upstream}\n  </g>",
        w = c.width,
        h = c.height,
        rect_h = c.card.rect_height(),
        inner_w = c.width - 1,
        upstream = c.upstream,
    );

    if !c.role.is_empty() {
        let _ = write!(
            out,
            "\n  <g transform=\"translate({x},{y})\">\n{role}\n  </g>",
            x = c.role_x,
            y = c.role_y,
            role = c.role,
        );
    }

    out.push_str("\n</svg>");
    out
}
