//! Renderer: serializes a segment list for the response
//!
//! The renderer walks the segments once, in order, and never reorders them.

use crate::types::{Emphasis, NarrationSegment, RenderMode};

/// Render segments in the requested mode
pub fn render(segments: &[NarrationSegment], mode: RenderMode) -> String {
    match mode {
        RenderMode::RichMarkup => render_markup(segments),
        RenderMode::PlainText => render_plain(segments),
    }
}

/// `<speak>` document with a prosody tag per phrase and a break after each
pub fn render_markup(segments: &[NarrationSegment]) -> String {
    let mut out = String::from("<speak>");
    for segment in segments {
        out.push_str("<prosody volume=\"loud\">");
        push_escaped(&mut out, &segment.text);
        out.push_str("</prosody>");
        push_break(&mut out, segment.pause_ms, segment.emphasis);
        if segment.emphasis == Emphasis::Strong {
            out.push('\n');
        }
    }
    out.push_str("</speak>");
    out
}

/// Phrase texts joined by single spaces
pub fn render_plain(segments: &[NarrationSegment]) -> String {
    segments
        .iter()
        .map(|segment| segment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_break(out: &mut String, pause_ms: u32, emphasis: Emphasis) {
    out.push_str("<break ");
    if pause_ms > 0 {
        out.push_str(&format!("time=\"{}ms\" ", pause_ms));
    }
    let strength = emphasis.strength_name();
    if !strength.is_empty() {
        out.push_str(&format!("strength=\"{}\" ", strength));
    }
    out.push_str("/>");
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
