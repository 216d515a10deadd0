//! Prints rendered lines straight to a terminal, outside any TUI frame.

use std::io::{self, Write};

use ratatui::{
    crossterm::{
        queue,
        style::{
            Attribute as CAttribute, Color as CColor, Print, SetAttribute, SetBackgroundColor,
            SetForegroundColor,
        },
    },
    style::{Modifier, Style},
    text::Line,
};

const ATTRIBUTES: [(Modifier, CAttribute); 6] = [
    (Modifier::BOLD, CAttribute::Bold),
    (Modifier::DIM, CAttribute::Dim),
    (Modifier::ITALIC, CAttribute::Italic),
    (Modifier::UNDERLINED, CAttribute::Underlined),
    (Modifier::REVERSED, CAttribute::Reverse),
    (Modifier::CROSSED_OUT, CAttribute::CrossedOut),
];

fn queue_style<W: Write>(w: &mut W, style: Style) -> io::Result<()> {
    queue!(w, SetAttribute(CAttribute::Reset))?;
    if let Some(fg) = style.fg {
        queue!(w, SetForegroundColor(fg.into()))?;
    }
    if let Some(bg) = style.bg {
        queue!(w, SetBackgroundColor(bg.into()))?;
    }
    for (modifier, attribute) in ATTRIBUTES {
        if style.add_modifier.contains(modifier) {
            queue!(w, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

/// Write `lines` with their colours and modifiers as escape sequences, one
/// terminal line each. Styles are reset at the end of every line.
pub fn write_styled<W: Write>(w: &mut W, lines: &[Line<'_>]) -> io::Result<()> {
    for line in lines {
        for span in &line.spans {
            queue_style(w, line.style.patch(span.style))?;
            queue!(w, Print(span.content.as_ref()))?;
        }
        queue!(
            w,
            SetForegroundColor(CColor::Reset),
            SetBackgroundColor(CColor::Reset),
            SetAttribute(CAttribute::Reset),
            Print("\n"),
        )?;
    }
    w.flush()
}

/// Write only the text of `lines`.
pub fn write_plain<W: Write>(w: &mut W, lines: &[Line<'_>]) -> io::Result<()> {
    for line in lines {
        for span in &line.spans {
            w.write_all(span.content.as_bytes())?;
        }
        w.write_all(b"\n")?;
    }
    w.flush()
}

pub fn write_lines<W: Write>(w: &mut W, lines: &[Line<'_>], styled: bool) -> io::Result<()> {
    if styled {
        write_styled(w, lines)
    } else {
        write_plain(w, lines)
    }
}
