use std::borrow::Cow;

use unicode_width::UnicodeWidthChar;

/// Indents `s` by `level` nesting units of two spaces each.
pub fn indent(s: &str, level: usize) -> String {
    format!("{}{}", "  ".repeat(level), s)
}

/// Removes ANSI escape sequences (CSI and OSC) from `s`.
///
/// Borrows when there is nothing to strip.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\x1b') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        match chars.next() {
            // CSI: parameters and intermediates end at a byte in @..~
            Some('[') => {
                for c in chars.by_ref() {
                    if ('\x40'..='\x7e').contains(&c) {
                        break;
                    }
                }
            }
            // OSC: terminated by BEL or ST (ESC \)
            Some(']') => {
                while let Some(c) = chars.next() {
                    if c == '\x07' {
                        break;
                    }
                    if c == '\x1b' {
                        chars.next();
                        break;
                    }
                }
            }
            // Two-byte escape (ESC c, ESC 7, ...) — drop both.
            _ => {}
        }
    }
    Cow::Owned(out)
}

/// Last line of `s` containing any non-whitespace, trimmed.
pub fn last_nonblank_line(s: &str) -> Option<&str> {
    s.lines().rev().map(str::trim).find(|line| !line.is_empty())
}

/// Shortens `s` to at most `max` visual columns, ending in `…` when
/// anything was cut.
///
/// Measures display width, not bytes or chars. Operates on plain text —
/// run [`strip_ansi`] first if the input may carry escape sequences.
pub fn truncate_to_width(s: &str, max: usize) -> Cow<'_, str> {
    let width: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max {
        return Cow::Borrowed(s);
    }
    if max == 0 {
        return Cow::Borrowed("");
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    Cow::Owned(out)
}
