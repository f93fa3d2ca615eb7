//! xbar/BitBar plugin output.
//!
//! One line per item: `<depth dashes><text> | key=value ...`. Submenu depth `d`
//! prefixes `"--".repeat(d)`; a separator is the prefix followed by `---`.
//! Commands are spread over `shell=<program>` and `param1..N=<arg>`.

use std::io::{self, Write};

use crate::menu::{MenuEntry, MenuItem};
use crate::util::TextLines;

const SEPARATOR: &str = "---";

/// Quote an attribute value when xbar would otherwise split or misread it.
pub fn attr_value(s: &str) -> String {
    if !s.is_empty()
        && !s
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '|' || c == '\\')
    {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' | '\r' => out.push(' '),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `|` starts the attribute list and a newline (or NUL) ends the item, so none may
/// appear in item text. Leading `-` would read as submenu depth or a separator and
/// becomes `‐` (U+2010).
fn item_text(s: &str) -> String {
    let mut leading = true;
    s.chars()
        .map(|c| {
            let out = match c {
                '-' if leading => '\u{2010}',
                '|' => '¦',
                '\n' | '\r' | '\0' => ' ',
                c => c,
            };
            leading = leading && c == '-';
            out
        })
        .collect()
}

fn item_line(item: &MenuItem, prefix: &str) -> String {
    let mut attrs: Vec<String> = Vec::new();
    if let Some(d) = item.dropdown {
        attrs.push(format!("dropdown={d}"));
    }
    if item.disabled {
        attrs.push("disabled=true".to_string());
    }
    if let Some(cmd) = &item.command {
        attrs.push(format!("shell={}", attr_value(&cmd.program)));
        for (i, a) in cmd.args.iter().enumerate() {
            attrs.push(format!("param{}={}", i + 1, attr_value(a)));
        }
    }
    if item.terminal {
        attrs.push("terminal=true".to_string());
    }

    let mut line = format!("{prefix}{}", item_text(&item.text));
    if !attrs.is_empty() {
        line.push_str(" | ");
        line.push_str(&attrs.join(" "));
    }
    line
}

fn push_entries(lines: &mut TextLines, entries: &[MenuEntry], depth: usize) {
    let prefix = "--".repeat(depth);
    for e in entries {
        match e {
            MenuEntry::Separator => {
                lines.push(format!("{prefix}{SEPARATOR}"));
            }
            MenuEntry::Item(item) => {
                lines.push(item_line(item, &prefix));
                if !item.submenu.is_empty() {
                    push_entries(lines, &item.submenu, depth + 1);
                }
            }
        }
    }
}

pub fn render_to_string(entries: &[MenuEntry]) -> io::Result<String> {
    let mut lines = TextLines::new();
    push_entries(&mut lines, entries, 0);
    lines.build_lf()
}

pub fn render<W: Write>(entries: &[MenuEntry], out: &mut W) -> io::Result<()> {
    let text = render_to_string(entries)?;
    out.write_all(text.as_bytes())?;
    out.flush()
}
