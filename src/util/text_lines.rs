use std::io;

/// Line-oriented output assembled from single-line fragments (one menu row each).
///
/// Invariants:
/// - A pushed line must not contain `\n`, `\r`, or `\0`; the host splits its input on newlines,
///   so an embedded one would silently turn into an extra menu row.
/// - `build_lf()` joins lines with `\n` and ends non-empty output with `\n`.
#[derive(Debug, Default)]
pub struct TextLines {
    lines: Vec<String>,
}

impl TextLines {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn push(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn build_lf(&self) -> io::Result<String> {
        if let Some(i) = self
            .lines
            .iter()
            .position(|l| l.contains(&['\n', '\r', '\0'][..]))
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("menu line {i} contains a newline or NUL"),
            ));
        }
        if self.lines.is_empty() {
            return Ok(String::new());
        }
        let mut out = self.lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}
