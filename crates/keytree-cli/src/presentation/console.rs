use keytree_engine::{Annotation, RenderedLine};
use owo_colors::{AnsiColors, OwoColorize};
use std::io::{self, Write};

/// Writes rendered tree lines to a terminal or pipe.
///
/// With color on, labels are blue, types yellow and TTLs red. Glyphs and
/// values are never styled.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleView {
    colored: bool,
}

impl ConsoleView {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    pub fn write_line<W: Write + ?Sized>(&self, out: &mut W, line: &RenderedLine) -> io::Result<()> {
        if !self.colored {
            return writeln!(out, "{}", line);
        }

        write!(
            out,
            "{}{}{}",
            line.leading,
            line.branch,
            self.paint(&line.label, AnsiColors::Blue)
        )?;
        if let Some(annotation) = &line.annotation {
            let styled = Annotation {
                kind: self.paint(&annotation.kind, AnsiColors::Yellow),
                ttl: self.paint(&annotation.ttl, AnsiColors::Red),
                value: annotation.value.clone(),
            };
            write!(out, " {}", styled)?;
        }
        writeln!(out)
    }

    // empty fields stay empty so trailing-space trimming still applies
    fn paint(&self, text: &str, color: AnsiColors) -> String {
        if text.is_empty() {
            String::new()
        } else {
            text.color(color).to_string()
        }
    }
}
