//! Rendering of report lines to a text stream.

use std::io::{self, Write};

use colored::{Color, Colorize};

use crate::report::ReportLine;

/// Colors cycled through in rainbow mode, one per character.
pub const RAINBOW: [Color; 8] = [
    Color::Red,
    Color::BrightRed,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
    Color::BrightMagenta,
];

/// Rendering options, fixed for the lifetime of a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkOptions {
    /// Wrap toned values in their color.
    pub color: bool,
    /// Per-character rainbow coloring of every value, overrides `color`.
    pub rainbow: bool,
    /// Verbosity threshold.
    pub verbose: u8,
    /// Show every line and the debug channel.
    pub debug: bool,
    /// Separator between key and value.
    pub separator: String,
}

impl Default for SinkOptions {
    fn default() -> Self {
        Self {
            color: false,
            rainbow: false,
            verbose: 0,
            debug: false,
            separator: ":".to_string(),
        }
    }
}

/// Writes report lines, applying verbosity gating, coloring, key/value
/// joining and indentation.
///
/// Write errors are ignored: the sink targets a local terminal stream.
pub struct OutputSink<W: Write> {
    out: W,
    options: SinkOptions,
}

impl OutputSink<io::Stdout> {
    /// A sink writing to standard output.
    pub fn stdout(options: SinkOptions) -> Self {
        Self::new(io::stdout(), options)
    }
}

impl<W: Write> OutputSink<W> {
    /// A sink writing to `out`.
    pub fn new(out: W, options: SinkOptions) -> Self {
        Self { out, options }
    }

    /// Consume the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Whether `line` passes the verbosity gate. Level 0 lines always do.
    pub fn is_visible(&self, line: &ReportLine) -> bool {
        self.options.debug || self.options.verbose >= line.min_verbosity
    }

    /// Render one line to text, without the trailing newline.
    pub fn format_line(&self, line: &ReportLine) -> String {
        let value = self.paint(line);
        let body = match &line.key {
            Some(key) => format!("{key}{}{value}", self.options.separator),
            None => value,
        };
        format!("{}{body}", "  ".repeat(line.indent))
    }

    /// Render every visible line, in order.
    pub fn render(&mut self, lines: &[ReportLine]) {
        for line in lines {
            if self.is_visible(line) {
                let text = self.format_line(line);
                let _ = writeln!(self.out, "{text}");
            }
        }
    }

    /// Emit `count` blank lines.
    pub fn clear(&mut self, count: usize) {
        for _ in 0..count {
            let _ = writeln!(self.out);
        }
    }

    /// Emit a diagnostic line, only in debug mode.
    pub fn debug(&mut self, message: &str) {
        if self.options.debug {
            let _ = writeln!(self.out, "DEBUG: {message}");
        }
    }

    fn paint(&self, line: &ReportLine) -> String {
        if self.options.rainbow {
            return rainbow(&line.value);
        }
        match line.tone.and_then(|tone| tone.color()) {
            Some(color) if self.options.color => line.value.color(color).to_string(),
            _ => line.value.clone(),
        }
    }
}

/// Color each character of `text` with the next rainbow color, restarting
/// the cycle every [`RAINBOW`]`.len()` characters.
pub fn rainbow(text: &str) -> String {
    text.chars()
        .enumerate()
        .map(|(i, ch)| ch.to_string().color(rainbow_color(i)).to_string())
        .collect()
}

/// Rainbow color of the character at `position`.
pub fn rainbow_color(position: usize) -> Color {
    RAINBOW[position % RAINBOW.len()]
}
