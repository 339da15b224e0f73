//! The normalized report model.
//!
//! Check handlers produce [`ReportLine`] values and never print anything
//! themselves; the [`crate::sink::OutputSink`] decides what is shown and how.

use colored::Color;

/// Color tag attached to a line's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Names and identifiers.
    Cyan,
    /// Healthy values.
    Green,
    /// Values worth a look.
    Yellow,
    /// Values that indicate a problem.
    Red,
    /// Secondary alarm color.
    Magenta,
    /// Terminal default foreground.
    Default,
}

impl Tone {
    /// Map a cluster health status to the tone of the same name.
    ///
    /// The status string is the color: `"green"` renders green and so on.
    /// Only the three statuses a cluster reports are accepted.
    #[must_use]
    pub fn from_status(status: &str) -> Option<Self> {
        match status {
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "red" => Some(Self::Red),
            _ => None,
        }
    }

    /// Terminal color for this tone, `None` for the default foreground.
    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            Self::Cyan => Some(Color::Cyan),
            Self::Green => Some(Color::Green),
            Self::Yellow => Some(Color::Yellow),
            Self::Red => Some(Color::Red),
            Self::Magenta => Some(Color::Magenta),
            Self::Default => None,
        }
    }
}

/// One line of a report.
///
/// A line with a key is a key/value line; a line without one is plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// Nesting depth, rendered as two spaces per level.
    pub indent: usize,
    /// Key for key/value lines.
    pub key: Option<String>,
    /// Value text, never colorized here.
    pub value: String,
    /// Color of the value, if any.
    pub tone: Option<Tone>,
    /// Verbosity level at which the line becomes visible.
    pub min_verbosity: u8,
}

impl ReportLine {
    /// A key/value line, visible at every verbosity level.
    pub fn kv(indent: usize, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            indent,
            key: Some(key.into()),
            value: value.into(),
            tone: None,
            min_verbosity: 0,
        }
    }

    /// A plain text line, visible at every verbosity level.
    pub fn text(indent: usize, value: impl Into<String>) -> Self {
        Self {
            indent,
            key: None,
            value: value.into(),
            tone: None,
            min_verbosity: 0,
        }
    }

    /// Set the value's tone.
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    /// Set the tone if one is given, keep the line uncolored otherwise.
    pub fn maybe_tone(mut self, tone: Option<Tone>) -> Self {
        self.tone = tone;
        self
    }

    /// Only show the line at `level` or above.
    pub fn at_level(mut self, level: u8) -> Self {
        self.min_verbosity = level;
        self
    }

    /// Whether this is a key/value line.
    #[must_use]
    pub fn is_kv(&self) -> bool {
        self.key.is_some()
    }
}
