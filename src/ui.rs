use termkit::{ReportLine, Tone};

/// Width of the rule under a section title.
const RULE_WIDTH: usize = 40;

/// Print an error message. Never colored, whatever the color setting.
pub fn error(msg: &str) {
    eprintln!("{}", error_line(msg));
}

fn error_line(msg: &str) -> String {
    format!("error: {msg}")
}

/// Section title followed by a rule
pub fn section(title: &str) -> [ReportLine; 2] {
    [
        ReportLine::text(0, title),
        ReportLine::text(0, "-".repeat(RULE_WIDTH)).tone(Tone::Cyan),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section() {
        let [title, rule] = section("Node Check");
        assert_eq!(title.value, "Node Check");
        assert_eq!(rule.value.len(), RULE_WIDTH);
        assert!(rule.value.chars().all(|c| c == '-'));
        assert!(!title.is_kv() && !rule.is_kv());
    }

    #[test]
    fn test_error_line_is_plain_with_colors_forced() {
        colored::control::set_override(true);
        let line = error_line("HTTP 503 fetching _cluster/health");
        assert_eq!(line, "error: HTTP 503 fetching _cluster/health");
        assert!(!line.contains('\u{1b}'));
    }
}
