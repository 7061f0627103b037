use smurfify::{Decision, LineDetails, Reason};
use std::fmt::Write;

mod ansi {
    use smurfify::Reason;

    const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
    const MAGENTA: &str = "\x1b[35m";

    /// Escape codes, or plain text when output is not a terminal.
    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, code: &str) -> String {
            if self.enabled { format!("{code}{}{RESET}", s.as_ref()) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }

        /// Colour keyed to why a word was (not) replaced.
        pub fn reason(&self, reason: &Reason, label: impl AsRef<str>) -> String {
            let code = match reason {
                Reason::Lexicon { .. } => BLUE,
                Reason::Chaos { .. } => MAGENTA,
                Reason::Unmatched => DIM,
                Reason::Suppressed { .. } => YELLOW,
            };
            self.paint(label, code)
        }
    }
}

/// Render the `--explain` report for one line.
pub fn render_line(input: &str, output: &str, details: &LineDetails, color: bool) -> String {
    let palette = ansi::Palette::new(color);
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", palette.bold(palette.paint(format!("⚙  Smurfing: \"{}\"", input), ansi::CYAN)));

    let _ = writeln!(out, "\n{}", palette.paint("━━━ Words ━━━", ansi::GRAY));
    if details.decisions.is_empty() {
        let _ = writeln!(out, "{}", palette.dim("  No words in this line"));
    }
    for (idx, decision) in details.decisions.iter().enumerate() {
        let _ = writeln!(out, "  {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), fmt_decision(decision, &palette));
    }

    let _ = writeln!(out, "\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    let _ = writeln!(out, "  {}", palette.bold(palette.paint(output, ansi::GREEN)));

    let _ = writeln!(out, "\n{}", palette.paint("━━━ Summary ━━━", ansi::GRAY));
    let _ = writeln!(
        out,
        "  Words: {}  │  Smurfed: {} (lexicon {}, chaos {})  │  Suppressed: {}  │  Time: {}",
        palette.paint(details.words().to_string(), ansi::BLUE),
        palette.paint(details.substituted().to_string(), ansi::GREEN),
        details.from_lexicon(),
        details.from_chaos(),
        palette.paint(details.suppressed().to_string(), ansi::YELLOW),
        palette.dim(format!("{:?}", details.total)),
    );

    out
}

fn fmt_decision(decision: &Decision, palette: &ansi::Palette) -> String {
    let span = palette.paint(format!("{}..{}", decision.start, decision.end), ansi::YELLOW);
    let arrow = match &decision.replacement {
        Some(replacement) => format!("{} → {}", decision.surface, palette.bold(palette.paint(replacement, ansi::GREEN))),
        None => palette.dim(&decision.surface),
    };

    let label = match decision.reason {
        Reason::Lexicon { category, shape } => format!("{category} ({})", shape.tag()),
        Reason::Chaos { shape } => format!("chaos ({})", shape.tag()),
        Reason::Unmatched => "unmatched".to_string(),
        Reason::Suppressed { rule } => format!("kept by {}", rule.name()),
    };
    let why = palette.reason(&decision.reason, label);

    format!("{} {} {} {}", span, arrow, palette.dim("│"), why)
}
