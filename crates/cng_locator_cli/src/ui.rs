use owo_colors::OwoColorize;

#[derive(Clone, Copy, Debug)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub emoji: bool,
    pub color: bool,
}

impl Default for Style {
    fn default() -> Self {
        // Colors only when stdout is a TTY; emojis always on by default.
        let color = atty::is(atty::Stream::Stdout);
        Self { emoji: true, color }
    }
}

impl Style {
    /// Style for lines written to stderr.
    pub fn stderr() -> Self {
        Self {
            emoji: true,
            color: atty::is(atty::Stream::Stderr),
        }
    }
}

pub fn info(msg: impl AsRef<str>) {
    print_line(Level::Info, msg.as_ref(), Style::default());
}

pub fn success(msg: impl AsRef<str>) {
    print_line(Level::Success, msg.as_ref(), Style::default());
}

/// Warnings and errors go to stderr so `--json`/`--csv` output stays clean.
pub fn warning(msg: impl AsRef<str>) {
    print_line(Level::Warning, msg.as_ref(), Style::stderr());
}

pub fn error(msg: impl AsRef<str>) {
    print_line(Level::Error, msg.as_ref(), Style::stderr());
}

pub fn print_line(level: Level, msg: &str, style: Style) {
    let line = render_line(level, msg, style);
    match level {
        Level::Info | Level::Success => println!("{line}"),
        Level::Warning | Level::Error => eprintln!("{line}"),
    }
}

fn render_line(level: Level, msg: &str, style: Style) -> String {
    let emoji = match level {
        Level::Info => "ℹ️ ",
        Level::Success => "✅ ",
        Level::Warning => "⚠️ ",
        Level::Error => "❌ ",
    };

    let prefix = if style.emoji { emoji } else { "" };
    let line = format!("{prefix}{msg}");

    if !style.color {
        return line;
    }
    match level {
        Level::Info => line,
        Level::Success => line.green().to_string(),
        Level::Warning => line.yellow().to_string(),
        Level::Error => line.red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_has_no_escape_codes() {
        let style = Style {
            emoji: false,
            color: false,
        };
        assert_eq!(
            render_line(Level::Error, "Failed to plan route", style),
            "Failed to plan route"
        );
    }

    #[test]
    fn emoji_prefix() {
        let style = Style {
            emoji: true,
            color: false,
        };
        assert!(render_line(Level::Success, "done", style).starts_with("✅"));
    }
}
