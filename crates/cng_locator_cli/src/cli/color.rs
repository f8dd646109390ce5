use owo_colors::OwoColorize;

use cng_locator_core::station::Station;

use crate::ui::Style;

/// Color helper with a single policy shared across commands.
///
/// All functions return `String`; colors are applied only when enabled.
pub struct Colors {
    pub enabled: bool,
}

impl Colors {
    pub fn new(style: &Style) -> Self {
        Self {
            enabled: style.color,
        }
    }

    #[inline]
    pub fn ok(&self, s: impl AsRef<str>) -> String {
        let s = s.as_ref();
        if self.enabled {
            s.green().to_string()
        } else {
            s.to_string()
        }
    }

    #[inline]
    pub fn err(&self, s: impl AsRef<str>) -> String {
        let s = s.as_ref();
        if self.enabled {
            s.red().to_string()
        } else {
            s.to_string()
        }
    }

    #[inline]
    pub fn warn(&self, s: impl AsRef<str>) -> String {
        let s = s.as_ref();
        if self.enabled {
            s.yellow().to_string()
        } else {
            s.to_string()
        }
    }

    #[inline]
    pub fn info(&self, s: impl AsRef<str>) -> String {
        let s = s.as_ref();
        if self.enabled {
            s.cyan().to_string()
        } else {
            s.to_string()
        }
    }

    #[inline]
    pub fn dim(&self, s: impl AsRef<str>) -> String {
        let s = s.as_ref();
        if self.enabled {
            s.bright_black().to_string()
        } else {
            s.to_string()
        }
    }

    // Domain-specific helpers (policy)
    #[inline]
    pub fn from_point(&self, s: impl AsRef<str>) -> String {
        // start marker is blue
        let s = s.as_ref();
        if self.enabled {
            s.blue().to_string()
        } else {
            s.to_string()
        }
    }

    #[inline]
    pub fn to_point(&self, s: impl AsRef<str>) -> String {
        // destination marker is red
        self.err(s)
    }

    #[inline]
    pub fn stop(&self, s: impl AsRef<str>) -> String {
        self.warn(s)
    }

    /// Station units: green when at least one unit is active, red otherwise.
    pub fn availability(&self, station: &Station, txt: impl AsRef<str>) -> String {
        if station.is_available() {
            self.ok(txt)
        } else {
            self.err(txt)
        }
    }

    /// Color a value based on absolute thresholds.
    /// Policy:
    /// - value <= good  -> green
    /// - value >= bad   -> red
    /// - otherwise      -> yellow
    pub fn by_thresholds(&self, value: f64, good: f64, bad: f64, txt: impl AsRef<str>) -> String {
        let s = txt.as_ref();
        if !self.enabled {
            return s.to_string();
        }
        if value <= good {
            s.green().to_string()
        } else if value >= bad {
            s.red().to_string()
        } else {
            s.yellow().to_string()
        }
    }

    /// Fuel percentage: low is bad, so the scale is inverted.
    pub fn fuel(&self, pct: f64, txt: impl AsRef<str>) -> String {
        self.by_thresholds(-pct, -50.0, -20.0, txt)
    }

    /// Queue length in minutes.
    pub fn wait(&self, minutes: f64, txt: impl AsRef<str>) -> String {
        self.by_thresholds(minutes, 10.0, 30.0, txt)
    }
}
