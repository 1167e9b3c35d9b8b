//! Terminal facts detected once at startup.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    /// ANSI colors in table cells.
    pub table_color: bool,
    /// stdin is a terminal, so questions can be asked.
    pub interactive: bool,
    /// `COLUMNS`, when set to something usable.
    pub term_width: Option<usize>,
}

impl UiPrefs {
    fn detect(flags: &GlobalFlags) -> Self {
        let colors_allowed = std::env::var_os("NO_COLOR").is_none();
        Self {
            table_color: colors_allowed
                && flags.format == OutputFormat::Table
                && !flags.quiet
                && std::io::stdout().is_terminal(),
            interactive: std::io::stdin().is_terminal(),
            term_width: parse_width(std::env::var("COLUMNS").ok().as_deref()),
        }
    }
}

static PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = PREFS.set(UiPrefs::detect(flags));
}

/// Preferences set by [`init`], or plain defaults before that (tests).
#[must_use]
pub fn prefs() -> UiPrefs {
    PREFS.get().copied().unwrap_or_default()
}

fn parse_width(columns: Option<&str>) -> Option<usize> {
    columns
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= 40)
}
