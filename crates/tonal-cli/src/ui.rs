use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub progress: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let _ = UI_PREFS.set(UiPrefs {
        progress: progress_enabled(is_tty, flags),
    });
}

/// Progress is drawn only for interactive text output.
const fn progress_enabled(is_tty: bool, flags: &GlobalFlags) -> bool {
    is_tty && !flags.quiet && matches!(flags.format, OutputFormat::Text)
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs { progress: false })
}
