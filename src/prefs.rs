use crate::error::Result;
use crate::models::Theme;
use crate::output;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default location of the preference file, relative to the working
/// directory.
pub const DEFAULT_PREFS_PATH: &str = ".portfolio-prefs.json";

/// Preferences that survive across runs. The sort selection is
/// deliberately absent; it is per-run display state, not a preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
}

/// JSON-file-backed store for `Preferences`.
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PreferenceStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read preferences from disk. A missing file is the normal first-run
    /// case; an unreadable or malformed file is logged and treated the
    /// same way. Loading never fails, it only falls back to defaults.
    pub fn load(&self) -> Preferences {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no preference file, using defaults");
                return Preferences::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read preference file, using defaults");
                return Preferences::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed preference file, using defaults");
                Preferences::default()
            }
        }
    }

    /// Persist preferences immediately. Written atomically so an
    /// interrupted save cannot corrupt the previous file.
    pub fn save(&self, prefs: Preferences) -> Result<()> {
        let body = serde_json::to_string_pretty(&prefs)?;
        output::write_atomic(&self.path, &body)?;
        debug!(path = %self.path.display(), theme = %prefs.theme, "saved preferences");
        Ok(())
    }
}
