use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::client::ClientError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// UI preferences owned by the application root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

/// JSON file backing for [`Preferences`].
#[derive(Debug, Clone)]
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

    /// Hydrates preferences. A missing or unreadable file yields defaults.
    pub fn load(&self) -> Preferences {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring corrupt preferences at {}: {}", self.path.display(), e);
                Preferences::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Preferences::default(),
            Err(e) => {
                warn!("Could not read preferences at {}: {}", self.path.display(), e);
                Preferences::default()
            }
        }
    }

    pub fn save(&self, prefs: &Preferences) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(prefs)?)?;
        Ok(())
    }
}
