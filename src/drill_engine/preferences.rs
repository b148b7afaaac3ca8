//! Voice preference, loaded once at startup and passed to the narrator.

use std::collections::HashMap;
use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::drill_engine::error::Result;

/// Storage key the app has always used for the voice setting.
pub const VOICE_PREFERENCE_KEY: &str = "voicePreference";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoicePreference {
    #[default]
    Mom,
    Dad,
}

impl VoicePreference {
    /// Lenient parse: anything other than `"mom"` or `"dad"` is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mom" => Some(VoicePreference::Mom),
            "dad" => Some(VoicePreference::Dad),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VoicePreference::Mom => "mom",
            VoicePreference::Dad => "dad",
        }
    }
}

impl fmt::Display for VoicePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only view over whatever key-value store backs the host session.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory store, used by tests and by hosts without persistent storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub voice_preference: VoicePreference,
}

impl Preferences {
    /// Populate from `store`. Missing or unrecognised values fall back to `Mom`.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let voice_preference = match store.get(VOICE_PREFERENCE_KEY) {
            None => VoicePreference::default(),
            Some(raw) => VoicePreference::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "unrecognised voice preference, using mom");
                VoicePreference::default()
            }),
        };
        Preferences { voice_preference }
    }

    /// Parse a TOML document such as `voice_preference = "dad"`.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::error::DrillError;

    #[test]
    fn missing_key_defaults_to_mom() {
        assert_eq!(Preferences::load(&MemoryStore::new()).voice_preference, VoicePreference::Mom);
    }

    #[test]
    fn stored_dad_is_loaded() {
        let mut store = MemoryStore::new();
        store.set(VOICE_PREFERENCE_KEY, "dad");
        assert_eq!(Preferences::load(&store).voice_preference, VoicePreference::Dad);
    }

    #[test]
    fn garbage_value_falls_back_to_mom() {
        let mut store = MemoryStore::new();
        store.set(VOICE_PREFERENCE_KEY, "grandpa");
        assert_eq!(Preferences::load(&store).voice_preference, VoicePreference::Mom);
    }

    #[test]
    fn toml_config_round_trips_through_serde() {
        let prefs = Preferences::from_toml_str("voice_preference = \"dad\"\n").unwrap();
        assert_eq!(prefs.voice_preference, VoicePreference::Dad);
        assert_eq!(Preferences::from_toml_str("").unwrap(), Preferences::default());
        assert!(matches!(
            Preferences::from_toml_str("voice_preference = 3"),
            Err(DrillError::Config(_))
        ));
    }
}
