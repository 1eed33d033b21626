use serde::{Deserialize, Serialize};

use crate::errors::ScribeError;
use crate::host::SettingsStore;

fn default_max_tokens() -> u32 {
    50
}

/// User-editable configuration, persisted verbatim through the host's store.
///
/// Field names serialize camelCase (`apiKey`, `organisationId`,
/// `defaultMaxTokenLength`) so data written by earlier versions of the
/// extension loads unchanged. No field is validated here; an empty key or
/// organisation id simply fails authentication at request time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub organisation_id: String,
    #[serde(default = "default_max_tokens")]
    pub default_max_token_length: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            organisation_id: String::new(),
            default_max_token_length: default_max_tokens(),
        }
    }
}

impl Settings {
    /// Load settings from the store, merging stored fields over the defaults.
    ///
    /// An empty store yields the defaults exactly; a partially-populated
    /// stored object keeps defaults for the missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the stored value does
    /// not deserialize.
    pub async fn load(store: &dyn SettingsStore) -> Result<Self, ScribeError> {
        match store.load_data().await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Self::default()),
        }
    }

    /// Save the whole settings object to the store.
    ///
    /// Called after every field edit in the host's settings panel.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails.
    pub async fn save(&self, store: &mut dyn SettingsStore) -> Result<(), ScribeError> {
        let value = serde_json::to_value(self)?;
        store.save_data(value).await
    }
}
