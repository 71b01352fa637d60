use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATABASE: &str = "restaurant";
pub const DEFAULT_COLLECTION: &str = "clienti";
pub const DEFAULT_EXPORT_PATH: &str = "clienti.json";
pub const DEFAULT_CHILD_MARKER: &str = "bamb";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mongodb_uri: Option<String>,
    pub database: String,
    pub collection: String,
    pub export_path: PathBuf,
    pub child_marker: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            mongodb_uri: get("MONGODB_URI"),
            database: get("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            collection: get("CLIENTI_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            export_path: get("CLIENTI_EXPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH)),
            child_marker: get("CLIENTI_CHILD_MARKER").unwrap_or_else(|| DEFAULT_CHILD_MARKER.to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mongodb_uri: None,
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            child_marker: DEFAULT_CHILD_MARKER.to_string(),
        }
    }
}
