//! State file management.
//!
//! `.saltseal.state.toml` records, per item, the last applied request and
//! the result computed for it. Loading re-derives both fingerprints and
//! refuses entries whose stored values disagree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::domain::{EncryptionRequest, Item};
use crate::core::fingerprint::FingerprintAlgorithm;
use crate::core::key::KeyPolicy;
use crate::core::reconcile::ItemState;
use crate::error::{Result, StateError};

/// On-disk layout.
#[derive(Serialize, Deserialize)]
struct Document {
    saltseal: DocumentMeta,
    #[serde(default)]
    items: BTreeMap<String, Record>,
}

#[derive(Serialize, Deserialize)]
struct DocumentMeta {
    version: String,
}

/// One stored item, using the attribute names from the schema.
#[derive(Serialize, Deserialize)]
struct Record {
    public_key_base64: String,
    content_base64: String,
    encrypted_value_base64: String,
    content_checksum: String,
    id: String,
    #[serde(default)]
    fingerprint: FingerprintAlgorithm,
    updated_at: String,
}

impl Record {
    fn from_entry(entry: &Entry) -> Self {
        let item = &entry.item;
        Self {
            public_key_base64: item.request().public_key().encode(),
            content_base64: item.request().content_base64().to_string(),
            encrypted_value_base64: item.result().ciphertext_base64(),
            content_checksum: item.result().content_fingerprint().to_string(),
            id: item.id().to_string(),
            fingerprint: item.algorithm(),
            updated_at: entry.updated_at.to_rfc3339(),
        }
    }

    fn into_entry(self, name: &str) -> Result<Entry> {
        self.verify().map_err(|source| {
            StateError::Corrupt {
                name: name.to_string(),
                source: Box::new(source),
            }
            .into()
        })
    }

    fn verify(self) -> Result<Entry> {
        let request = EncryptionRequest::decode(
            &self.public_key_base64,
            &self.content_base64,
            KeyPolicy::Strict,
        )?;

        let item = Item::restore(
            request,
            &self.encrypted_value_base64,
            &self.content_checksum,
            &self.id,
            self.fingerprint,
        )?;

        let updated_at = DateTime::parse_from_rfc3339(&self.updated_at)
            .map_err(StateError::Timestamp)?
            .with_timezone(&Utc);

        Ok(Entry { item, updated_at })
    }
}

/// An applied item and when it was last computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub item: Item,
    pub updated_at: DateTime<Utc>,
}

/// Applied items, keyed by name.
#[derive(Debug)]
pub struct State {
    path: PathBuf,
    entries: BTreeMap<String, Entry>,
}

impl State {
    /// Empty state that will be written to `path`.
    pub fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            entries: BTreeMap::new(),
        }
    }

    /// Load state from `path`. A missing file is an empty state.
    ///
    /// # Errors
    ///
    /// Returns `StateError::Parse` for malformed TOML and
    /// `StateError::Corrupt` for entries whose fingerprints don't match.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading state");

        if !path.exists() {
            debug!("no state file, starting empty");
            return Ok(Self::empty(path));
        }

        let contents = std::fs::read_to_string(path).map_err(StateError::ReadFile)?;
        let doc: Document = toml::from_str(&contents).map_err(StateError::Parse)?;

        let mut entries = BTreeMap::new();
        for (name, record) in doc.items {
            let entry = record.into_entry(&name)?;
            entries.insert(name, entry);
        }

        debug!(items = entries.len(), "state loaded");
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Write state to its path, readable by the owner only on Unix.
    ///
    /// # Errors
    ///
    /// Returns `StateError::Serialize` or `StateError::WriteFile`.
    pub fn save(&self) -> Result<()> {
        debug!(path = %self.path.display(), items = self.entries.len(), "saving state");

        let doc = Document {
            saltseal: DocumentMeta {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            items: self
                .entries
                .iter()
                .map(|(name, entry)| (name.clone(), Record::from_entry(entry)))
                .collect(),
        };
        let contents = toml::to_string_pretty(&doc).map_err(StateError::Serialize)?;
        std::fs::write(&self.path, contents).map_err(StateError::WriteFile)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .map_err(StateError::WriteFile)?;
        }

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Lifecycle state of `name`, for reconciliation.
    pub fn item_state(&self, name: &str) -> ItemState {
        ItemState::from(self.entries.get(name).map(|e| e.item.clone()))
    }

    /// Store the outcome of reconciling `name`.
    ///
    /// `updated_at` only moves when the item's identity changes.
    pub fn set(&mut self, name: &str, state: ItemState) {
        match state {
            ItemState::Absent => {
                self.entries.remove(name);
            }
            ItemState::Present(item) => {
                let updated_at = match self.entries.get(name) {
                    Some(existing) if existing.item.id() == item.id() => existing.updated_at,
                    _ => Utc::now(),
                };
                self.entries
                    .insert(name.to_string(), Entry { item, updated_at });
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        self.entries.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
