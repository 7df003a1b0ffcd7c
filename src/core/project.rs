//! Project.
//!
//! The primary interface for CLI operations: owns the declared
//! configuration, the applied state, and the encryptor built from the
//! configured settings.

use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use crate::core::config::Config;
use crate::core::domain::EncryptionRequest;
use crate::core::encryptor::Encryptor;
use crate::core::reconcile::Transition;
use crate::core::state::State;
use crate::error::{Error, Result, StateError};

/// What happens to one item during apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Replace,
    Unchanged,
    Destroy,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Replace => "replace",
            Self::Unchanged => "unchanged",
            Self::Destroy => "destroy",
        }
    }
}

impl From<Transition> for Action {
    fn from(t: Transition) -> Self {
        match t {
            Transition::Create => Self::Create,
            Transition::Replace => Self::Replace,
            Transition::Unchanged => Self::Unchanged,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One planned or applied change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    pub name: String,
    pub action: Action,
    /// Identity after the change; `None` for destroyed items and plans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Counts of an apply run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplySummary {
    pub created: usize,
    pub replaced: usize,
    pub unchanged: usize,
    pub destroyed: usize,
    pub changes: Vec<Change>,
}

impl ApplySummary {
    fn record(&mut self, change: Change) {
        match change.action {
            Action::Create => self.created += 1,
            Action::Replace => self.replaced += 1,
            Action::Unchanged => self.unchanged += 1,
            Action::Destroy => self.destroyed += 1,
        }
        self.changes.push(change);
    }

    /// Whether anything was created, replaced, or destroyed.
    pub fn changed(&self) -> bool {
        self.created + self.replaced + self.destroyed > 0
    }
}

/// Declared configuration plus applied state.
#[derive(Debug)]
pub struct Project {
    config: Config,
    state: State,
    encryptor: Encryptor,
}

impl Project {
    /// Open the configuration and state files.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the configuration is
    /// missing, or any load/validation error from either file.
    pub fn open(config_path: &Path, state_path: &Path) -> Result<Self> {
        let config = Config::load(config_path)?;
        let state = State::load(state_path)?;
        Ok(Self::new(config, state))
    }

    pub fn new(config: Config, state: State) -> Self {
        let encryptor = config.encryptor();
        Self {
            config,
            state,
            encryptor,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Desired request for a declared item.
    ///
    /// # Errors
    ///
    /// Returns `StateError::Reconcile` naming the item when its inputs
    /// don't decode.
    pub fn desired(&self, name: &str) -> Result<Option<EncryptionRequest>> {
        let Some(item) = self.config.items.get(name) else {
            return Ok(None);
        };
        self.encryptor
            .request(&item.public_key_base64, &item.content_base64())
            .map(Some)
            .map_err(|e| wrap(name, e))
    }

    /// Changes apply would make, without sealing anything.
    pub fn plan(&self) -> Result<Vec<Change>> {
        let mut changes = Vec::new();

        for name in self.config.items.keys() {
            let Some(desired) = self.desired(name)? else {
                continue;
            };
            let transition = self.state.item_state(name).plan(&desired);
            changes.push(Change {
                name: name.clone(),
                action: transition.into(),
                id: None,
            });
        }

        for name in self.undeclared() {
            changes.push(Change {
                name,
                action: Action::Destroy,
                id: None,
            });
        }

        Ok(changes)
    }

    /// Reconcile every declared item and drop undeclared ones.
    ///
    /// State is saved after each item that changed, so a failure part way
    /// leaves the state file at the last good content.
    ///
    /// # Errors
    ///
    /// Returns the first item's error, wrapped with its name.
    pub fn apply(&mut self) -> Result<ApplySummary> {
        let mut summary = ApplySummary::default();
        let names: Vec<String> = self.config.items.keys().cloned().collect();

        for name in names {
            let Some(desired) = self.desired(&name)? else {
                continue;
            };
            let mut item_state = self.state.item_state(&name);
            let transition = item_state
                .reconcile(desired, &self.encryptor)
                .map_err(|e| wrap(&name, e))?;
            let id = item_state.item().map(|i| i.id().to_string());

            self.state.set(&name, item_state);
            if transition.changed() {
                self.state.save()?;
            }

            debug!(item = %name, %transition, "applied");
            summary.record(Change {
                name,
                action: transition.into(),
                id,
            });
        }

        let undeclared = self.undeclared();
        for name in undeclared {
            self.state.remove(&name);
            summary.record(Change {
                name,
                action: Action::Destroy,
                id: None,
            });
        }
        if summary.destroyed > 0 {
            self.state.save()?;
        }

        info!(
            created = summary.created,
            replaced = summary.replaced,
            unchanged = summary.unchanged,
            destroyed = summary.destroyed,
            "apply complete"
        );
        Ok(summary)
    }

    /// Remove one item, or every item, from the state.
    ///
    /// # Errors
    ///
    /// Returns `StateError::NotFound` if `name` is not in the state.
    pub fn destroy(&mut self, name: Option<&str>) -> Result<Vec<String>> {
        let removed = match name {
            Some(name) => {
                let mut item_state = self.state.item_state(name);
                if item_state.destroy().is_none() {
                    return Err(StateError::NotFound(name.to_string()).into());
                }
                self.state.set(name, item_state);
                vec![name.to_string()]
            }
            None => {
                let names: Vec<String> = self.state.names().map(String::from).collect();
                for name in &names {
                    self.state.remove(name);
                }
                names
            }
        };

        if !removed.is_empty() {
            self.state.save()?;
        }
        debug!(removed = removed.len(), "destroyed");
        Ok(removed)
    }

    /// State entries that are no longer declared.
    fn undeclared(&self) -> Vec<String> {
        self.state
            .names()
            .filter(|n| !self.config.items.contains_key(*n))
            .map(String::from)
            .collect()
    }
}

fn wrap(name: &str, source: Error) -> Error {
    StateError::Reconcile {
        name: name.to_string(),
        source: Box::new(source),
    }
    .into()
}
