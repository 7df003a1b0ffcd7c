//! Reconciliation.
//!
//! Sealing is non-deterministic, so the stored result is authoritative: an
//! item is only recomputed when its request changes. Re-reading or
//! re-applying an unchanged request never touches the ciphertext or the
//! identity.
//!
//! ```text
//! Absent            --reconcile(r)--> Present(r, result)      Create
//! Present(r, res)   --reconcile(r)--> Present(r, res)         Unchanged
//! Present(r, _)     --reconcile(r')-> Present(r', result')    Replace
//! Present(r, _)     --destroy-------> Absent
//! ```

use tracing::debug;

use crate::core::cipher::Sealer;
use crate::core::domain::{EncryptionRequest, EncryptionResult, Item};
use crate::core::encryptor::Encryptor;
use crate::error::Result;

/// Outcome of reconciling one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// No previous item; a result was computed.
    Create,
    /// The request changed; the result and identity were replaced.
    Replace,
    /// The request is unchanged; the stored result was kept.
    Unchanged,
}

impl Transition {
    /// Whether the stored result was (or would be) replaced.
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Replace => "replace",
            Self::Unchanged => "unchanged",
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle state of one declared item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ItemState {
    #[default]
    Absent,
    Present(Item),
}

impl ItemState {
    /// Transition a reconcile with `desired` would take, without sealing.
    pub fn plan(&self, desired: &EncryptionRequest) -> Transition {
        match self {
            Self::Absent => Transition::Create,
            Self::Present(item) if item.request() == desired => Transition::Unchanged,
            Self::Present(_) => Transition::Replace,
        }
    }

    /// Bring the state in line with `desired`.
    ///
    /// The new result is computed before the state is touched, so on error
    /// the previous item is kept as it was.
    ///
    /// # Errors
    ///
    /// Returns the encryptor's error for the failing step.
    pub fn reconcile<S: Sealer>(
        &mut self,
        desired: EncryptionRequest,
        encryptor: &Encryptor<S>,
    ) -> Result<Transition> {
        let transition = self.plan(&desired);
        if !transition.changed() {
            debug!("request unchanged, keeping stored result");
            return Ok(transition);
        }

        let result = encryptor.compute(&desired)?;
        let item = Item::new(desired, result, encryptor.algorithm());
        debug!(%transition, id = %item.id(), "item reconciled");
        *self = Self::Present(item);

        Ok(transition)
    }

    /// Stored result, returned verbatim.
    pub fn read(&self) -> Option<&EncryptionResult> {
        self.item().map(Item::result)
    }

    pub fn item(&self) -> Option<&Item> {
        match self {
            Self::Absent => None,
            Self::Present(item) => Some(item),
        }
    }

    /// Drop the stored item. Sealing has nothing to undo.
    pub fn destroy(&mut self) -> Option<Item> {
        match std::mem::take(self) {
            Self::Absent => None,
            Self::Present(item) => Some(item),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

impl From<Option<Item>> for ItemState {
    fn from(item: Option<Item>) -> Self {
        item.map_or(Self::Absent, Self::Present)
    }
}

/// Result of [`reconcile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub item: Item,
    pub changed: bool,
}

/// Reconcile a previously stored item against a desired request.
///
/// Returns the previous item unchanged (`changed == false`) when the
/// request matches, otherwise a freshly computed item.
///
/// # Errors
///
/// Returns the encryptor's error; `previous` is never modified.
pub fn reconcile<S: Sealer>(
    encryptor: &Encryptor<S>,
    previous: Option<&Item>,
    desired: EncryptionRequest,
) -> Result<Reconciliation> {
    let mut state = ItemState::from(previous.cloned());
    let transition = state.reconcile(desired, encryptor)?;

    match state {
        ItemState::Present(item) => Ok(Reconciliation {
            item,
            changed: transition.changed(),
        }),
        ItemState::Absent => unreachable!("reconcile always leaves the item present"),
    }
}
