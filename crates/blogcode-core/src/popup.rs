//! Enquiry popup state machine.
//!
//! Two states, `Closed` and `Open`. A popup auto-opens once per browser:
//! the first open (automatic or manual) persists a flag through an
//! [`AutoOpenStore`], and a set flag suppresses future automatic opens.
//! The timer itself lives in the infra driver; this machine only decides.

use thiserror::Error;

/// Storage key for the "already auto-opened" flag.
pub const AUTO_OPEN_STORAGE_KEY: &str = "nidads_enquiry_popup_auto_opened_v1";

/// Stored value meaning "auto-open already happened".
pub const AUTO_OPEN_FLAG_VALUE: &str = "1";

/// Flag-store failure. Callers treat these as soft: a failed read means
/// "eligible to auto-open", a failed write is ignored.
#[derive(Debug, Error)]
#[error("Flag store unavailable: {0}")]
pub struct StoreError(pub String);

/// Persistence for the auto-open flag (the browser-local-storage analog).
pub trait AutoOpenStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: AutoOpenStore + ?Sized> AutoOpenStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    Closed,
    Open,
}

/// Why an open transition happened. Both reasons persist the flag: a manual
/// open must also suppress a later automatic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenReason {
    Auto,
    Manual,
}

/// The popup machine, generic over its flag store.
pub struct EnquiryPopup<S: AutoOpenStore> {
    state: PopupState,
    store: S,
}

impl<S: AutoOpenStore> EnquiryPopup<S> {
    pub fn new(store: S) -> Self {
        Self {
            state: PopupState::Closed,
            store,
        }
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PopupState::Open
    }

    /// Whether an automatic timer should be armed: only when the flag has
    /// never been set. Store read failures count as "never".
    pub fn auto_open_eligible(&self) -> bool {
        match self.store.get(AUTO_OPEN_STORAGE_KEY) {
            Ok(Some(value)) => value != AUTO_OPEN_FLAG_VALUE,
            Ok(None) => true,
            Err(_) => true,
        }
    }

    /// Transition to `Open` and persist the flag. Write failures are
    /// swallowed: the popup still opens.
    pub fn open(&mut self, _reason: OpenReason) {
        if self
            .store
            .set(AUTO_OPEN_STORAGE_KEY, AUTO_OPEN_FLAG_VALUE)
            .is_err()
        {
            // Storage disabled; the popup stays eligible next session.
        }
        self.state = PopupState::Open;
    }

    /// Explicit user dismissal - the only way back to `Closed`.
    pub fn dismiss(&mut self) {
        self.state = PopupState::Closed;
    }
}
