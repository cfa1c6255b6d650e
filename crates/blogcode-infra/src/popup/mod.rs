//! Tokio driver for the enquiry popup.
//!
//! The core machine decides the transitions; this module supplies the
//! cancellable auto-open timer and the broadcast open signal, plus an
//! in-memory flag store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use blogcode_core::popup::{AutoOpenStore, EnquiryPopup, OpenReason, PopupState, StoreError};

/// Delay before the automatic open fires.
pub const DEFAULT_AUTO_OPEN_DELAY: Duration = Duration::from_secs(5);

/// In-memory flag store.
#[derive(Default)]
pub struct MemoryAutoOpenStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryAutoOpenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AutoOpenStore for MemoryAutoOpenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self
            .values
            .lock()
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StoreError(e.to_string()))?;
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Sender half of the "open the enquiry popup" broadcast.
///
/// Publishing with no mounted controller is a no-op, like dispatching a DOM
/// event nobody listens to.
#[derive(Clone)]
pub struct PopupSignal {
    tx: broadcast::Sender<()>,
}

impl PopupSignal {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    pub fn open(&self) {
        // Ignore send errors (no subscribers).
        let _ = self.tx.send(());
        tracing::debug!("Enquiry popup open signal published");
    }

    fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }
}

impl Default for PopupSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives one [`EnquiryPopup`]: arms the auto-open timer when eligible and
/// listens for the broadcast signal. Unmounting (or dropping) aborts the
/// task, so no timer or listener outlives the controller.
pub struct PopupController<S: AutoOpenStore + 'static> {
    popup: Arc<Mutex<EnquiryPopup<S>>>,
    task: JoinHandle<()>,
}

impl<S: AutoOpenStore + 'static> PopupController<S> {
    /// Mount the popup: arm the timer (only when no auto-open happened
    /// before) and attach the signal listener.
    pub fn mount(store: S, signal: &PopupSignal, delay: Duration) -> Self {
        let popup = Arc::new(Mutex::new(EnquiryPopup::new(store)));
        let mut timer_armed = popup.lock().unwrap().auto_open_eligible();
        let mut rx = signal.subscribe();

        let shared = Arc::clone(&popup);
        let task = tokio::spawn(async move {
            let sleep = tokio::time::sleep(delay);
            tokio::pin!(sleep);

            loop {
                tokio::select! {
                    _ = &mut sleep, if timer_armed => {
                        timer_armed = false;
                        shared.lock().unwrap().open(OpenReason::Auto);
                        tracing::debug!("Enquiry popup auto-opened");
                    }
                    received = rx.recv() => match received {
                        Ok(()) => {
                            // A manual open cancels any pending timer.
                            timer_armed = false;
                            shared.lock().unwrap().open(OpenReason::Manual);
                            tracing::debug!("Enquiry popup opened on signal");
                        }
                        Err(broadcast::error::RecvError::Lagged(_)) => continue,
                        Err(broadcast::error::RecvError::Closed) => break,
                    },
                }
            }
        });

        Self { popup, task }
    }

    pub fn state(&self) -> PopupState {
        self.popup.lock().unwrap().state()
    }

    pub fn is_open(&self) -> bool {
        self.popup.lock().unwrap().is_open()
    }

    /// Explicit user dismissal.
    pub fn dismiss(&self) {
        self.popup.lock().unwrap().dismiss();
    }

    /// Detach the listener and cancel any pending timer.
    pub fn unmount(self) {
        self.task.abort();
    }
}

impl<S: AutoOpenStore + 'static> Drop for PopupController<S> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogcode_core::popup::{AUTO_OPEN_FLAG_VALUE, AUTO_OPEN_STORAGE_KEY};

    fn flag_is_set(store: &MemoryAutoOpenStore) -> bool {
        store.get(AUTO_OPEN_STORAGE_KEY).unwrap().as_deref() == Some(AUTO_OPEN_FLAG_VALUE)
    }

    #[tokio::test]
    async fn auto_opens_once_timer_elapses() {
        let store = Arc::new(MemoryAutoOpenStore::new());
        let signal = PopupSignal::new();
        let controller =
            PopupController::mount(Arc::clone(&store), &signal, Duration::from_millis(20));

        assert!(!controller.is_open());
        tokio::time::sleep(Duration::from_millis(120)).await;

        assert!(controller.is_open());
        assert!(flag_is_set(&store));
    }

    #[tokio::test]
    async fn preset_flag_suppresses_auto_open() {
        let store = Arc::new(MemoryAutoOpenStore::new());
        store
            .set(AUTO_OPEN_STORAGE_KEY, AUTO_OPEN_FLAG_VALUE)
            .unwrap();

        let signal = PopupSignal::new();
        let controller =
            PopupController::mount(Arc::clone(&store), &signal, Duration::from_millis(20));

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(!controller.is_open());
    }

    #[tokio::test]
    async fn signal_opens_immediately_and_cancels_timer() {
        let store = Arc::new(MemoryAutoOpenStore::new());
        let signal = PopupSignal::new();
        let controller =
            PopupController::mount(Arc::clone(&store), &signal, Duration::from_secs(30));

        signal.open();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(controller.is_open());
        assert!(flag_is_set(&store));
    }

    #[tokio::test]
    async fn dismiss_closes_and_signal_reopens() {
        let store = Arc::new(MemoryAutoOpenStore::new());
        let signal = PopupSignal::new();
        let controller =
            PopupController::mount(Arc::clone(&store), &signal, Duration::from_secs(30));

        signal.open();
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.dismiss();
        assert!(!controller.is_open());

        signal.open();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(controller.is_open());
    }

    #[tokio::test]
    async fn unmount_cancels_pending_timer() {
        let store = Arc::new(MemoryAutoOpenStore::new());
        let signal = PopupSignal::new();
        let controller =
            PopupController::mount(Arc::clone(&store), &signal, Duration::from_millis(40));

        controller.unmount();
        tokio::time::sleep(Duration::from_millis(120)).await;

        assert!(!flag_is_set(&store));
    }
}
