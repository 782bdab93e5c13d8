use crate::draft::{Draft, FieldKey};
use crate::error::FormError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// Shared form state: the current draft and the in-flight flag.
///
/// Cloning yields another handle to the same state. Fields stay editable
/// while a submission is pending; a submit works on a snapshot.
#[derive(Debug, Clone)]
pub struct FormState {
    draft: Arc<Mutex<Draft>>,
    in_flight: Arc<watch::Sender<bool>>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            draft: Arc::new(Mutex::new(Draft::new())),
            in_flight: Arc::new(tx),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Draft> {
        self.draft.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current draft
    #[must_use]
    pub fn draft(&self) -> Draft {
        self.lock().clone()
    }

    /// Replace one field; the previous draft value is superseded.
    pub fn set_field(&self, key: FieldKey, value: impl Into<String>) {
        let mut draft = self.lock();
        *draft = draft.with_field(key, value);
    }

    /// Same as [`FormState::set_field`], addressed by element id.
    pub fn set_field_by_id(&self, id: &str, value: impl Into<String>) -> Result<(), FormError> {
        let key: FieldKey = id.parse()?;
        self.set_field(key, value);
        Ok(())
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        *self.in_flight.borrow()
    }

    /// Watch the in-flight flag, e.g. to render a busy submit button.
    #[must_use]
    pub fn subscribe_in_flight(&self) -> watch::Receiver<bool> {
        self.in_flight.subscribe()
    }

    /// Raise the flag. Returns `false` if a submission is already pending.
    pub(crate) fn begin_submit(&self) -> bool {
        self.in_flight.send_if_modified(|busy| {
            if *busy {
                false
            } else {
                *busy = true;
                true
            }
        })
    }

    pub(crate) fn finish_submit(&self) {
        self.in_flight.send_replace(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_share_state() {
        let state = FormState::new();
        let other = state.clone();

        other.set_field(FieldKey::Tenant, "acme");
        state.set_field_by_id("acsUrl", "https://idp.acme.com/acs").unwrap();

        let draft = state.draft();
        assert_eq!(draft.tenant, "acme");
        assert_eq!(other.draft().acs_url, "https://idp.acme.com/acs");
        assert!(draft.name.is_empty());
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let state = FormState::new();
        let result = state.set_field_by_id("logoUrl", "x");
        assert!(matches!(result, Err(FormError::UnknownField(_))));
        assert_eq!(state.draft(), Draft::new());
    }

    #[test]
    fn test_begin_submit_is_exclusive() {
        let state = FormState::new();
        let rx = state.subscribe_in_flight();

        assert!(state.begin_submit());
        assert!(!state.begin_submit());
        assert!(*rx.borrow());

        state.finish_submit();
        assert!(!state.is_in_flight());
        assert!(state.begin_submit());
    }
}
