use std::sync::{Arc, Mutex, MutexGuard};

use plancal_core::identity::{SessionAttributes, resolve_identity};
use plancal_core::{EditState, EntryStore, PlanCalResult};

/// Shared application state
///
/// The process serves one session identity, so the form's edit state lives
/// here alongside the store handle.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn EntryStore>,
    owner_id: Arc<str>,
    edit: Arc<Mutex<EditState>>,
}

impl AppState {
    pub fn new(store: Arc<dyn EntryStore>, session: &SessionAttributes) -> Self {
        AppState {
            store,
            owner_id: resolve_identity(session).into(),
            edit: Arc::new(Mutex::new(EditState::None)),
        }
    }

    pub fn store(&self) -> &dyn EntryStore {
        self.store.as_ref()
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn edit_state(&self) -> EditState {
        self.edit_guard().clone()
    }

    /// Run `f` on the current edit state and keep the state it returns.
    /// On error the previous state is kept.
    pub fn update_edit_state<T>(
        &self,
        f: impl FnOnce(EditState) -> PlanCalResult<(EditState, T)>,
    ) -> PlanCalResult<T> {
        let mut guard = self.edit_guard();
        let (next, out) = f(guard.clone())?;
        *guard = next;
        Ok(out)
    }

    fn edit_guard(&self) -> MutexGuard<'_, EditState> {
        self.edit.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
