use crate::store::SharedStore;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
