use frontcontroller::{DispatchError, FrontController, ViewResolver};
use storage::MemberStore;

pub(crate) struct AppState {
    pub(crate) front: FrontController,
    pub(crate) store: MemberStore,
}

impl AppState {
    pub(crate) fn new(store: MemberStore, resolver: ViewResolver) -> Result<Self, DispatchError> {
        let front = FrontController::for_members(store.clone(), resolver)?;
        Ok(Self { front, store })
    }
}
