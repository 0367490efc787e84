use crate::{api::ApiError, utils::cancel::CancellationToken};
use leptos::*;

/// Backend access for one resource panel: a load that returns everything the
/// panel renders, and a create for its form.
#[allow(async_fn_in_trait)]
pub trait PanelRepository: Clone + 'static {
    type Snapshot: Clone + Default + 'static;
    type Payload: 'static;

    async fn load(&self) -> Result<Self::Snapshot, ApiError>;
    async fn create(&self, payload: Self::Payload) -> Result<(), ApiError>;
}

/// Reactive state shared by every resource panel. The snapshot is always the
/// result of the last successful load; failed loads leave it untouched.
pub struct PanelState<R: PanelRepository> {
    pub snapshot: RwSignal<R::Snapshot>,
    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    repository: StoredValue<R>,
    token: StoredValue<CancellationToken>,
}

impl<R: PanelRepository> Clone for PanelState<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: PanelRepository> Copy for PanelState<R> {}

impl<R: PanelRepository> PanelState<R> {
    pub fn new(repository: R) -> Self {
        let token = CancellationToken::new();
        {
            let token = token.clone();
            on_cleanup(move || token.cancel());
        }
        Self {
            snapshot: create_rw_signal(R::Snapshot::default()),
            loading: create_rw_signal(false),
            submitting: create_rw_signal(false),
            error: create_rw_signal(None),
            repository: store_value(repository),
            token: store_value(token),
        }
    }

    pub fn load(&self) {
        let state = *self;
        let repo = self.repository.get_value();
        let token = self.token.get_value();
        self.loading.set(true);
        spawn_local(async move {
            let result = repo.load().await;
            if token.is_cancelled() {
                log::debug!("panel disposed before load completed; result dropped");
                return;
            }
            state.apply_load_result(result);
        });
    }

    /// Sends `payload`; on success runs `on_created` and reloads once.
    pub fn submit(&self, payload: R::Payload, on_created: impl FnOnce() + 'static) {
        let state = *self;
        let repo = self.repository.get_value();
        let token = self.token.get_value();
        self.submitting.set(true);
        spawn_local(async move {
            let result = repo.create(payload).await;
            if token.is_cancelled() {
                log::debug!("panel disposed before create completed; result dropped");
                return;
            }
            state.apply_submit_result(result, on_created);
        });
    }

    fn apply_load_result(&self, result: Result<R::Snapshot, ApiError>) {
        match result {
            Ok(snapshot) => {
                self.snapshot.set(snapshot);
                self.error.set(None);
            }
            Err(err) => {
                log::error!("failed to load panel data: {}", err);
                self.error.set(Some(err));
            }
        }
        self.loading.set(false);
    }

    fn apply_submit_result(&self, result: Result<(), ApiError>, on_created: impl FnOnce()) {
        self.submitting.set(false);
        match result {
            Ok(()) => {
                self.error.set(None);
                on_created();
                self.load();
            }
            Err(err) => {
                log::error!("failed to create record: {}", err);
                self.error.set(Some(err));
            }
        }
    }
}
