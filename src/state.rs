//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ItemService;
use crate::domain::authorizer::Authorizer;
use crate::domain::policy::AccessPolicy;
use crate::domain::repositories::ItemRepository;

/// Immutable per-process state. Cloning is cheap; every field is shared.
#[derive(Clone)]
pub struct AppState {
    pub item_service: Arc<ItemService>,
    pub authorizer: Arc<dyn Authorizer>,
    pub policy: Arc<AccessPolicy>,
}

impl AppState {
    /// Wires the item service over `repository`.
    pub fn new(
        repository: Arc<dyn ItemRepository>,
        id_field: impl Into<String>,
        authorizer: Arc<dyn Authorizer>,
        policy: AccessPolicy,
    ) -> Self {
        Self {
            item_service: Arc::new(ItemService::new(repository, id_field)),
            authorizer,
            policy: Arc::new(policy),
        }
    }
}
