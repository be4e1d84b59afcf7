use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<SqliteLinkRepository>>,
        auth_service: Arc<AuthService>,
    ) -> Self {
        Self {
            link_service,
            auth_service,
        }
    }
}
