use std::sync::Arc;
use taskdash_client::{ApiClient, ProjectResource, TaskResource, TeamMemberResource, TicketImportProvider};
use taskdash_persistence::SettingsRepository;

/// Collaborators shared by every page. Cloning shares the same instances.
#[derive(Clone)]
pub struct Clients {
    pub tasks: Arc<dyn TaskResource>,
    pub projects: Arc<dyn ProjectResource>,
    pub members: Arc<dyn TeamMemberResource>,
    pub importer: Arc<dyn TicketImportProvider>,
    pub settings: Arc<dyn SettingsRepository>,
}

impl Clients {
    /// Uses one HTTP client for all three resources.
    pub fn from_api(
        api: ApiClient,
        importer: Arc<dyn TicketImportProvider>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        let api = Arc::new(api);
        Self {
            tasks: api.clone(),
            projects: api.clone(),
            members: api,
            importer,
            settings,
        }
    }
}
