// Application state for HTTP handlers
use crate::application::overview_service::OverviewService;

#[derive(Clone)]
pub struct AppState {
    pub overview_service: OverviewService,
}
