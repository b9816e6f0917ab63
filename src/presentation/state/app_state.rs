use std::sync::Arc;

use crate::application::ports::MediaStore;
use crate::application::services::ExtractionService;
use crate::presentation::config::PipelineMode;

#[derive(Clone)]
pub struct AppState {
    pub extraction_service: Arc<ExtractionService>,
    pub media_store: Arc<dyn MediaStore>,
    pub mode: PipelineMode,
    pub max_upload_bytes: usize,
}
