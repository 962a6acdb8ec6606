use common::utils::config::AppConfig;
use retrieval_pipeline::AnswerService;

#[derive(Clone)]
pub struct ApiState {
    pub answer_service: AnswerService,
    pub config: AppConfig,
}

impl ApiState {
    pub fn new(config: &AppConfig, answer_service: AnswerService) -> Self {
        Self {
            answer_service,
            config: config.clone(),
        }
    }
}
