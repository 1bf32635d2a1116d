pub mod predictor_service;
pub mod history_service;
pub mod chart_service;
pub mod report_service;
