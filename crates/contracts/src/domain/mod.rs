pub mod a101_tool;
pub mod a102_service;
pub mod a103_job;
