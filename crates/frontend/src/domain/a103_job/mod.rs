pub mod partition;
pub mod ui;
