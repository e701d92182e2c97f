pub mod job_panel;

pub use job_panel::JobPanel;
