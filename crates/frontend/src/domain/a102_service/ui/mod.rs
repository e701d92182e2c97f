pub mod services_panel;

pub use services_panel::ServicesPanel;
