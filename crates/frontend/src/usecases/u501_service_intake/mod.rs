pub mod redirect;
pub mod state;
pub mod view;

pub use view::ServiceIntakeModal;
