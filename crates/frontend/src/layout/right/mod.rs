pub mod right;

pub use right::Right;
