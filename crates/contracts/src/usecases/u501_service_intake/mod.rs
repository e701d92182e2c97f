pub mod documents;
pub mod request;
