use serde::{Deserialize, Serialize};

/// Intake submission handed to the service page.
///
/// Field order is the query-string key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRequest {
    pub service: String,
    pub name: String,
    pub phone: String,
}

impl IntakeRequest {
    pub fn new(
        service: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            name: name.into(),
            phone: phone.into(),
        }
    }
}
