use serde::Deserialize;

/// Government service offered through the intake form.
///
/// `service` is the canonical subject string: it is sent with the intake
/// request and drives the document checklist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub service: String,
}
