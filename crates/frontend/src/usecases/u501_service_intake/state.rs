use contracts::usecases::u501_service_intake::documents::documents_for;

/// Fully built modal content for one service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeModal {
    pub service: String,
    pub documents: Vec<String>,
}

impl IntakeModal {
    pub fn for_service(service: &str) -> Self {
        Self {
            service: service.to_string(),
            documents: documents_for(service).iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// The modal is either hidden or holds a complete [`IntakeModal`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IntakeState {
    #[default]
    Hidden,
    Open(IntakeModal),
}

impl IntakeState {
    /// Replaces whatever was shown before.
    pub fn open(&mut self, service: &str) {
        *self = IntakeState::Open(IntakeModal::for_service(service));
    }

    pub fn close(&mut self) {
        *self = IntakeState::Hidden;
    }

    pub fn modal(&self) -> Option<&IntakeModal> {
        match self {
            IntakeState::Open(modal) => Some(modal),
            IntakeState::Hidden => None,
        }
    }
}
