use crate::usecases::u501_service_intake::redirect::{navigate_to, redirect_url};
use crate::usecases::u501_service_intake::state::{IntakeModal, IntakeState};
use contracts::usecases::u501_service_intake::request::IntakeRequest;
use leptos::prelude::*;

/// Service intake controller: owns the modal lifecycle.
#[derive(Clone, Copy)]
pub struct ModalService {
    state: RwSignal<IntakeState>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(IntakeState::Hidden),
        }
    }

    /// Builds the modal for `service` and shows it
    pub fn open(&self, service: &str) {
        log::info!("intake opened for '{}'", service);
        self.state.update(|s| s.open(service));
    }

    /// Hides the modal
    pub fn close(&self) {
        self.state.update(|s| s.close());
    }

    pub fn modal(&self) -> Signal<Option<IntakeModal>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.modal().cloned()))
    }

    /// Hands the request over to the service page. One-way: nothing is kept.
    pub fn submit(&self, service: &str, name: &str, phone: &str) {
        let request = IntakeRequest::new(service, name, phone);
        if let Some(url) = self.close_with_redirect(&request) {
            navigate_to(&url);
        }
    }

    /// Hides the modal and returns the redirect target for `request`.
    /// Values are sent exactly as entered.
    fn close_with_redirect(&self, request: &IntakeRequest) -> Option<String> {
        let url = match redirect_url(request) {
            Ok(url) => url,
            Err(e) => {
                log::error!("failed to build redirect for '{}': {}", request.service, e);
                return None;
            }
        };
        log::info!("intake submitted for '{}'", request.service);
        self.close();
        Some(url)
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_intake() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(url: &str) -> IntakeRequest {
        let (_, query) = url.split_once('?').unwrap();
        serde_qs::from_str(query).unwrap()
    }

    #[test]
    fn test_submit_keeps_values_and_hides_modal() {
        Owner::new().with(|| {
            let intake = ModalService::new();
            intake.open("नया पासपोर्ट");
            assert!(intake.modal().get_untracked().is_some());

            let request = IntakeRequest::new("नया पासपोर्ट", "  Alice ", " 555");
            let url = intake.close_with_redirect(&request).unwrap();

            assert_eq!(parse(&url), request);
            assert_eq!(intake.modal().get_untracked(), None);
        });
    }

    #[test]
    fn test_whitespace_name_is_not_rejected() {
        Owner::new().with(|| {
            let intake = ModalService::new();
            intake.open("पेंशन");

            let request = IntakeRequest::new("पेंशन", "   ", "555");
            let url = intake.close_with_redirect(&request).unwrap();

            assert_eq!(parse(&url).name, "   ");
            assert_eq!(intake.modal().get_untracked(), None);
        });
    }
}
