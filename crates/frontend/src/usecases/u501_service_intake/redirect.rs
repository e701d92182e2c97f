use crate::shared::config::REDIRECT_PAGE;
use contracts::usecases::u501_service_intake::request::IntakeRequest;

/// `service.html?service=..&name=..&phone=..` with URL-encoded values.
pub fn redirect_url(request: &IntakeRequest) -> Result<String, serde_qs::Error> {
    let query = serde_qs::to_string(request)?;
    Ok(format!("{}?{}", REDIRECT_PAGE, query))
}

/// Full-page navigation. The current page holds no state afterwards.
pub fn navigate_to(url: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("no window, cannot navigate to {}", url);
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        log::error!("navigation to {} failed: {:?}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(url: &str) -> IntakeRequest {
        let (page, query) = url.split_once('?').unwrap();
        assert_eq!(page, REDIRECT_PAGE);
        serde_qs::from_str(query).unwrap()
    }

    #[test]
    fn test_plain_values() {
        let request = IntakeRequest::new("X", "Alice", "555");
        let url = redirect_url(&request).unwrap();
        assert_eq!(url, "service.html?service=X&name=Alice&phone=555");
        assert_eq!(parse(&url), request);
    }

    #[test]
    fn test_spaces_and_non_ascii_roundtrip() {
        let request = IntakeRequest::new("जाति प्रमाण पत्र", "राम कुमार", "+91 98765 43210");
        let url = redirect_url(&request).unwrap();
        assert!(url.is_ascii());
        assert!(!url.contains(' '));
        assert_eq!(parse(&url), request);
    }

    #[test]
    fn test_reserved_characters_roundtrip() {
        let request = IntakeRequest::new("a&b=c", "O'Brien & Sons", "1/2?3#4");
        let url = redirect_url(&request).unwrap();
        assert_eq!(url.matches('&').count(), 2);
        assert_eq!(parse(&url), request);
    }

    #[test]
    fn test_redirect_page_ships_with_bundle() {
        let index = include_str!("../../../index.html");
        assert!(index.contains(&format!("href=\"static/{}\"", REDIRECT_PAGE)));

        let page = include_str!("../../../static/service.html");
        for key in ["service", "name", "phone"] {
            assert!(page.contains(&format!("id=\"{key}\"")), "{key}");
        }
    }
}
