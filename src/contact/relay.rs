use gloo_net::http::Request;
use log::{error, info};
use serde::Deserialize;
use thiserror::Error;

use crate::components::toast::{Notify, Toast};
use crate::config;

pub const SUCCESS_MESSAGE: &str = "Thank you for your enquiry! We will be in touch soon.";
pub const FAILURE_MESSAGE: &str = "An error occurred during submission.";
const PHONE_PREFIX: &str = "+91";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnquiryFields {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub services: String,
    pub description: String,
}

impl EnquiryFields {
    /// Fields in the order the relay receives them.
    pub fn form_pairs(&self, access_key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("access_key", access_key.to_string()),
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("services", self.services.clone()),
            ("description", self.description.clone()),
            (
                "full_phone_number",
                format!("{} {}", PHONE_PREFIX, self.phone_number),
            ),
        ]
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// `application/x-www-form-urlencoded` body.
pub fn encode_form(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Network(String),
    #[error("unreadable relay response: {0}")]
    Decode(String),
}

/// Single POST to the relay. No retry; the visitor resubmits by hand.
pub async fn submit_enquiry(fields: &EnquiryFields) -> Result<RelayResponse, RelayError> {
    let body = encode_form(&fields.form_pairs(config::relay_access_key()));

    let response = Request::post(config::RELAY_ENDPOINT)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Accept", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| RelayError::Network(e.to_string()))?;

    response
        .json::<RelayResponse>()
        .await
        .map_err(|e| RelayError::Decode(e.to_string()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(String),
}

impl SubmitOutcome {
    pub fn from_result(result: &Result<RelayResponse, RelayError>) -> Self {
        match result {
            Ok(RelayResponse { success: true, .. }) => SubmitOutcome::Accepted,
            Ok(RelayResponse { message, .. }) => SubmitOutcome::Rejected(
                message
                    .as_deref()
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or(FAILURE_MESSAGE)
                    .to_string(),
            ),
            Err(_) => SubmitOutcome::Rejected(FAILURE_MESSAGE.to_string()),
        }
    }

    pub fn toast(&self) -> Toast {
        match self {
            SubmitOutcome::Accepted => Toast::success(SUCCESS_MESSAGE),
            SubmitOutcome::Rejected(reason) => Toast::error(reason.clone()),
        }
    }
}

/// Shows exactly one toast for a finished submission and clears the form
/// only when the relay accepted it.
pub fn resolve_submission(
    result: Result<RelayResponse, RelayError>,
    fields: &mut EnquiryFields,
    notifier: &impl Notify,
) -> SubmitOutcome {
    if let Err(err) = &result {
        error!("Enquiry submission failed: {}", err);
    }
    let outcome = SubmitOutcome::from_result(&result);
    match &outcome {
        SubmitOutcome::Accepted => {
            info!("Enquiry accepted by relay");
            fields.clear();
        }
        SubmitOutcome::Rejected(reason) => info!("Enquiry rejected: {}", reason),
    }
    notifier.notify(outcome.toast());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        shown: RefCell<Vec<Toast>>,
    }

    impl Notify for RecordingNotifier {
        fn notify(&self, toast: Toast) {
            self.shown.borrow_mut().push(toast);
        }
    }

    fn filled() -> EnquiryFields {
        EnquiryFields {
            name: "Asha Rao".to_string(),
            phone_number: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            services: "Ecommerce".to_string(),
            description: "Need a storefront & payments".to_string(),
        }
    }

    #[test]
    fn test_form_pairs_order_and_phone_prefix() {
        let pairs = filled().form_pairs("key-123");
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["access_key", "name", "email", "services", "description", "full_phone_number"]
        );
        assert_eq!(pairs[0].1, "key-123");
        assert_eq!(pairs[5].1, "+91 9876543210");
    }

    #[test]
    fn test_encode_form_escapes_values() {
        let body = encode_form(&[
            ("name", "Asha Rao".to_string()),
            ("description", "a&b=c".to_string()),
        ]);
        assert_eq!(body, "name=Asha%20Rao&description=a%26b%3Dc");
    }

    #[test]
    fn test_relay_response_parses_without_message() {
        let parsed: RelayResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(parsed, RelayResponse { success: true, message: None });
    }

    #[test]
    fn test_success_clears_fields_and_notifies_once() {
        let notifier = RecordingNotifier::default();
        let mut fields = filled();

        let outcome = resolve_submission(
            Ok(RelayResponse { success: true, message: None }),
            &mut fields,
            &notifier,
        );

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(fields, EnquiryFields::default());
        assert_eq!(*notifier.shown.borrow(), vec![Toast::success(SUCCESS_MESSAGE)]);
    }

    #[test]
    fn test_rejection_keeps_fields_and_shows_server_message() {
        let notifier = RecordingNotifier::default();
        let mut fields = filled();

        resolve_submission(
            Ok(RelayResponse { success: false, message: Some("X".to_string()) }),
            &mut fields,
            &notifier,
        );

        assert_eq!(fields, filled());
        assert_eq!(*notifier.shown.borrow(), vec![Toast::error("X")]);
    }

    #[test]
    fn test_network_error_uses_fallback_message() {
        let notifier = RecordingNotifier::default();
        let mut fields = filled();

        let outcome = resolve_submission(
            Err(RelayError::Network("offline".to_string())),
            &mut fields,
            &notifier,
        );

        assert_eq!(outcome, SubmitOutcome::Rejected(FAILURE_MESSAGE.to_string()));
        assert_eq!(fields, filled());
        assert_eq!(notifier.shown.borrow().len(), 1);
    }

    #[test]
    fn test_rejection_without_message_uses_fallback() {
        let outcome = SubmitOutcome::from_result(&Ok(RelayResponse {
            success: false,
            message: Some("  ".to_string()),
        }));
        assert_eq!(outcome.toast(), Toast::error(FAILURE_MESSAGE));
    }
}
