//! Contact intake
//!
//! Validates the form payload and hands accepted submissions to a
//! pluggable sink. Nothing is persisted here; delivery is the sink's
//! concern.

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::{Request, Response, StatusCode};

use super::response::{bad_request, json_response};
use super::types::{Acknowledgement, ContactForm};
use crate::config::AppState;
use crate::logger;

/// Receives submissions that passed validation.
///
/// The default implementation only logs; a real deployment plugs in
/// storage or email delivery here.
pub trait ContactSink: Send + Sync {
    fn deliver(&self, form: &ContactForm);
}

/// Default sink: one log line summarizing the submission
pub struct LogSink;

impl ContactSink for LogSink {
    fn deliver(&self, form: &ContactForm) {
        logger::log_contact_submission(
            &format!("{} {}", form.first_name.trim(), form.last_name.trim()),
            form.email.trim(),
            form.phone.trim(),
            form.inquiry_type.trim(),
            &message_preview(&form.message),
        );
    }
}

/// First 100 characters of the message, for log output
fn message_preview(message: &str) -> String {
    let trimmed = message.trim();
    let mut preview: String = trimmed.chars().take(100).collect();
    if trimmed.chars().count() > 100 {
        preview.push_str("...");
    }
    preview
}

/// Permissive email shape: non-space local part, `@`, and a domain
/// containing an interior dot
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.find('.') {
        Some(i) => i > 0 && i + 1 < domain.len(),
        None => false,
    }
}

/// Phone allow-list: digits, spaces, and `( ) + - .`
pub fn is_valid_phone(phone: &str) -> bool {
    !phone.is_empty()
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '(' | ')' | '+' | '-' | '.'))
}

/// Check the six required fields plus the email/phone shapes.
///
/// Returns every problem found, one message per field, so the client
/// sees the full set at once. Presence errors take precedence per field.
pub fn validate(form: &ContactForm) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let required = [
        ("firstName", &form.first_name),
        ("lastName", &form.last_name),
        ("email", &form.email),
        ("phone", &form.phone),
        ("inquiryType", &form.inquiry_type),
        ("message", &form.message),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            errors.push(format!("{name} is required"));
        }
    }

    if !form.email.trim().is_empty() && !is_valid_email(form.email.trim()) {
        errors.push("email is invalid".to_string());
    }
    if !form.phone.trim().is_empty() && !is_valid_phone(form.phone.trim()) {
        errors.push("phone is invalid".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `POST /api/contact` adapter
pub async fn handle_submit(req: Request<Incoming>, state: &AppState) -> Response<Full<Bytes>> {
    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_warning(&format!("Failed to read contact request body: {e}"));
            return bad_request("Failed to read request body");
        }
    };

    let form: ContactForm = match serde_json::from_slice(&body) {
        Ok(form) => form,
        Err(e) => {
            logger::log_warning(&format!("Malformed contact payload: {e}"));
            return bad_request("Invalid JSON body");
        }
    };

    if let Err(errors) = validate(&form) {
        return bad_request(&errors.join(", "));
    }

    state.contact_sink.deliver(&form);

    json_response(
        StatusCode::OK,
        &Acknowledgement {
            success: true,
            message: "Thank you for your message! We will get back to you soon.".to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn filled_form() -> ContactForm {
        ContactForm {
            first_name: "Dana".to_string(),
            last_name: "Reyes".to_string(),
            email: "dana@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            inquiry_type: "quote".to_string(),
            message: "How much for a two-story house?".to_string(),
            captcha: Some("12".to_string()),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate(&filled_form()).is_ok());
    }

    #[test]
    fn test_each_missing_field_is_named() {
        let cases: [(&str, fn(&mut ContactForm)); 6] = [
            ("firstName", |f| f.first_name.clear()),
            ("lastName", |f| f.last_name.clear()),
            ("email", |f| f.email.clear()),
            ("phone", |f| f.phone.clear()),
            ("inquiryType", |f| f.inquiry_type.clear()),
            ("message", |f| f.message.clear()),
        ];
        for (field, clear) in cases {
            let mut form = filled_form();
            clear(&mut form);
            let errors = validate(&form).expect_err("missing field must fail");
            assert!(
                errors.iter().any(|e| e.contains(field)),
                "expected an error naming {field}, got {errors:?}"
            );
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut form = filled_form();
        form.message = "   ".to_string();
        let errors = validate(&form).expect_err("blank message must fail");
        assert!(errors.iter().any(|e| e.contains("message")));
    }

    #[test]
    fn test_captcha_is_optional() {
        let mut form = filled_form();
        form.captcha = None;
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.com"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@ends-with."));
        assert!(!is_valid_email("spaced user@b.co"));
    }

    #[test]
    fn test_phone_shapes() {
        assert!(is_valid_phone("5551234567"));
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("+1 555.123.4567"));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_message_preview_truncates_at_100_chars() {
        let short = message_preview("hello");
        assert_eq!(short, "hello");

        let long: String = "x".repeat(150);
        let preview = message_preview(&long);
        assert_eq!(preview.chars().count(), 103);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_deserialization_defaults_missing_fields() {
        let form: ContactForm =
            serde_json::from_str(r#"{"firstName":"Dana"}"#).expect("partial payload parses");
        assert_eq!(form.first_name, "Dana");
        assert!(form.last_name.is_empty());
        assert!(form.captcha.is_none());
    }

    struct CaptureSink(Mutex<Vec<ContactForm>>);

    impl ContactSink for CaptureSink {
        fn deliver(&self, form: &ContactForm) {
            self.0.lock().expect("test lock").push(form.clone());
        }
    }

    #[test]
    fn test_sink_receives_validated_submission() {
        let sink = CaptureSink(Mutex::new(Vec::new()));
        let form = filled_form();
        assert!(validate(&form).is_ok());
        sink.deliver(&form);

        let captured = sink.0.lock().expect("test lock");
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].email, "dana@example.com");
    }
}
