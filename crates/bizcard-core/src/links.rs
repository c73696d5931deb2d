//! Outbound link builders.
//!
//! Query values are percent-encoded; everything else is passed through.

use urlencoding::encode;

/// WhatsApp chat link with a prefilled message.
///
/// `number` is E.164 without the leading `+`.
pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, encode(message))
}

/// Gmail compose window addressed to `address`.
pub fn gmail_compose_url(address: &str, subject: &str, body: &str) -> String {
    format!(
        "https://mail.google.com/mail/?view=cm&fs=1&to={}&su={}&body={}",
        encode(address),
        encode(subject),
        encode(body)
    )
}
