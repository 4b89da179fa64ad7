use crate::validate::ValidContact;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is by `encodeURIComponent`; everything else is percent-encoded as UTF-8.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a single URI component the way browsers' `encodeURIComponent` does.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Builds the `mailto:` link for a validated contact.
///
/// The subject is taken verbatim; the body follows a fixed template carrying name, email
/// and message.
#[must_use]
pub fn compose_mailto(recipient: &str, contact: &ValidContact) -> String {
    let body = format!(
        "Name: {}\nEmail: {}\n\nMessage: {}",
        contact.name(),
        contact.email(),
        contact.message()
    );
    format!(
        "mailto:{recipient}?subject={}&body={}",
        encode_component(contact.subject()),
        encode_component(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_encode_uri_component() {
        assert_eq!(encode_component("Hello world"), "Hello%20world");
        assert_eq!(encode_component("a&b=c?d#e"), "a%26b%3Dc%3Fd%23e");
        assert_eq!(encode_component("it's (really) fine!*~._-"), "it's%20(really)%20fine!*~._-");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_component("café"), "caf%C3%A9");
        assert_eq!(encode_component("a+b/c"), "a%2Bb%2Fc");
    }
}
