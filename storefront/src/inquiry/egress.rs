//! Egress channels for the compiled inquiry
//!
//! Both channels consume the same compiled message. Email composes a
//! `mailto:` URI for the visitor's mail client; Instagram is a manual
//! handoff: the text goes on the clipboard and the shop profile opens in a
//! new browsing context.
//!
//! Taking [`DeliveryOption`] by value makes the "no option chosen" state
//! unrepresentable here; the preview path uses
//! [`compile_message`](super::compile_message) directly.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use shared::models::{DeliveryOption, RequestItem};

use crate::config::StoreConfig;

/// Fixed subject line for every inquiry email
pub const EMAIL_SUBJECT: &str = "New Order Inquiry";

/// Everything except the characters JavaScript's encodeURIComponent keeps
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

/// Build the `mailto:` URI carrying the compiled message as its body
pub fn email_link(
    config: &StoreConfig,
    items: &[RequestItem],
    delivery: DeliveryOption,
) -> String {
    let body = super::compile_message(items, Some(delivery));
    format!(
        "mailto:{}?subject={}&body={}",
        config.contact_email,
        utf8_percent_encode(EMAIL_SUBJECT, URI_COMPONENT),
        utf8_percent_encode(&body, URI_COMPONENT),
    )
}

/// Clipboard-and-profile handoff for the Instagram channel
///
/// There is no programmatic message delivery; the visitor pastes the
/// clipboard text into a direct message after the profile opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstagramHandoff {
    /// Text the presentation layer places on the clipboard
    pub clipboard_text: String,
    /// Profile URL to open in a new browsing context
    pub profile_url: String,
}

pub fn instagram_handoff(
    config: &StoreConfig,
    items: &[RequestItem],
    delivery: DeliveryOption,
) -> InstagramHandoff {
    InstagramHandoff {
        clipboard_text: super::compile_message(items, Some(delivery)),
        profile_url: config.instagram_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{AddItemOptions, Product, ProductType};

    fn wreath_item() -> RequestItem {
        let product = Product {
            id: 1,
            name: "Metal Wreath".to_string(),
            price: 30.0,
            category: vec!["Ramadan".to_string()],
            product_type: ProductType::Decor,
            variants: Some(vec!["Gold".to_string()]),
            text_options: None,
            description: None,
        };
        RequestItem::from_product(
            &product,
            AddItemOptions {
                variant: Some("Gold".to_string()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_email_link_shape() {
        let config = StoreConfig::default();
        let link = email_link(&config, &[wreath_item()], DeliveryOption::Coppell);

        assert!(link.starts_with("mailto:hello@hqdecor.com?subject=New%20Order%20Inquiry&body="));
        // Newlines and spaces in the body are percent-encoded
        assert!(link.contains("%0A"));
        assert!(!link[link.find("body=").unwrap()..].contains(' '));
        // The item line survives encoding
        assert!(link.contains("Metal%20Wreath%20(%2430)%20%5BGold%5D"));
    }

    #[test]
    fn test_instagram_handoff_carries_message_and_profile() {
        let config = StoreConfig::default();
        let handoff = instagram_handoff(&config, &[wreath_item()], DeliveryOption::Pickup);

        assert_eq!(handoff.profile_url, "https://instagram.com/hqdecor");
        assert!(handoff.clipboard_text.contains("- Metal Wreath ($30) [Gold]"));
        assert!(handoff.clipboard_text.ends_with("Location: Pickup Only"));
    }
}
