//! Inquiry message compiler
//!
//! Renders the request list plus an optional delivery selection into the
//! single text block both egress channels send. The shape is fixed:
//!
//! ```text
//! Hi HQ Decor! I'm interested in the following items:
//!
//! - <name> ($<price>) [<variant>] [Style: <text>] [Note: <custom>]
//!
//! Total Value: ~$<subtotal>
//! Location: <delivery description>
//! ```
//!
//! Bracketed segments appear only when set; the location line is omitted
//! entirely when no delivery option is given.

pub mod egress;

use shared::models::{DeliveryOption, RequestItem};
use std::fmt::Write;

/// Compile the inquiry text for the given list.
///
/// Callers gate the send actions on a chosen delivery option; passing `None`
/// here is for previewing only.
pub fn compile_message(items: &[RequestItem], delivery: Option<DeliveryOption>) -> String {
    let mut message = String::from("Hi HQ Decor! I'm interested in the following items:\n\n");

    for item in items {
        let _ = write!(message, "- {} (${})", item.name, item.price);
        if let Some(variant) = &item.selected_variant {
            let _ = write!(message, " [{variant}]");
        }
        if let Some(text) = &item.selected_text {
            let _ = write!(message, " [Style: {text}]");
        }
        if let Some(custom) = &item.custom_text {
            let _ = write!(message, " [Note: {custom}]");
        }
        message.push('\n');
    }

    // Fold from 0.0 rather than sum(): an empty f64 sum is -0.0, which
    // Display renders as "-0"
    let subtotal = items.iter().fold(0.0_f64, |acc, item| acc + item.price);
    let _ = write!(message, "\nTotal Value: ~${subtotal}");

    if let Some(option) = delivery {
        let _ = write!(message, "\nLocation: {}", option.description());
    }

    message
}
