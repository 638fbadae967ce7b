//! Request list entry

use super::{Product, ProductType};
use serde::{Deserialize, Serialize};

/// User configuration captured when a product is added to the request list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddItemOptions {
    /// Chosen finish/color
    pub variant: Option<String>,
    /// Chosen inscription/style
    pub text: Option<String>,
    /// Free-form note
    pub custom: Option<String>,
}

/// A product copied into the request list together with its add-time
/// configuration.
///
/// Product fields are snapshotted at add-time so later catalog changes never
/// retroactively alter entries already in the list. Entries are immutable
/// once created; they leave the list only by removal or a full clear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestItem {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: Vec<String>,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unique per list entry, distinct from the product id, so the same
    /// product can appear several times with different configurations
    pub cart_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_text: Option<String>,
}

impl RequestItem {
    /// Snapshot a catalog product with a freshly generated cart id
    pub fn from_product(product: &Product, options: AddItemOptions) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            product_type: product.product_type,
            variants: product.variants.clone(),
            text_options: product.text_options.clone(),
            description: product.description.clone(),
            cart_id: uuid::Uuid::new_v4().to_string(),
            selected_variant: options.variant,
            selected_text: options.text,
            custom_text: options.custom,
        }
    }
}
