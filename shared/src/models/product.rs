//! Product Model

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Closed set of product types, used for catalog filtering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProductType {
    Decor,
    Tabletop,
    Wall,
    Accessory,
    Paper,
}

impl ProductType {
    /// All types in display order
    pub const ALL: [ProductType; 5] = [
        Self::Decor,
        Self::Tabletop,
        Self::Wall,
        Self::Accessory,
        Self::Paper,
    ];

    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Self::Decor => "Decor",
            Self::Tabletop => "Tabletop",
            Self::Wall => "Wall",
            Self::Accessory => "Accessory",
            Self::Paper => "Paper",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ProductType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "decor" => Ok(Self::Decor),
            "tabletop" => Ok(Self::Tabletop),
            "wall" => Ok(Self::Wall),
            "accessory" => Ok(Self::Accessory),
            "paper" => Ok(Self::Paper),
            other => Err(AppError::invalid_request(format!(
                "unknown product type: {other}"
            ))),
        }
    }
}

/// Product entity
///
/// Catalog records are immutable at runtime. Serialized field names follow
/// the storefront's original wire format (camelCase).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Non-negative, currency-unit-less (assumed USD)
    pub price: f64,
    /// Category tags; a product may belong to multiple categories
    pub category: Vec<String>,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    /// Selectable finish/color labels (non-empty when present)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<String>>,
    /// Selectable inscription/style labels (non-empty when present)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_round_trip() {
        for t in ProductType::ALL {
            let parsed: ProductType = t.label().parse().unwrap();
            assert_eq!(parsed, t);
        }
        assert!("Gadget".parse::<ProductType>().is_err());
    }

    #[test]
    fn test_product_wire_format() {
        let product = Product {
            id: 1,
            name: "Metal Wreath".to_string(),
            price: 30.0,
            category: vec!["Ramadan".to_string(), "Eid".to_string()],
            product_type: ProductType::Decor,
            variants: Some(vec!["Gold".to_string()]),
            text_options: None,
            description: None,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["type"], "Decor");
        assert_eq!(json["textOptions"], serde_json::Value::Null);
        assert_eq!(json["variants"][0], "Gold");
    }
}
