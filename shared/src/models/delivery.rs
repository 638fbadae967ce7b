//! Delivery qualification options
//!
//! The shop only serves Texas orders; a visitor picks one option before an
//! inquiry can be sent.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Delivery zone chosen by the visitor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryOption {
    /// Coppell / Valley Ranch, eligible for free delivery
    Coppell,
    /// Other Texas location within about an hour's drive, delivery fee applies
    TexasDrive,
    /// Pickup from Coppell
    Pickup,
}

impl DeliveryOption {
    /// All options in display order
    pub const ALL: [DeliveryOption; 3] = [Self::Coppell, Self::TexasDrive, Self::Pickup];

    /// Location line rendered into the inquiry message
    pub fn description(&self) -> &'static str {
        match self {
            Self::Coppell => "Coppell/Valley Ranch (Free Delivery Eligible)",
            Self::TexasDrive => "Within 1 Hr Drive (Delivery Fee Applies)",
            Self::Pickup => "Pickup Only",
        }
    }
}

impl std::fmt::Display for DeliveryOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::str::FromStr for DeliveryOption {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "coppell" => Ok(Self::Coppell),
            "texas" => Ok(Self::TexasDrive),
            "pickup" => Ok(Self::Pickup),
            other => Err(AppError::invalid_request(format!(
                "unknown delivery option: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("coppell".parse::<DeliveryOption>().unwrap(), DeliveryOption::Coppell);
        assert_eq!("Texas".parse::<DeliveryOption>().unwrap(), DeliveryOption::TexasDrive);
        assert!("dallas".parse::<DeliveryOption>().is_err());
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            DeliveryOption::Coppell.description(),
            "Coppell/Valley Ranch (Free Delivery Eligible)"
        );
        assert_eq!(DeliveryOption::Pickup.description(), "Pickup Only");
    }
}
