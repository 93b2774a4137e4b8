//! Data models for quotes, catalog products and orders

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, StoreError};

/// Job complexity; selects the multiplier applied to print-related costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Intermediate,
    High,
}

impl Complexity {
    pub fn multiplier(self) -> f64 {
        match self {
            Complexity::Simple => 1.0,
            Complexity::Intermediate => 1.15,
            Complexity::High => 1.35,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Intermediate => "intermediate",
            Complexity::High => "high",
        }
    }
}

impl FromStr for Complexity {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Complexity::Simple),
            "intermediate" => Ok(Complexity::Intermediate),
            "high" => Ok(Complexity::High),
            _ => Err(EstimateError::InvalidInput { field: "complexity" }),
        }
    }
}

/// Manufacturing and business parameters for one production run of a piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    pub piece_name: String,
    pub quantity: i64,
    pub material: String,
    pub manual_painting: bool,

    pub filament_price: f64,  // per kg
    pub filament_used: f64,   // grams
    pub print_time_hours: f64,
    pub print_time_minutes: f64,
    pub printer_power: f64,   // watts
    pub energy_rate: f64,     // per kWh
    pub printer_value: f64,
    pub printer_lifespan: f64, // hours, 0 disables wear

    pub hourly_rate: f64,
    pub active_work_time: f64,
    pub finishing_cost: f64,
    pub maintenance_cost: f64, // per print hour
    pub failure_rate: f64,     // percent
    pub complexity: Complexity,
    pub profit_margin: f64,    // percent

    pub additional_fee: f64,   // percent

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_price: Option<f64>,
}

/// Derived cost and price breakdown; every field is a function of the inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResults {
    pub print_time: f64,
    pub filament_cost: f64,
    pub energy_cost: f64,
    pub wear_cost: f64,
    pub labor_cost: f64,
    pub maintenance_total_cost: f64,
    pub complexity_multiplier: f64,
    pub print_related_cost: f64,
    pub cost_with_complexity: f64,
    pub failure_cost: f64,
    pub production_cost: f64,
    pub cost_per_unit: f64,
    pub profit_amount: f64,
    pub profit_per_unit: f64,
    pub final_price: f64,
    pub final_price_with_fee: f64,
    pub final_price_per_unit: f64,
    pub total_time: f64,
}

/// A persisted snapshot of inputs and their results, owned by an administrator
#[derive(Debug, Clone)]
pub struct Quote {
    pub id: String,
    pub created_at: String,
    pub owner_id: String,
    pub client_name: Option<String>,
    pub piece_name: Option<String>,
    pub inputs: CalculatorInputs,
    pub results: CalculationResults,
}

macro_rules! status_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(StoreError::InvalidRecord(format!(
                        "unknown {} '{}'",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

status_enum!(ProductStatus {
    Active => "active",
    OutOfStock => "out_of_stock",
    Restocking => "restocking",
});

status_enum!(OrderStatus {
    Pending => "pending",
    Confirmed => "confirmed",
    Cancelled => "cancelled",
});

#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

/// Catalog writer payload, before an id is assigned
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
    pub status: ProductStatus,
    pub images: Vec<String>,
    pub category_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
    pub status: ProductStatus,
    pub images: Vec<String>,
    pub category_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_phone: String,
    pub product_id: Option<String>,
    pub quantity: i64,
    pub total_price: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub product_id: Option<String>,
    pub quantity: i64,
    pub total_price: f64,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub created_at: String,
}

/// An order joined with the product it references, as the admin list shows it
#[derive(Debug, Clone)]
pub struct OrderListing {
    pub order: Order,
    pub product_name: Option<String>,
    pub product_stock: Option<i64>,
}

impl OrderListing {
    /// Product name, or a marker when the product no longer exists
    pub fn product_label(&self) -> String {
        match (&self.product_name, &self.order.product_id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => format!("Produto removido ({})", id),
            (None, None) => "Produto removido".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complexity_rejects_unknown_label() {
        assert_eq!("high".parse::<Complexity>().unwrap(), Complexity::High);
        let err = "extreme".parse::<Complexity>().unwrap_err();
        assert!(matches!(err, EstimateError::InvalidInput { field: "complexity" }));
    }

    #[test]
    fn status_round_trips_through_labels() {
        for status in [ProductStatus::Active, ProductStatus::OutOfStock, ProductStatus::Restocking] {
            assert_eq!(status.as_str().parse::<ProductStatus>().unwrap(), status);
        }
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn inputs_use_camel_case_json() {
        let json = r#"{
            "pieceName": "Vase", "quantity": 2, "material": "PLA", "manualPainting": false,
            "filamentPrice": 120, "filamentUsed": 50, "printTimeHours": 2, "printTimeMinutes": 30,
            "printerPower": 150, "energyRate": 0.92, "printerValue": 2000, "printerLifespan": 5000,
            "hourlyRate": 20, "activeWorkTime": 0.5, "finishingCost": 0, "maintenanceCost": 0.5,
            "failureRate": 5, "complexity": "intermediate", "profitMargin": 100, "additionalFee": 12
        }"#;
        let inputs: CalculatorInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.piece_name, "Vase");
        assert_eq!(inputs.complexity, Complexity::Intermediate);
        assert!(inputs.client_name.is_none());

        let bad = json.replace("\"intermediate\"", "\"extreme\"");
        assert!(serde_json::from_str::<CalculatorInputs>(&bad).is_err());
    }

    #[test]
    fn demo_inputs_parse() {
        let inputs: CalculatorInputs =
            serde_json::from_str(include_str!("../demos/sample-inputs.json")).unwrap();
        assert_eq!(inputs.client_name.as_deref(), Some("Maria Souza"));
        assert_eq!(inputs.complexity, Complexity::Simple);
    }
}
