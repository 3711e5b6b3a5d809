use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::error::{ProductError, ProductResult};

/// A catalog product.
///
/// `id` is assigned by storage on first save and never changes afterwards.
/// A product built from a request body is transient (`id: None`) until the
/// repository persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Storage-assigned identifier; `null` while transient
    pub id: Option<i32>,
    /// Product name
    pub name: String,
    /// Category the product belongs to (e.g. "Furniture")
    pub category: String,
    /// Whether the product is available for purchase
    pub available: bool,
    /// Unit price, normalized to two fraction digits
    #[schema(value_type = String, example = "49.99")]
    pub price: Decimal,
}

/// Request payload for creating or replacing a product.
///
/// All four business fields are required; `id` is deliberately not part of
/// the payload, so identity can only come from storage (create) or the
/// request path (update).
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct ProductPayload {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    pub category: String,
    pub available: bool,
    /// Accepts a JSON number or a numeric string; normalized on ingestion
    #[serde(deserialize_with = "deserialize_price")]
    #[validate(custom(function = validate_price_non_negative))]
    #[schema(value_type = String, example = "49.99")]
    pub price: Decimal,
}

/// Query filters for listing products.
///
/// At most one filter is applied, with precedence `category`, then `name`,
/// then `available`; empty values are treated as absent.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Equality filter on `category`
    pub category: Option<String>,
    /// Equality filter on `name`
    pub name: Option<String>,
    /// Equality filter on `available`
    pub available: Option<bool>,
}

impl Product {
    /// Build a transient product from a request payload.
    pub fn new(payload: ProductPayload) -> Self {
        Self {
            id: None,
            name: payload.name,
            category: payload.category,
            available: payload.available,
            price: normalize_price(payload.price),
        }
    }

    /// Overwrite the business fields from a payload, keeping `id`.
    pub fn apply(&mut self, payload: ProductPayload) {
        self.name = payload.name;
        self.category = payload.category;
        self.available = payload.available;
        self.price = normalize_price(payload.price);
    }
}

impl ProductPayload {
    /// Parse a JSON request body into a validated payload.
    ///
    /// Fails with a validation error when the body is not a JSON object,
    /// a required field is missing (the message names the first missing
    /// key), `price` cannot be parsed as a number, `name` is empty, or
    /// `price` is negative.
    pub fn from_json(bytes: &[u8]) -> ProductResult<Self> {
        let payload: Self = serde_json::from_slice(bytes)
            .map_err(|e| ProductError::Validation(format!("Invalid product: {}", e)))?;

        payload
            .validate()
            .map_err(|e| ProductError::Validation(format!("Invalid product: {}", e)))?;

        Ok(payload)
    }
}

/// Round to two fraction digits (midpoint away from zero) and force a
/// two-digit scale so whole numbers render as e.g. `12.00`.
pub fn normalize_price(price: Decimal) -> Decimal {
    let mut normalized = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    normalized.rescale(2);
    normalized
}

fn validate_price_non_negative(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        let mut error = ValidationError::new("non_negative");
        error.message = Some("must not be negative".into());
        return Err(error);
    }
    Ok(())
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(serde_json::Number),
        Text(String),
    }

    let raw = match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(number) => number.to_string(),
        RawPrice::Text(text) => text.trim().to_string(),
    };

    raw.parse::<Decimal>()
        .map(normalize_price)
        .map_err(|_| serde::de::Error::custom(format!("price '{}' is not a valid number", raw)))
}
