//! The order form as submitted, and its validation into an [`OrderCreate`].

use crate::model::{MainItem, Modification, OrderCreate, Side};
use crate::order_actor::OrderError;
use serde::Deserialize;
use std::str::FromStr;

/// Raw fields of a `POST /` submission, already pulled out of the request body.
///
/// Multi-select fields arrive as repeated values; a missing one is an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    #[serde(default)]
    pub customer_description: String,
    #[serde(default)]
    pub main_item: String,
    #[serde(default)]
    pub modifications: Vec<String>,
    #[serde(default)]
    pub sides: Vec<String>,
}

impl TryFrom<OrderForm> for OrderCreate {
    type Error = OrderError;

    fn try_from(form: OrderForm) -> Result<Self, Self::Error> {
        let customer_description = form.customer_description.trim();
        if customer_description.is_empty() {
            return Err(OrderError::Validation(
                "customerDescription: a description is required".to_string(),
            ));
        }

        let main_item = parse_code::<MainItem>("mainItem", &form.main_item)?;
        let modifications = form
            .modifications
            .iter()
            .map(|code| parse_code::<Modification>("modifications", code))
            .collect::<Result<Vec<_>, _>>()?;
        let sides = form
            .sides
            .iter()
            .map(|code| parse_code::<Side>("sides", code))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OrderCreate::new(customer_description, main_item)
            .with_modifications(modifications)
            .with_sides(sides))
    }
}

fn parse_code<T>(field: &str, code: &str) -> Result<T, OrderError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    code.parse::<T>()
        .map_err(|e| OrderError::Validation(format!("{field}: {e}")))
}
