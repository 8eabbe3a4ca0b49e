//! Form Helpers
//!
//! Conversions between the food form's text fields and `FoodDraft`.

use food_dashboard_core::{Food, FoodDraft, Price};

/// Raw text of the food form inputs
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FoodFormValues {
    pub image: String,
    pub name: String,
    pub price: String,
    pub description: String,
}

impl FoodFormValues {
    /// Pre-fill from an existing food
    pub fn from_food(food: &Food) -> Self {
        Self {
            image: food.image.clone().unwrap_or_default(),
            name: food.name.clone().unwrap_or_default(),
            price: food.price.as_ref().map(price_input).unwrap_or_default(),
            description: food.description.clone().unwrap_or_default(),
        }
    }

    /// Blank fields are left out of the draft
    pub fn to_draft(&self) -> FoodDraft {
        FoodDraft {
            name: non_blank(&self.name),
            description: non_blank(&self.description),
            price: Price::parse(&self.price),
            image: non_blank(&self.image),
            ..Default::default()
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Price as typed into the input (no display rounding)
fn price_input(price: &Price) -> String {
    match price {
        Price::Amount(number) => number.to_string(),
        Price::Text(text) => text.clone(),
    }
}
