//! Food Models
//!
//! Data structures matching the foods REST resource.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Identifier assigned by the remote store
pub type FoodId = u32;

/// Price as the server represents it (JSON number or numeric string)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(Number),
    Text(String),
}

impl Price {
    /// Parse a form value; numbers become `Amount`, anything else is kept as text.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        match serde_json::from_str::<Number>(input) {
            Ok(number) => Some(Price::Amount(number)),
            Err(_) => Some(Price::Text(input.to_string())),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(number) => match number.as_f64() {
                Some(value) => write!(f, "{:.2}", value),
                None => write!(f, "{}", number),
            },
            Price::Text(text) => f.write_str(text),
        }
    }
}

/// Food entry (matches backend)
///
/// Descriptive fields are optional: a field the server left out or sent as
/// `null` stays absent and is not written back on update. Fields the
/// dashboard does not know about are kept in `extra` and sent back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Food {
    /// Foods without an explicit flag are shown as available
    pub fn is_available(&self) -> bool {
        self.available.unwrap_or(true)
    }

    /// Shallow merge: every field present in `patch` overwrites ours.
    /// The id never changes.
    pub fn merged(&self, patch: &FoodDraft) -> Food {
        let mut food = self.clone();
        if patch.name.is_some() {
            food.name = patch.name.clone();
        }
        if patch.description.is_some() {
            food.description = patch.description.clone();
        }
        if patch.price.is_some() {
            food.price = patch.price.clone();
        }
        if patch.image.is_some() {
            food.image = patch.image.clone();
        }
        if patch.available.is_some() {
            food.available = patch.available;
        }
        for (key, value) in &patch.extra {
            if key != "id" {
                food.extra.insert(key.clone(), value.clone());
            }
        }
        food
    }
}

/// Item-like payload emitted by the add/edit forms.
///
/// Only the fields that are set take part in a create or a merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FoodDraft {
    /// True when no descriptive field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image.is_none()
            && self.extra.is_empty()
    }
}

/// Body of a `POST /foods` request: a draft without id, always available.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NewFood(FoodDraft);

impl NewFood {
    pub fn from_draft(mut draft: FoodDraft) -> Self {
        draft.available = Some(true);
        draft.extra.remove("id");
        Self(draft)
    }

    pub fn draft(&self) -> &FoodDraft {
        &self.0
    }
}

impl From<FoodDraft> for NewFood {
    fn from(draft: FoodDraft) -> Self {
        Self::from_draft(draft)
    }
}
