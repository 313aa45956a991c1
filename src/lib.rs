pub mod catalog;
pub mod components;
pub mod config;
pub mod display;
pub mod format;

use better_default::Default;
use iter_tools::Itertools;
use reactive_stores::Store;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
  pub weekday_price: f64,
  pub weekend_price: f64,
}

/// A bookable court listing as the courts API returns it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub address: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub phone: Option<String>,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub operating_hours: Option<String>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub images: Vec<String>,
  #[serde(default)]
  pub status: Option<String>,
  #[serde(default)]
  pub sport_types: Option<String>,
  // Usually a comma separated string, but older records carry other shapes.
  #[serde(default)]
  pub amenities: Option<Value>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub pricing: Vec<Pricing>,
  #[serde(default)]
  pub average_rating: Option<f64>,
  #[serde(default)]
  pub total_reviews: Option<u32>,
}

// The API sends `null` for lists it has nothing for.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Default, Store)]
pub struct State {
  pub venues: Vec<Venue>,
  #[default(true)]
  pub preview_on_click: bool,
  pub previewed: Option<Venue>,
}

impl Venue {
  pub fn matches(&self, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
      || self.name.to_lowercase().contains(&query)
      || self.address.as_ref().is_some_and(|address| address.to_lowercase().contains(&query))
  }
}

pub fn filter_venues(venues: &[Venue], query: &str) -> Vec<Venue> {
  venues.iter().filter(|venue| venue.matches(query)).cloned().collect_vec()
}

#[cfg(test)]
pub(crate) fn venue(id: &str, name: &str) -> Venue {
  Venue {
    id: id.to_string(),
    name: name.to_string(),
    address: None,
    description: None,
    phone: None,
    email: None,
    operating_hours: None,
    images: Vec::new(),
    status: None,
    sport_types: None,
    amenities: None,
    pricing: Vec::new(),
    average_rating: None,
    total_reviews: None,
  }
}
