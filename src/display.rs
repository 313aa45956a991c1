//! Derived display data for a court card. Everything here is recomputed from the
//! [`Venue`](crate::Venue) on each render.

use std::str::FromStr;

use iter_tools::Itertools;
use serde_json::Value;
use strum::{AsRefStr, EnumString};

use crate::config::PLACEHOLDER_IMAGE;
use crate::format::format_vnd;
use crate::Pricing;

pub const PRICE_ON_REQUEST: &str = "Liên hệ để biết giá";
pub const UNKNOWN_LABEL: &str = "Không xác định";
pub const NO_RATING: &str = "Chưa có đánh giá";

/// Symbolic colour of a badge. Components turn it into classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
  Success,
  Neutral,
  Warning,
  Danger,
  Accent,
}

impl ColorTag {
  /// Solid badge drawn over the cover image.
  pub fn badge_class(self) -> &'static str {
    match self {
      ColorTag::Success => "bg-green-500",
      ColorTag::Neutral => "bg-gray-500",
      ColorTag::Warning => "bg-yellow-500",
      ColorTag::Danger => "bg-red-500",
      ColorTag::Accent => "bg-purple-500",
    }
  }

  pub fn pill_class(self) -> &'static str {
    match self {
      ColorTag::Success => "bg-green-100 text-green-800",
      ColorTag::Neutral => "bg-gray-100 text-gray-800",
      ColorTag::Warning => "bg-yellow-100 text-yellow-800",
      ColorTag::Danger => "bg-red-100 text-red-800",
      ColorTag::Accent => "bg-purple-100 text-purple-800",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
pub enum VenueStatus {
  #[strum(serialize = "ACTIVE")]
  Active,
  #[strum(serialize = "INACTIVE")]
  Inactive,
  #[strum(serialize = "MAINTENANCE")]
  Maintenance,
}

impl VenueStatus {
  /// A court without a status (or with an empty one) is shown as active; an unknown
  /// code resolves to `None`.
  pub fn resolve(code: Option<&str>) -> Option<Self> {
    let code = code.filter(|code| !code.is_empty()).unwrap_or(VenueStatus::Active.as_ref());
    VenueStatus::from_str(code).ok()
  }

  pub fn label(self) -> &'static str {
    match self {
      VenueStatus::Active => "Hoạt động",
      VenueStatus::Inactive => "Tạm nghỉ",
      VenueStatus::Maintenance => "Bảo trì",
    }
  }

  pub fn color(self) -> ColorTag {
    match self {
      VenueStatus::Active => ColorTag::Success,
      VenueStatus::Inactive => ColorTag::Neutral,
      VenueStatus::Maintenance => ColorTag::Warning,
    }
  }
}

/// Label and colour of the status badge.
pub fn status_badge(code: Option<&str>) -> (&'static str, ColorTag) {
  VenueStatus::resolve(code)
    .map_or((UNKNOWN_LABEL, ColorTag::Neutral), |status| (status.label(), status.color()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
pub enum SportType {
  #[strum(serialize = "Cầu lông")]
  Badminton,
  #[strum(serialize = "Pickleball")]
  Pickleball,
  #[strum(serialize = "Cả hai")]
  Both,
}

impl SportType {
  pub fn color(self) -> ColorTag {
    match self {
      SportType::Badminton => ColorTag::Danger,
      SportType::Pickleball => ColorTag::Success,
      SportType::Both => ColorTag::Accent,
    }
  }
}

pub fn sport_color(sport_type: &str) -> ColorTag {
  SportType::from_str(sport_type).map_or(ColorTag::Neutral, SportType::color)
}

/// Label and colour of the sport pill. A missing or empty sport type reads as unknown.
pub fn sport_badge(sport_type: Option<&str>) -> (String, ColorTag) {
  match sport_type.filter(|sport_type| !sport_type.is_empty()) {
    Some(sport_type) => (sport_type.to_string(), sport_color(sport_type)),
    None => (UNKNOWN_LABEL.to_string(), ColorTag::Neutral),
  }
}

pub fn parse_amenities(raw: Option<&Value>) -> Vec<String> {
  let Some(Value::String(raw)) = raw else {
    return Vec::new();
  };
  raw
    .split(',')
    .map(str::trim)
    .filter(|amenity| !amenity.is_empty())
    .map(String::from)
    .collect_vec()
}

pub fn price_range(pricing: &[Pricing]) -> String {
  let prices = pricing
    .iter()
    .map(|price| price.weekday_price)
    .chain(pricing.iter().map(|price| price.weekend_price));
  match prices.minmax_by(f64::total_cmp).into_option() {
    None => PRICE_ON_REQUEST.to_string(),
    Some((min, max)) if min == max => format_vnd(min),
    Some((min, max)) => format!("{} - {}", format_vnd(min), format_vnd(max)),
  }
}

pub fn cover_image(images: &[String]) -> String {
  images
    .first()
    .filter(|image| !image.is_empty())
    .map_or(PLACEHOLDER_IMAGE, String::as_str)
    .to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rating {
  Rated { score: String, reviews: u32 },
  Unrated,
}

impl Rating {
  /// A zero average or zero reviews reads as "no rating yet", same as a missing value.
  pub fn of(average: Option<f64>, total_reviews: Option<u32>) -> Self {
    match (average, total_reviews) {
      (Some(average), Some(reviews)) if average != 0.0 && !average.is_nan() && reviews != 0 => {
        // Ties round up, `{:.1}` alone would give 4.25 -> "4.2".
        Rating::Rated { score: format!("{:.1}", (average * 10.0).round() / 10.0), reviews }
      }
      _ => Rating::Unrated,
    }
  }

  pub fn reviews_label(reviews: u32) -> String {
    format!("({reviews} đánh giá)")
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmenityTags {
  pub shown: Vec<String>,
  pub hidden: usize,
}

impl AmenityTags {
  pub fn truncate(mut amenities: Vec<String>, visible: usize) -> Self {
    let hidden = amenities.len().saturating_sub(visible);
    amenities.truncate(visible);
    AmenityTags { shown: amenities, hidden }
  }

  pub fn more_label(&self) -> Option<String> {
    (self.hidden > 0).then(|| format!("+{} tiện ích khác", self.hidden))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn known_status_codes_map_to_their_badge() {
    assert_eq!(status_badge(Some("ACTIVE")), ("Hoạt động", ColorTag::Success));
    assert_eq!(status_badge(Some("INACTIVE")), ("Tạm nghỉ", ColorTag::Neutral));
    assert_eq!(status_badge(Some("MAINTENANCE")), ("Bảo trì", ColorTag::Warning));
  }

  #[test]
  fn unknown_status_falls_back() {
    assert_eq!(status_badge(Some("CLOSED")), (UNKNOWN_LABEL, ColorTag::Neutral));
    assert_eq!(status_badge(Some("active")), (UNKNOWN_LABEL, ColorTag::Neutral));
  }

  #[test]
  fn missing_status_reads_as_active() {
    assert_eq!(VenueStatus::resolve(None), Some(VenueStatus::Active));
    assert_eq!(status_badge(None), ("Hoạt động", ColorTag::Success));
  }

  #[test]
  fn empty_status_reads_as_active() {
    assert_eq!(VenueStatus::resolve(Some("")), Some(VenueStatus::Active));
    assert_eq!(status_badge(Some("")), ("Hoạt động", ColorTag::Success));
  }

  #[test]
  fn missing_or_empty_sport_type_is_labelled_unknown() {
    assert_eq!(sport_badge(None), (UNKNOWN_LABEL.to_string(), ColorTag::Neutral));
    assert_eq!(sport_badge(Some("")), (UNKNOWN_LABEL.to_string(), ColorTag::Neutral));
    assert_eq!(sport_badge(Some("Cả hai")), ("Cả hai".to_string(), ColorTag::Accent));
    assert_eq!(sport_badge(Some("Tennis")), ("Tennis".to_string(), ColorTag::Neutral));
  }

  #[test]
  fn sport_types_map_to_colours() {
    assert_eq!(sport_color("Cầu lông"), ColorTag::Danger);
    assert_eq!(sport_color("Pickleball"), ColorTag::Success);
    assert_eq!(sport_color("Cả hai"), ColorTag::Accent);
    assert_eq!(sport_color("Tennis"), ColorTag::Neutral);
    assert_eq!(sport_color(""), ColorTag::Neutral);
  }

  #[test]
  fn amenities_are_trimmed_and_empty_entries_dropped() {
    let raw = json!("A, B ,,C");
    assert_eq!(parse_amenities(Some(&raw)), ["A", "B", "C"]);
  }

  #[test]
  fn amenities_keep_order_and_duplicates() {
    let raw = json!("Wifi, Nước uống, Wifi");
    assert_eq!(parse_amenities(Some(&raw)), ["Wifi", "Nước uống", "Wifi"]);
  }

  #[test]
  fn non_string_amenities_yield_nothing() {
    assert!(parse_amenities(None).is_empty());
    assert!(parse_amenities(Some(&json!(42))).is_empty());
    assert!(parse_amenities(Some(&json!(["Wifi"]))).is_empty());
    assert!(parse_amenities(Some(&json!(" , "))).is_empty());
  }

  #[test]
  fn no_pricing_asks_to_call() {
    assert_eq!(price_range(&[]), PRICE_ON_REQUEST);
  }

  #[test]
  fn equal_prices_show_a_single_value() {
    let pricing = [Pricing { weekday_price: 100_000.0, weekend_price: 100_000.0 }];
    assert_eq!(price_range(&pricing), "100.000\u{a0}₫");
  }

  #[test]
  fn range_spans_weekday_and_weekend_prices_of_every_slot() {
    let pricing = [Pricing { weekday_price: 50_000.0, weekend_price: 80_000.0 }];
    assert_eq!(price_range(&pricing), "50.000\u{a0}₫ - 80.000\u{a0}₫");

    let pricing = [
      Pricing { weekday_price: 90_000.0, weekend_price: 150_000.0 },
      Pricing { weekday_price: 60_000.0, weekend_price: 70_000.0 },
    ];
    assert_eq!(price_range(&pricing), "60.000\u{a0}₫ - 150.000\u{a0}₫");
  }

  #[test]
  fn cover_falls_back_to_placeholder() {
    assert_eq!(cover_image(&[]), PLACEHOLDER_IMAGE);
    assert_eq!(cover_image(&[String::new()]), PLACEHOLDER_IMAGE);
    assert_eq!(cover_image(&["/a.jpg".to_string(), "/b.jpg".to_string()]), "/a.jpg");
  }

  #[test]
  fn rating_needs_both_a_score_and_reviews() {
    assert_eq!(
      Rating::of(Some(4.26), Some(12)),
      Rating::Rated { score: "4.3".to_string(), reviews: 12 }
    );
    assert_eq!(Rating::of(Some(4.5), None), Rating::Unrated);
    assert_eq!(Rating::of(None, Some(3)), Rating::Unrated);
  }

  #[test]
  fn rating_ties_round_up() {
    assert_eq!(
      Rating::of(Some(4.25), Some(4)),
      Rating::Rated { score: "4.3".to_string(), reviews: 4 }
    );
    assert_eq!(
      Rating::of(Some(3.75), Some(4)),
      Rating::Rated { score: "3.8".to_string(), reviews: 4 }
    );
    assert_eq!(Rating::of(Some(5.0), Some(1)), Rating::Rated { score: "5.0".to_string(), reviews: 1 });
  }

  #[test]
  fn zero_rating_or_zero_reviews_reads_as_unrated() {
    assert_eq!(Rating::of(Some(0.0), Some(5)), Rating::Unrated);
    assert_eq!(Rating::of(Some(4.0), Some(0)), Rating::Unrated);
    assert_eq!(Rating::of(Some(f64::NAN), Some(5)), Rating::Unrated);
  }

  #[test]
  fn five_amenities_show_three_and_a_summary() {
    let amenities = ["Wifi", "Gửi xe", "Nước uống", "Phòng thay đồ", "Căng tin"]
      .map(String::from)
      .to_vec();
    let tags = AmenityTags::truncate(amenities, 3);
    assert_eq!(tags.shown, ["Wifi", "Gửi xe", "Nước uống"]);
    assert_eq!(tags.more_label().as_deref(), Some("+2 tiện ích khác"));
  }

  #[test]
  fn three_amenities_have_no_summary() {
    let tags = AmenityTags::truncate(["A", "B", "C"].map(String::from).to_vec(), 3);
    assert_eq!(tags.shown.len(), 3);
    assert_eq!(tags.more_label(), None);
  }
}
