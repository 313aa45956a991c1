/// Shown when a court has no images or its cover fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/courts/court-placeholder.jpg";
pub const DETAIL_ROUTE_PREFIX: &str = "/courts";
/// Amenity tags rendered on a card before the "+N" summary tag.
pub const VISIBLE_AMENITIES: usize = 3;
pub const CURRENCY_SYMBOL: &str = "₫";
pub const LOG_LEVEL: log::Level = log::Level::Debug;

pub fn detail_href(id: &str) -> String {
  format!("{DETAIL_ROUTE_PREFIX}/{id}")
}
