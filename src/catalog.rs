use std::collections::HashSet;

use derive_more::{Display, Error};

use crate::Venue;

#[derive(Debug, Display, Error)]
pub enum CatalogError {
  #[display("malformed court catalog: {_0}")]
  Malformed(#[error(source)] serde_json::Error),
  #[display("court id {_0} appears more than once")]
  DuplicateId(#[error(not(source))] String),
}

pub fn parse_catalog(json: &str) -> Result<Vec<Venue>, CatalogError> {
  let venues = serde_json::from_str::<Vec<Venue>>(json).map_err(CatalogError::Malformed)?;
  if let Some(id) = first_duplicate_id(&venues) {
    return Err(CatalogError::DuplicateId(id));
  }
  Ok(venues)
}

fn first_duplicate_id(venues: &[Venue]) -> Option<String> {
  let mut seen = HashSet::with_capacity(venues.len());
  venues.iter().find(|venue| !seen.insert(venue.id.as_str())).map(|venue| venue.id.clone())
}

/// Courts bundled with the build.
pub fn load() -> Result<Vec<Venue>, CatalogError> {
  let venues = parse_catalog(include_str!("../data/courts.json"))?;
  log::debug!("loaded {} courts", venues.len());
  Ok(venues)
}
