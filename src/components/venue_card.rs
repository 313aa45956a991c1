use std::fmt::{self, Debug};

use leptos::callback::{Callable, Callback};
use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::config::{detail_href, PLACEHOLDER_IMAGE, VISIBLE_AMENITIES};
use crate::display::{
  cover_image, parse_amenities, price_range, sport_badge, status_badge, AmenityTags, Rating,
  NO_RATING,
};
use crate::Venue;

/// What a click on a card does: follow the link to the court's page, or hand the court
/// to the caller instead.
#[derive(Clone, Copy, Default)]
pub enum NavigationMode {
  #[default]
  Default,
  Override(Callback<Venue>),
}

impl From<Callback<Venue>> for NavigationMode {
  fn from(callback: Callback<Venue>) -> Self {
    NavigationMode::Override(callback)
  }
}

impl Debug for NavigationMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      NavigationMode::Default => f.write_str("Default"),
      NavigationMode::Override(_) => f.write_str("Override(..)"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
  Surface,
  /// The `tel:` or `mailto:` links inside the card.
  ContactLink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
  /// Let the link's own `href` act: the router for the card, the phone or mail app for
  /// contact links.
  Navigate(String),
  Delegated,
  /// The click must not bubble up to the card.
  PassThrough,
}

impl ClickOutcome {
  pub fn apply(&self, event: &MouseEvent) {
    match self {
      ClickOutcome::Navigate(_) => {}
      ClickOutcome::Delegated => event.prevent_default(),
      ClickOutcome::PassThrough => event.stop_propagation(),
    }
  }
}

impl NavigationMode {
  pub fn dispatch(&self, target: ClickTarget, venue: &Venue) -> ClickOutcome {
    match (target, self) {
      (ClickTarget::ContactLink, _) => ClickOutcome::PassThrough,
      (ClickTarget::Surface, NavigationMode::Default) => {
        ClickOutcome::Navigate(detail_href(&venue.id))
      }
      (ClickTarget::Surface, NavigationMode::Override(callback)) => {
        log::debug!("court {} selected", venue.id);
        callback.run(venue.clone());
        ClickOutcome::Delegated
      }
    }
  }
}

#[component]
pub fn VenueCard(venue: Venue, #[prop(optional, into)] mode: NavigationMode) -> impl IntoView {
  let href = detail_href(&venue.id);
  let (status_label, status_color) = status_badge(venue.status.as_deref());
  let (sport_label, sport_color) = sport_badge(venue.sport_types.as_deref());
  let sport_class = sport_color.pill_class();
  let amenities =
    AmenityTags::truncate(parse_amenities(venue.amenities.as_ref()), VISIBLE_AMENITIES);
  let more_amenities = amenities.more_label();
  let has_pricing = !venue.pricing.is_empty();
  let image = RwSignal::new(cover_image(&venue.images));
  let rating = Rating::of(venue.average_rating, venue.total_reviews);

  let on_click = {
    let venue = venue.clone();
    move |event: MouseEvent| mode.dispatch(ClickTarget::Surface, &venue).apply(&event)
  };
  let on_contact_click = {
    let venue = venue.clone();
    move |event: MouseEvent| mode.dispatch(ClickTarget::ContactLink, &venue).apply(&event)
  };

  // A real anchor, so keyboard activation, middle click and "open in new tab" work and the
  // router picks up plain clicks.
  view! {
    <a
      href=href
      class="block bg-white rounded-xl shadow-sm border border-gray-100 overflow-hidden hover:shadow-md transition-shadow cursor-pointer"
      on:click=on_click
    >
      <div class="relative h-48 w-full">
        <img
          class="object-cover h-full w-full"
          src=move || image.get()
          alt=venue.name.clone()
          on:error=move |_| {
            if image.with_untracked(|src| src != PLACEHOLDER_IMAGE) {
              image.set(PLACEHOLDER_IMAGE.to_string());
            }
          }
        />
        <div class="absolute top-3 right-3">
          <span class=format!(
            "px-2 py-1 rounded-full text-xs font-medium {sport_class}",
          )>{sport_label}</span>
        </div>
        <div class="absolute top-3 left-3">
          <span class=format!(
            "px-2 py-1 rounded-full text-xs font-medium text-white {}",
            status_color.badge_class(),
          )>{status_label}</span>
        </div>
      </div>

      <div class="p-4">
        <h3 class="text-lg lg:text-xl font-semibold text-gray-900 mb-2 line-clamp-1">
          {venue.name.clone()}
        </h3>
        <p class="text-base text-gray-600 mb-2 line-clamp-1">
          "📍 " {venue.address.clone().unwrap_or_default()}
        </p>

        <div class="flex items-center justify-between mb-3">
          {venue
            .phone
            .clone()
            .map(|phone| {
              view! {
                <div class="flex items-center gap-1">
                  <span class="text-blue-500">"📞"</span>
                  <a
                    href=format!("tel:{phone}")
                    class="text-sm font-medium text-blue-600 hover:text-blue-800"
                    on:click=on_contact_click.clone()
                  >
                    {phone.clone()}
                  </a>
                </div>
              }
            })}
          {venue
            .operating_hours
            .clone()
            .map(|hours| {
              view! {
                <div class="flex items-center gap-1">
                  <span class="text-green-500">"🕒"</span>
                  <span class="text-sm font-medium text-gray-600">{hours}</span>
                </div>
              }
            })}
        </div>

        {venue
          .description
          .clone()
          .map(|description| {
            view! { <p class="text-base text-gray-600 mb-3 line-clamp-2">{description}</p> }
          })}

        {match rating {
          Rating::Rated { score, reviews } => {
            view! {
              <div class="flex items-center gap-1 mb-3">
                <span class="text-yellow-400 text-lg">"⭐"</span>
                <span class="text-base font-semibold text-gray-900">{score}</span>
                <span class="text-sm text-gray-500">{Rating::reviews_label(reviews)}</span>
              </div>
            }
              .into_any()
          }
          Rating::Unrated => {
            view! {
              <div class="flex items-center gap-1 mb-3">
                <span class="text-gray-400 text-lg">"⭐"</span>
                <span class="text-sm text-gray-500">{NO_RATING}</span>
              </div>
            }
              .into_any()
          }
        }}

        <div class="flex items-center justify-between mb-3">
          <div class="flex flex-col">
            <div class="text-lg font-bold text-red-600">"💰 " {price_range(&venue.pricing)}</div>
            {has_pricing.then(|| view! { <div class="text-xs text-gray-500">"/giờ"</div> })}
          </div>
          {venue
            .email
            .clone()
            .map(|email| {
              view! {
                <a
                  href=format!("mailto:{email}")
                  class="text-sm text-blue-600 hover:text-blue-800"
                  on:click=on_contact_click.clone()
                >
                  "📧 Email"
                </a>
              }
            })}
        </div>

        {(!amenities.shown.is_empty())
          .then(|| {
            view! {
              <div class="mt-4 pt-3 border-t border-gray-100">
                <div class="flex flex-wrap gap-2">
                  {amenities
                    .shown
                    .into_iter()
                    .map(|amenity| {
                      view! {
                        <span class="amenity px-3 py-1 bg-gray-100 text-sm text-gray-600 rounded-md">
                          {amenity}
                        </span>
                      }
                    })
                    .collect_view()}
                  {more_amenities
                    .map(|label| {
                      view! {
                        <span class="amenity px-3 py-1 bg-gray-100 text-sm text-gray-600 rounded-md">
                          {label}
                        </span>
                      }
                    })}
                </div>
              </div>
            }
          })}
      </div>
    </a>
  }
}
