use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use reactive_stores::Store;

use crate::display::{cover_image, price_range, status_badge};
use crate::{State, StateStoreFields};

#[component]
pub fn CourtDetail() -> impl IntoView {
  let state = expect_context::<Store<State>>();
  let params = use_params_map();
  let venue = move || {
    let id = params.read().get("id").unwrap_or_default();
    state.venues().read().iter().find(|venue| venue.id == id).cloned()
  };

  view! {
    <div class="flex flex-col gap-4">
      <A href="/">"← Danh sách sân"</A>
      {move || match venue() {
        Some(venue) => {
          let (status_label, status_color) = status_badge(venue.status.as_deref());
          Either::Left(
            view! {
              <article class="rounded-xl bg-white p-6 shadow-sm">
                <img class="mb-4 h-64 w-full object-cover" src=cover_image(&venue.images) alt=venue.name.clone() />
                <h1 class="text-2xl font-semibold text-gray-900">{venue.name.clone()}</h1>
                <span class=format!(
                  "px-2 py-1 rounded-full text-xs font-medium text-white {}",
                  status_color.badge_class(),
                )>{status_label}</span>
                <p class="text-gray-600">{venue.address.clone().unwrap_or_default()}</p>
                <p class="text-gray-600">{venue.description.clone().unwrap_or_default()}</p>
                <p class="text-lg font-bold text-red-600">{price_range(&venue.pricing)}</p>
                {venue.phone.clone().map(|phone| view! { <a href=format!("tel:{phone}")>{phone.clone()}</a> })}
                {venue.email.clone().map(|email| view! { <a href=format!("mailto:{email}")>{email.clone()}</a> })}
              </article>
            },
          )
        }
        None => Either::Right(view! { <p class="text-gray-500">"Không tìm thấy sân"</p> }),
      }}
    </div>
  }
}
