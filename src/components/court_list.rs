use leptos::callback::Callback;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::labeled_input::{InputAttrs, LabeledInput};
use crate::components::venue_card::{NavigationMode, VenueCard};
use crate::config::detail_href;
use crate::display::{price_range, status_badge};
use crate::{filter_venues, State, StateStoreFields, Venue};

#[component]
pub fn CourtList() -> impl IntoView {
  let state = expect_context::<Store<State>>();
  let query = RwSignal::new(String::new());
  let preview = Callback::new(move |venue: Venue| state.previewed().set(Some(venue)));
  let mode = move || {
    if state.preview_on_click().get() {
      NavigationMode::Override(preview)
    } else {
      NavigationMode::Default
    }
  };
  let visible = move || filter_venues(&state.venues().read(), &query.get());
  let no_match = Signal::derive(move || {
    let no_match = !query.read().trim().is_empty() && visible().is_empty();
    no_match.then(|| "Không có sân nào phù hợp".to_string())
  });
  let search_attrs = InputAttrs {
    value: Some(query),
    input_type: Some("search".to_string()),
    placeholder: Some("Cầu lông, Quận 7...".to_string()),
    ..Default::default()
  }
  .with_attr("autocomplete", "off");

  view! {
    <div class="flex flex-col gap-4">
      <div class="flex items-end gap-4">
        <LabeledInput
          label="Tìm sân"
          helper_text="Tên sân hoặc địa chỉ"
          error=no_match
          attrs=search_attrs
        />
        <label class="flex items-center gap-2 whitespace-nowrap text-sm text-gray-700">
          <input type="checkbox" bind:checked=state.preview_on_click() />
          "Xem nhanh"
        </label>
      </div>
      <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
        {move || {
          let mode = mode();
          visible()
            .into_iter()
            .map(|venue| view! { <VenueCard venue mode /> })
            .collect_view()
        }}
      </div>
      {move || state.previewed().get().map(|venue| view! { <Preview venue state /> })}
    </div>
  }
}

#[component]
fn Preview(venue: Venue, state: Store<State>) -> impl IntoView {
  let (status_label, _) = status_badge(venue.status.as_deref());
  view! {
    <aside class="fixed bottom-4 right-4 w-80 rounded-xl bg-white p-4 shadow-lg">
      <h2 class="text-lg font-semibold text-gray-900">{venue.name.clone()}</h2>
      <p class="text-sm text-gray-500">{status_label}</p>
      <p class="text-sm text-gray-600">{venue.address.clone().unwrap_or_default()}</p>
      <p class="font-bold text-red-600">{price_range(&venue.pricing)}</p>
      <div class="mt-2 flex justify-between">
        <a href=detail_href(&venue.id) class="text-blue-600">
          "Xem chi tiết"
        </a>
        <button on:click=move |_| state.previewed().set(None)>"Đóng"</button>
      </div>
    </aside>
  }
}
