use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::catalog;
use crate::components::court_detail::CourtDetail;
use crate::components::court_list::CourtList;
use crate::State;

#[component]
pub fn App() -> impl IntoView {
  let venues = catalog::load().unwrap_or_else(|err| {
    log::error!("{err}");
    Vec::new()
  });
  let state = Store::new(State { venues, ..Default::default() });
  provide_context(state);

  view! {
    <Router>
      <main class="mx-auto max-w-6xl p-4">
        <Routes fallback=|| view! { <p class="text-gray-500">"Không tìm thấy trang"</p> }>
          <Route path=path!("/") view=CourtList />
          <Route path=path!("/courts/:id") view=CourtDetail />
        </Routes>
      </main>
    </Router>
  }
}
