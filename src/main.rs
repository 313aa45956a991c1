use court_finder_ui::components::app::App;
use court_finder_ui::config::LOG_LEVEL;
use leptos::prelude::*;

fn main() {
  console_error_panic_hook::set_once();
  console_log::init_with_level(LOG_LEVEL).expect("logger is initialised once");
  mount_to_body(App)
}
