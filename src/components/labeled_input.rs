use leptos::callback::{Callable, Callback};
use leptos::html;
use leptos::prelude::*;

const BASE_CLASS: &str = "w-full px-3 py-2 border rounded-lg shadow-sm focus:ring-2 focus:ring-offset-2 focus:outline-none transition-colors";
const DEFAULT_CLASS: &str = "border-gray-300 focus:border-primary-500 focus:ring-primary-500";
const ERROR_CLASS: &str = "border-red-300 focus:border-red-500 focus:ring-red-500";

/// Attributes handed through to the inner `<input>`.
///
/// The recognised ones are bound reactively; `extra` is set verbatim on the element
/// once it is mounted, for anything else the control needs (`autocomplete`, `maxlength`,
/// `data-*`, ...).
#[derive(Clone, Default)]
pub struct InputAttrs {
  pub value: Option<RwSignal<String>>,
  /// Runs with the new text on every edit, after `value` is updated.
  pub on_change: Option<Callback<String>>,
  pub input_type: Option<String>,
  pub name: Option<String>,
  pub id: Option<String>,
  pub placeholder: Option<String>,
  pub disabled: MaybeProp<bool>,
  pub class: Option<String>,
  pub extra: Vec<(String, String)>,
}

impl InputAttrs {
  pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.extra.push((name.into(), value.into()));
    self
  }
}

/// Empty strings render nothing, like a missing value.
fn non_empty(text: Option<String>) -> Option<String> {
  text.filter(|text| !text.is_empty())
}

fn apply_edit(value: Option<RwSignal<String>>, on_change: Option<Callback<String>>, text: String) {
  if let Some(value) = value {
    value.set(text.clone());
  }
  if let Some(on_change) = on_change {
    on_change.run(text);
  }
}

pub fn input_class(has_error: bool, extra: Option<&str>) -> String {
  let variant = if has_error { ERROR_CLASS } else { DEFAULT_CLASS };
  match extra {
    Some(extra) => format!("{BASE_CLASS} {variant} {extra}"),
    None => format!("{BASE_CLASS} {variant}"),
  }
}

/// The single message shown under the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
  Error(String),
  Helper(String),
}

impl Feedback {
  /// An error hides the helper text. Empty messages count as absent.
  pub fn pick(error: Option<String>, helper_text: Option<String>) -> Option<Self> {
    non_empty(error)
      .map(Feedback::Error)
      .or_else(|| non_empty(helper_text).map(Feedback::Helper))
  }

  pub fn class(&self) -> &'static str {
    match self {
      Feedback::Error(_) => "mt-1 text-sm text-red-600",
      Feedback::Helper(_) => "mt-1 text-sm text-gray-500",
    }
  }

  pub fn message(&self) -> &str {
    match self {
      Feedback::Error(message) | Feedback::Helper(message) => message,
    }
  }
}

#[component]
pub fn LabeledInput(
  #[prop(optional, into)] label: Option<String>,
  #[prop(optional, into)] error: MaybeProp<String>,
  #[prop(optional, into)] helper_text: Option<String>,
  #[prop(optional)] attrs: InputAttrs,
  #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
  let InputAttrs { value, on_change, input_type, name, id, placeholder, disabled, class, extra } =
    attrs;
  let label = non_empty(label);
  let has_error = move || non_empty(error.get()).is_some();

  if !extra.is_empty() {
    node_ref.on_load(move |input| {
      for (name, value) in &extra {
        if let Err(err) = input.set_attribute(name, value) {
          log::warn!("could not set input attribute {name}: {err:?}");
        }
      }
    });
  }

  view! {
    <div class="w-full">
      {label
        .map(|label| {
          view! { <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label> }
        })}
      <input
        node_ref=node_ref
        class=move || input_class(has_error(), class.as_deref())
        type=input_type.unwrap_or_else(|| "text".to_string())
        name=name
        id=id
        placeholder=placeholder
        disabled=move || disabled.get().unwrap_or(false)
        prop:value=move || value.map(|value| value.get()).unwrap_or_default()
        on:input=move |event| apply_edit(value, on_change, event_target_value(&event))
      />
      {move || {
        Feedback::pick(error.get(), helper_text.clone())
          .map(|feedback| view! { <p class=feedback.class()>{feedback.message().to_string()}</p> })
      }}
    </div>
  }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
  use leptos::mount::mount_to;
  use leptos::wasm_bindgen::JsCast;
  use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
  use web_sys::HtmlElement;

  use super::*;

  wasm_bindgen_test_configure!(run_in_browser);

  fn host() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&host).unwrap();
    host
  }

  #[wasm_bindgen_test]
  fn error_hides_the_helper_text() {
    let host = host();
    let _mounted = mount_to(host.clone(), || {
      view! { <LabeledInput label="Tên" error="Bắt buộc" helper_text="Tên sân" /> }
    });

    let text = host.text_content().unwrap();
    assert!(text.contains("Bắt buộc"));
    assert!(!text.contains("Tên sân"));
    let class = host.query_selector("input").unwrap().unwrap().class_name();
    assert!(class.contains(ERROR_CLASS));
  }

  #[wasm_bindgen_test]
  fn empty_error_keeps_the_helper_text() {
    let host = host();
    let _mounted = mount_to(host.clone(), || {
      view! { <LabeledInput label="" error="" helper_text="Tên sân" /> }
    });

    assert_eq!(host.query_selector_all("p").unwrap().length(), 1);
    assert_eq!(host.query_selector_all("label").unwrap().length(), 0);
    assert!(host.text_content().unwrap().contains("Tên sân"));
    let class = host.query_selector("input").unwrap().unwrap().class_name();
    assert!(class.contains(DEFAULT_CLASS));
  }
}
