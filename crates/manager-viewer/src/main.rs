use {
  self::{manager::Manager, view::View},
  hypermedia::{
    boilerplate::Boilerplate,
    html_escaper::Escape,
    log,
    reqwest::Url,
    wasm_bindgen::{self, prelude::wasm_bindgen, JsValue},
    wasm_bindgen_futures,
    web_sys::{HtmlButtonElement, HtmlElement, PointerEvent, ShadowRoot},
    Api, Component, Error, EventTargetExt, Select,
  },
  mason::{Collection, Control, Course, Media, User},
  std::{future::Future, sync::Arc},
};

mod manager;
mod view;

#[wasm_bindgen(main)]
async fn main() -> Result<(), JsValue> {
  hypermedia::initialize_console(log::Level::Trace)?;
  Manager::define();
  Ok(())
}
