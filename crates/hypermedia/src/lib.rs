#![allow(async_fn_in_trait)]

use {
  boilerplate::Boilerplate,
  js_sys::{Array, Promise},
  mason::{Collection, Control, Course, Media, User},
  reqwest::{
    header::{ACCEPT, LOCATION},
    Method, StatusCode, Url,
  },
  serde::{de::DeserializeOwned, Serialize},
  snafu::{ensure, OptionExt, ResultExt, Snafu},
  std::{fmt::Display, ops::Deref, sync::Arc},
  wasm_bindgen::{
    closure::Closure,
    convert::{FromWasmAbi, IntoWasmAbi},
    JsCast, JsError, JsValue,
  },
  web_sys::{DocumentFragment, DomParser, EventTarget, ShadowRoot, SupportedType},
};

pub use {
  self::{
    api::{Api, Created, MASON},
    cast::Cast,
    component::Component,
    error::Error,
    event_target_ext::EventTargetExt,
    select::Select,
  },
  boilerplate, html_escaper, js_sys, log, mason, reqwest, wasm_bindgen, wasm_bindgen_futures,
  web_sys,
};

mod api;
mod cast;
mod component;
mod error;
mod event_target_ext;
mod js;
mod select;

pub fn initialize_console(level: log::Level) -> Result<(), Error> {
  console_error_panic_hook::set_once();
  console_log::init_with_level(level).map_err(|source| error::SetLogger { source }.build())?;
  Ok(())
}
