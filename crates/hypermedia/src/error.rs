use super::*;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
  #[snafu(display("{source}"), context(false))]
  Control { source: mason::Error },
  #[snafu(display("deserializing response from {url} failed"))]
  Deserialize {
    url: Url,
    source: serde_json::Error,
  },
  #[snafu(display("invalid href `{href}`"))]
  Href { href: String },
  #[snafu(display("control has invalid method `{method}`"))]
  Method { method: String },
  #[snafu(display("request to {url} failed"))]
  Request { url: Url, source: reqwest::Error },
  SetLogger {
    #[snafu(source(false))]
    source: log::SetLoggerError,
  },
  #[snafu(display("response from {url} failed with {status}"))]
  Status { url: Url, status: StatusCode },
}

impl From<Error> for JsValue {
  fn from(err: Error) -> Self {
    JsError::new(&err.to_string()).into()
  }
}
