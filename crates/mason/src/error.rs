use super::*;

#[derive(Debug, Snafu, PartialEq)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
  #[snafu(display("representation has no `{relation}` control"))]
  ControlMissing { relation: String },
}
