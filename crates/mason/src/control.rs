use super::*;

/// A hypermedia link/action descriptor. Servers may attach fields beyond
/// these; unknown fields are ignored.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Control {
  pub href: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub method: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
}
