use super::*;

/// A collection resource representation: an ordered sequence of item
/// summaries plus the collection's own controls.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Collection<T> {
  #[serde(default)]
  pub items: Vec<T>,
  #[serde(rename = "@controls", default, skip_serializing_if = "Controls::is_empty")]
  pub controls: Controls,
}
