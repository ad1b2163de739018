use super::*;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Course {
  pub name: String,
  /// Raw course markup, injected into the course view as-is.
  #[serde(rename = "coursedatajson", default, skip_serializing_if = "String::is_empty")]
  pub content: String,
  #[serde(rename = "medialist", default, skip_serializing_if = "BTreeMap::is_empty")]
  pub media: BTreeMap<String, Media>,
  #[serde(rename = "@controls", default, skip_serializing_if = "Controls::is_empty")]
  pub controls: Controls,
}
