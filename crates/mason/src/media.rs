use super::*;

/// A media descriptor attached to a course.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Media {
  pub url: String,
  #[serde(rename = "type")]
  pub ty: String,
}
