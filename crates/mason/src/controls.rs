use super::*;

/// The `@controls` map of a representation, keyed by relation.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Controls(BTreeMap<String, Control>);

impl Controls {
  pub fn get(&self, relation: &str) -> Result<&Control, Error> {
    self
      .0
      .get(relation)
      .context(error::ControlMissing { relation })
  }

  pub fn href(&self, relation: &str) -> Result<&str, Error> {
    Ok(&self.get(relation)?.href)
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}
