use super::*;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct User {
  pub firstname: String,
  pub lastname: String,
  #[serde(rename = "isAdmin")]
  pub is_admin: bool,
  #[serde(rename = "@controls", default, skip_serializing_if = "Controls::is_empty")]
  pub controls: Controls,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize() {
    let user = serde_json::from_str::<User>(
      r#"{
        "firstname": "Alice",
        "lastname": "Doe",
        "isAdmin": true,
        "@controls": {
          "self": { "href": "/api/users/1/" },
          "trainingmanager:delete-user": { "href": "/api/users/1/", "method": "DELETE" }
        }
      }"#,
    )
    .unwrap();

    assert_eq!(user.firstname, "Alice");
    assert_eq!(user.lastname, "Doe");
    assert!(user.is_admin);
    assert_eq!(user.controls.href(SELF).unwrap(), "/api/users/1/");
    assert_eq!(user.controls.href(DELETE_USER).unwrap(), "/api/users/1/");
  }

  #[test]
  fn creation_body() {
    assert_eq!(
      serde_json::to_string(&User {
        firstname: "Alice".into(),
        lastname: "Doe".into(),
        is_admin: true,
        controls: Controls::default(),
      })
      .unwrap(),
      r#"{"firstname":"Alice","lastname":"Doe","isAdmin":true}"#,
    );
  }
}
