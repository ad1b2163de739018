use super::*;

/// The Mason hypermedia media type.
pub const MASON: &str = "application/vnd.mason+json";

/// Outcome of a state-changing command, carrying the resolved `Location`
/// header of creation responses.
#[derive(Clone, Debug, PartialEq)]
pub struct Created {
  pub location: Option<Url>,
}

pub struct Api {
  base: Url,
}

impl Default for Api {
  fn default() -> Self {
    let location = web_sys::window().unwrap().location();
    let mut base = Url::parse(&location.href().unwrap()).unwrap();
    base.set_fragment(None);
    base.set_query(None);
    Self { base }
  }
}

impl Api {
  pub fn new(base: Url) -> Self {
    Self { base }
  }

  pub async fn users(&self) -> Result<Collection<User>, Error> {
    self.resource("api/users/").await
  }

  pub async fn courses(&self) -> Result<Collection<Course>, Error> {
    self.resource("api/trainingcourses/").await
  }

  pub async fn create_user(&self, user: &User) -> Result<Created, Error> {
    self.command(Method::POST, "api/users/", user).await
  }

  pub async fn create_course(&self, course: &Course) -> Result<Created, Error> {
    self.command(Method::POST, "api/trainingcourses/", course).await
  }

  /// Attach a media item to a course, addressed by the course's location URL.
  pub async fn create_media(&self, course: &Url, media: &Media) -> Result<Created, Error> {
    let url = course.join("medias/").ok().context(error::Href {
      href: course.as_str(),
    })?;

    self.send(Method::POST, url, media).await
  }

  /// Bulk-delete everything the server knows about.
  pub async fn truncate(&self) -> Result<(), Error> {
    let url = self.url("trainingmanager/truncate/")?;

    let response = reqwest::Client::new()
      .get(url.clone())
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    let status = response.status();

    ensure!(status.is_success(), error::Status { status, url });

    Ok(())
  }

  /// Fetch the representation at `href`, resolved against the base URL.
  pub async fn resource<T: DeserializeOwned>(&self, href: &str) -> Result<T, Error> {
    let url = self.url(href)?;

    let response = reqwest::Client::new()
      .get(url.clone())
      .header(ACCEPT, MASON)
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    let status = response.status();

    ensure!(
      status.is_success(),
      error::Status {
        status,
        url: url.clone()
      }
    );

    let body = response
      .text()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    serde_json::from_str(&body).with_context(|_| error::Deserialize { url: url.clone() })
  }

  /// Issue a state-changing request with a JSON body.
  pub async fn command<B: Serialize>(
    &self,
    method: Method,
    href: &str,
    body: &B,
  ) -> Result<Created, Error> {
    let url = self.url(href)?;
    self.send(method, url, body).await
  }

  /// Execute a control, honoring its method override. Defaults to DELETE,
  /// the only method the API's controls override today.
  pub async fn delete(&self, control: &Control) -> Result<(), Error> {
    let method = Self::method(control)?;
    let url = self.url(&control.href)?;

    self.send(method, url, &serde_json::json!({})).await?;

    Ok(())
  }

  async fn send<B: Serialize>(&self, method: Method, url: Url, body: &B) -> Result<Created, Error> {
    let response = reqwest::Client::new()
      .request(method, url.clone())
      .header(ACCEPT, MASON)
      .json(body)
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    let status = response.status();

    ensure!(
      status.is_success(),
      error::Status {
        status,
        url: url.clone()
      }
    );

    let location = response
      .headers()
      .get(LOCATION)
      .and_then(|value| value.to_str().ok())
      .and_then(|href| self.base.join(href).ok());

    Ok(Created { location })
  }

  fn method(control: &Control) -> Result<Method, Error> {
    match &control.method {
      Some(method) => Method::from_bytes(method.as_bytes())
        .ok()
        .context(error::Method { method }),
      None => Ok(Method::DELETE),
    }
  }

  fn url(&self, href: &str) -> Result<Url, Error> {
    self.base.join(href).ok().context(error::Href { href })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn api() -> Api {
    Api::new(Url::parse("http://localhost:5000/").unwrap())
  }

  #[test]
  fn relative_hrefs_resolve_against_the_base() {
    assert_eq!(
      api().url("api/users/").unwrap().as_str(),
      "http://localhost:5000/api/users/",
    );
  }

  #[test]
  fn rooted_hrefs_resolve_against_the_origin() {
    assert_eq!(
      api().url("/api/users/3/").unwrap().as_str(),
      "http://localhost:5000/api/users/3/",
    );
  }

  #[test]
  fn absolute_hrefs_pass_through() {
    assert_eq!(
      api().url("http://example.com/api/users/").unwrap().as_str(),
      "http://example.com/api/users/",
    );
  }

  #[test]
  fn status_errors_display_the_status_code() {
    let error = error::Status {
      url: Url::parse("http://localhost:5000/api/users/").unwrap(),
      status: StatusCode::NOT_FOUND,
    }
    .build();

    assert_eq!(
      error.to_string(),
      "response from http://localhost:5000/api/users/ failed with 404 Not Found",
    );
  }

  #[test]
  fn control_methods_default_to_delete() {
    assert_eq!(
      Api::method(&Control {
        href: "/api/users/1/".into(),
        method: None,
        title: None,
      })
      .unwrap(),
      Method::DELETE,
    );

    assert_eq!(
      Api::method(&Control {
        href: "/api/users/1/".into(),
        method: Some("DELETE".into()),
        title: None,
      })
      .unwrap(),
      Method::DELETE,
    );

    assert!(Api::method(&Control {
      href: "/api/users/1/".into(),
      method: Some("not a method".into()),
      title: None,
    })
    .is_err());
  }
}
