use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "manager.html")]
pub(crate) struct Manager {
  users: Collection<User>,
}

impl Component for Manager {
  fn name() -> &'static str {
    "training-manager"
  }

  async fn initialize() -> Result<Self, Error> {
    Ok(Self {
      users: Api::default().users().await?,
    })
  }

  fn connected(self: &Arc<Self>, root: ShadowRoot) {
    View::default().apply(&root);
    wire_user_buttons(&root);

    let refresh = root.clone();
    root
      .select::<HtmlButtonElement>("#refresh")
      .add_event_listener("click", move |_: PointerEvent| {
        notify(&refresh, "Refreshing data from server…");
        spawn(&refresh, open_user_list(refresh.clone()));
      });

    let clear = root.clone();
    root
      .select::<HtmlButtonElement>("#clearlog")
      .add_event_listener("click", move |_: PointerEvent| {
        clear
          .select::<HtmlElement>("#notificationarea")
          .set_inner_html("");
      });

    let create = root.clone();
    root
      .select::<HtmlButtonElement>("#createdata")
      .add_event_listener("click", move |_: PointerEvent| {
        notify(&create, "Creating test users…");
        // fire-and-forget: responses may arrive and render in any order
        for i in 0..4 {
          spawn(&create, create_user(create.clone(), sample_user(i == 0)));
        }
        spawn(&create, create_course(create.clone(), sample_course()));
      });

    let delete = root.clone();
    root
      .select::<HtmlButtonElement>("#deletedata")
      .add_event_listener("click", move |_: PointerEvent| {
        notify(&delete, "Deleting data…");
        spawn(&delete, truncate(delete.clone()));
      });
  }
}

/// Run a navigation future, surfacing failure as a single notification
/// entry. Failures are terminal for that request only.
fn spawn(root: &ShadowRoot, future: impl Future<Output = Result<(), Error>> + 'static) {
  let root = root.clone();
  wasm_bindgen_futures::spawn_local(async move {
    if let Err(err) = future.await {
      log::error!("{err}");
      append(&root, &format!("<p class=error>{}</p>", Escape(&err)));
    }
  });
}

fn notify(root: &ShadowRoot, message: &str) {
  append(root, &format!("<p>{}</p>", Escape(message)));
}

fn append(root: &ShadowRoot, html: &str) {
  let area = root.select::<HtmlElement>("#notificationarea");
  area.insert_adjacent_html("beforeend", html).unwrap();
  area.set_scroll_top(area.scroll_height());
}

async fn open_user_list(root: ShadowRoot) -> Result<(), Error> {
  reload_users(root.clone()).await?;
  View::UserList.apply(&root);
  Ok(())
}

async fn reload_users(root: ShadowRoot) -> Result<(), Error> {
  let users = Api::default().users().await?;
  render_user_list(&root, &users);
  Ok(())
}

async fn reload_courses(root: ShadowRoot) -> Result<(), Error> {
  let courses = Api::default().courses().await?;
  render_course_list(&root, &courses);
  Ok(())
}

async fn open_user(root: ShadowRoot, href: String) -> Result<(), Error> {
  let api = Api::default();
  let user = api.resource::<User>(&href).await?;
  let courses = api.courses().await?;
  render_course_list(&root, &courses);
  render_user(&root, &user);
  View::User.apply(&root);
  Ok(())
}

async fn open_course(root: ShadowRoot, href: String) -> Result<(), Error> {
  let course = Api::default().resource::<Course>(&href).await?;
  render_course(&root, &course);
  View::Course.apply(&root);
  Ok(())
}

async fn delete_user(root: ShadowRoot, control: Control) -> Result<(), Error> {
  Api::default().delete(&control).await?;
  notify(&root, "User deleted");
  open_user_list(root).await
}

async fn truncate(root: ShadowRoot) -> Result<(), Error> {
  Api::default().truncate().await?;
  notify(&root, "Database content deleted");
  open_user_list(root).await
}

async fn create_user(root: ShadowRoot, user: User) -> Result<(), Error> {
  let created = Api::default().create_user(&user).await?;
  match &created.location {
    Some(location) => notify(&root, &format!("User added: {location}")),
    None => notify(&root, "User added"),
  }
  reload_users(root).await
}

async fn create_course(root: ShadowRoot, course: Course) -> Result<(), Error> {
  let created = Api::default().create_course(&course).await?;

  match created.location {
    Some(location) => {
      notify(&root, &format!("Course added: {location}"));
      for media in sample_medias() {
        spawn(&root, create_media(root.clone(), location.clone(), media));
      }
    }
    None => notify(&root, "Course added, but the response carried no location"),
  }

  reload_courses(root).await
}

async fn create_media(root: ShadowRoot, course: Url, media: Media) -> Result<(), Error> {
  let created = Api::default().create_media(&course, &media).await?;
  match &created.location {
    Some(location) => notify(&root, &format!("Media added: {location}")),
    None => notify(&root, "Media added"),
  }
  Ok(())
}

fn render_user_list(root: &ShadowRoot, users: &Collection<User>) {
  root
    .select::<HtmlElement>("#usertablebody")
    .set_inner_html(&user_rows(users));
  wire_user_buttons(root);
}

fn render_course_list(root: &ShadowRoot, courses: &Collection<Course>) {
  root
    .select::<HtmlElement>("#coursetablebody")
    .set_inner_html(&course_rows(courses));

  for button in root.select_all::<HtmlButtonElement>("button.course") {
    let Some(href) = button.dataset().get("href") else {
      continue;
    };
    let root = root.clone();
    button.add_event_listener("click", move |_: PointerEvent| {
      spawn(&root, open_course(root.clone(), href.clone()));
    });
  }
}

fn wire_user_buttons(root: &ShadowRoot) {
  for button in root.select_all::<HtmlButtonElement>("button.user") {
    let Some(href) = button.dataset().get("href") else {
      continue;
    };
    let root = root.clone();
    button.add_event_listener("click", move |_: PointerEvent| {
      spawn(&root, open_user(root.clone(), href.clone()));
    });
  }
}

fn render_user(root: &ShadowRoot, user: &User) {
  let delete = user.controls.get(mason::DELETE_USER).ok().cloned();

  root.select::<HtmlElement>("#userview").set_inner_html(
    &UserHtml {
      firstname: user.firstname.clone(),
      lastname: user.lastname.clone(),
      is_admin: user.is_admin,
      deletable: delete.is_some(),
    }
    .to_string(),
  );

  let back = root.clone();
  root
    .select::<HtmlButtonElement>("#userview button.back")
    .add_event_listener("click", move |_: PointerEvent| {
      spawn(&back, open_user_list(back.clone()));
    });

  if let Some(control) = delete {
    let root = root.clone();
    root
      .clone()
      .select::<HtmlButtonElement>("#userview button.delete")
      .add_event_listener("click", move |_: PointerEvent| {
        notify(&root, &format!("Deleting user at {}…", control.href));
        spawn(&root, delete_user(root.clone(), control.clone()));
      });
  }
}

fn render_course(root: &ShadowRoot, course: &Course) {
  root.select::<HtmlElement>("#courseview").set_inner_html(
    &CourseHtml {
      content: course.content.clone(),
      media: course.media.values().map(|media| media.url.clone()).collect(),
    }
    .to_string(),
  );

  let back = root.clone();
  root
    .select::<HtmlButtonElement>("#courseview button.back")
    .add_event_listener("click", move |_: PointerEvent| {
      spawn(&back, open_user_list(back.clone()));
    });
}

fn user_rows(users: &Collection<User>) -> String {
  let mut rows = String::new();

  for user in &users.items {
    match user.controls.href(mason::SELF) {
      Ok(href) => rows.push_str(
        &UserRowHtml {
          firstname: user.firstname.clone(),
          lastname: user.lastname.clone(),
          href: href.into(),
        }
        .to_string(),
      ),
      Err(err) => log::warn!("skipping user row: {err}"),
    }
  }

  rows
}

fn course_rows(courses: &Collection<Course>) -> String {
  let mut rows = String::new();

  for course in &courses.items {
    match course.controls.href(mason::SELF) {
      Ok(href) => rows.push_str(
        &CourseRowHtml {
          name: course.name.clone(),
          href: href.into(),
        }
        .to_string(),
      ),
      Err(err) => log::warn!("skipping course row: {err}"),
    }
  }

  rows
}

fn sample_user(is_admin: bool) -> User {
  User {
    firstname: format!("testuser{}", sample_id()),
    lastname: format!("testuser{}", sample_id()),
    is_admin,
    ..User::default()
  }
}

fn sample_course() -> Course {
  Course {
    name: format!("Test course {}", sample_id()),
    content: "<p><h5>This is example course introduction title</h5></p>\
              <p>Real course or other training would be introduced here.</p>"
      .into(),
    ..Course::default()
  }
}

fn sample_medias() -> Vec<Media> {
  [
    "https://cdn.pixabay.com/photo/2019/08/15/23/55/light-bulb-4409116_960_720.jpg",
    "https://cdn.pixabay.com/photo/2019/08/30/18/43/mountains-4441978_960_720.jpg",
    "https://cdn.pixabay.com/photo/2013/11/28/10/36/road-220058_960_720.jpg",
  ]
  .into_iter()
  .map(|url| Media {
    url: url.into(),
    ty: "image".into(),
  })
  .collect()
}

fn sample_id() -> u32 {
  (hypermedia::js_sys::Math::random() * 10_000.0) as u32 + 1
}

#[derive(Boilerplate)]
#[boilerplate(filename = "user-row.html")]
struct UserRowHtml {
  firstname: String,
  lastname: String,
  href: String,
}

#[derive(Boilerplate)]
#[boilerplate(filename = "course-row.html")]
struct CourseRowHtml {
  name: String,
  href: String,
}

#[derive(Boilerplate)]
#[boilerplate(filename = "user.html")]
struct UserHtml {
  firstname: String,
  lastname: String,
  is_admin: bool,
  deletable: bool,
}

#[derive(Boilerplate)]
#[boilerplate(filename = "course.html")]
struct CourseHtml {
  content: String,
  media: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn users() -> Collection<User> {
    serde_json::from_str(
      r#"{
        "items": [
          {
            "firstname": "Alice",
            "lastname": "Doe",
            "isAdmin": true,
            "@controls": { "self": { "href": "/api/users/1/" } }
          },
          {
            "firstname": "Bob",
            "lastname": "Roe",
            "isAdmin": false,
            "@controls": { "self": { "href": "/api/users/2/" } }
          }
        ]
      }"#,
    )
    .unwrap()
  }

  #[test]
  fn one_row_per_user_in_server_order() {
    let rows = user_rows(&users());

    assert_eq!(rows.matches("<tr>").count(), 2);
    assert!(rows.find("Alice").unwrap() < rows.find("Bob").unwrap());
    assert!(rows.contains("/api/users/1/"));
    assert!(rows.contains("/api/users/2/"));
  }

  #[test]
  fn rows_skip_items_without_a_self_control() {
    let users = serde_json::from_str::<Collection<User>>(
      r#"{
        "items": [
          { "firstname": "Alice", "lastname": "Doe", "isAdmin": false }
        ]
      }"#,
    )
    .unwrap();

    assert_eq!(user_rows(&users), "");
  }

  #[test]
  fn user_rows_escape_markup_in_names() {
    let row = UserRowHtml {
      firstname: "Alice & Bob".into(),
      lastname: "<Doe>".into(),
      href: "/api/users/1/".into(),
    }
    .to_string();

    assert!(row.contains("Alice &amp; Bob"));
    assert!(!row.contains("<Doe>"));
  }

  #[test]
  fn course_rows_carry_the_self_href() {
    let courses = serde_json::from_str::<Collection<Course>>(
      r#"{
        "items": [
          {
            "name": "Onboarding",
            "@controls": { "self": { "href": "/api/trainingcourses/1/" } }
          }
        ]
      }"#,
    )
    .unwrap();

    let rows = course_rows(&courses);

    assert_eq!(rows.matches("<tr>").count(), 1);
    assert!(rows.contains("Onboarding"));
    assert!(rows.contains("/api/trainingcourses/1/"));
  }

  #[test]
  fn course_view_injects_course_markup_raw() {
    let html = CourseHtml {
      content: "<h5>Welcome</h5>".into(),
      media: vec!["https://example.com/a.jpg".into()],
    }
    .to_string();

    assert!(html.contains("<h5>Welcome</h5>"));
    assert!(html.contains("https://example.com/a.jpg"));
  }

  #[test]
  fn user_view_marks_administrators() {
    let admin = UserHtml {
      firstname: "Alice".into(),
      lastname: "Doe".into(),
      is_admin: true,
      deletable: true,
    }
    .to_string();

    let regular = UserHtml {
      firstname: "Bob".into(),
      lastname: "Roe".into(),
      is_admin: false,
      deletable: false,
    }
    .to_string();

    assert!(admin.contains("Administrator"));
    assert!(!regular.contains("Administrator"));
    assert!(admin.contains("class=delete"));
    assert!(!regular.contains("class=delete"));
  }
}
