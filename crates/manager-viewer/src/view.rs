use super::*;

/// The current view, driving region visibility. Navigation replaces the
/// view wholesale; nothing is diffed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum View {
  #[default]
  UserList,
  User,
  Course,
}

impl View {
  pub(crate) fn visible(self) -> &'static [Region] {
    match self {
      Self::UserList => &[Region::UserTable],
      Self::User => &[Region::UserView, Region::CourseTable],
      Self::Course => &[Region::CourseView],
    }
  }

  pub(crate) fn apply(self, root: &ShadowRoot) {
    let visible = self.visible();
    for region in Region::ALL {
      let section = root.select::<HtmlElement>(region.selector());
      if visible.contains(&region) {
        section.style().remove_property("display").unwrap();
      } else {
        section.style().set_property("display", "none").unwrap();
      }
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Region {
  UserTable,
  UserView,
  CourseTable,
  CourseView,
}

impl Region {
  pub(crate) const ALL: [Self; 4] = [
    Self::UserTable,
    Self::UserView,
    Self::CourseTable,
    Self::CourseView,
  ];

  pub(crate) fn selector(self) -> &'static str {
    match self {
      Self::UserTable => "#usertable",
      Self::UserView => "#userview",
      Self::CourseTable => "#coursetable",
      Self::CourseView => "#courseview",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_view_is_the_user_list() {
    assert_eq!(View::default(), View::UserList);
  }

  #[test]
  fn user_list_shows_only_the_user_table() {
    assert_eq!(View::UserList.visible(), [Region::UserTable]);
  }

  #[test]
  fn user_view_shows_the_detail_and_the_course_table() {
    assert_eq!(
      View::User.visible(),
      [Region::UserView, Region::CourseTable],
    );
  }

  #[test]
  fn course_view_shows_only_the_course_detail() {
    assert_eq!(View::Course.visible(), [Region::CourseView]);
  }

  #[test]
  fn every_region_has_a_distinct_selector() {
    let mut selectors = Region::ALL.map(Region::selector);
    selectors.sort();
    let mut deduped = selectors.to_vec();
    deduped.dedup();
    assert_eq!(deduped.len(), Region::ALL.len());
  }
}
