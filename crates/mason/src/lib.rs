//! Mason+JSON representation model.
//!
//! A representation is the JSON body of an API response: resource fields,
//! optionally an `items` sequence for collections, and an `@controls` map of
//! hypermedia link descriptors naming the follow-up requests the server
//! offers. The client trusts the server-provided shape.

use {
  serde::{Deserialize, Serialize},
  snafu::{OptionExt, Snafu},
  std::collections::BTreeMap,
};

pub use {
  collection::Collection, control::Control, controls::Controls, course::Course, error::Error,
  media::Media, user::User,
};

/// Relation of the control linking a representation to itself.
pub const SELF: &str = "self";

/// Relation of the control deleting a user.
pub const DELETE_USER: &str = "trainingmanager:delete-user";

mod collection;
mod control;
mod controls;
mod course;
mod error;
mod media;
mod user;
