//! Domain entities - the core business objects.

mod post;
mod reference;

pub use post::{Attachment, CreatePost, DEFAULT_POST_STATUS, NewPost, Post};
pub use reference::{Category, Genre, User};
