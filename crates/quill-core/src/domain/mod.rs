//! Domain entities - the core business objects.

mod page;
mod post;

pub use page::Page;
pub use post::{NewPost, Post, TITLE_MAX_CHARS, validate_title};
