mod author;
mod post;
mod user;

pub use author::AuthorView;
pub use post::Post;
pub use user::User;
