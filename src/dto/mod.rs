mod requests;
mod responses;

pub use requests::{CreatePostRequest, LoginRequest, SignupRequest};
pub use responses::{AuthResponse, PostWithAuthor, UserResponse};
