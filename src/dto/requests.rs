use serde::Deserialize;
use validator::Validate;

use crate::validation::emoji_only;

#[derive(Debug, Validate, Deserialize)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 3, max = 20, message = "Username must be 3-20 characters"))]
    pub username: String,
    #[validate(length(min = 8, max = 100, message = "Password must be 8-100 characters"))]
    pub password: String,
    #[validate(url(message = "Profile image must be a valid URL"))]
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Validate, Deserialize)]
pub struct CreatePostRequest {
    #[validate(
        length(min = 1, max = 280, message = "Posts must be 1-280 characters"),
        custom(function = emoji_only)
    )]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_content_passes() {
        let req = CreatePostRequest {
            content: "🙂🎉".into(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn text_content_fails() {
        let req = CreatePostRequest {
            content: "hello".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn length_bounds_are_enforced() {
        let empty = CreatePostRequest { content: "".into() };
        assert!(empty.validate().is_err());

        let at_cap = CreatePostRequest {
            content: "🙂".repeat(280),
        };
        assert!(at_cap.validate().is_ok());

        let over_cap = CreatePostRequest {
            content: "🙂".repeat(281),
        };
        assert!(over_cap.validate().is_err());
    }
}
