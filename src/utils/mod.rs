pub mod feedback_text;
pub mod password;
pub mod validate;
