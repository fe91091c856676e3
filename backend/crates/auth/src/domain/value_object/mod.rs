pub mod user_id;
pub mod user_name;
pub mod user_password;
