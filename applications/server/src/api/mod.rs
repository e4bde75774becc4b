/// API route modules
pub mod health;
pub mod index;
pub mod response;
pub mod users;
