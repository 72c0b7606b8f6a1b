mod user;

pub use user::GhUser;
