pub mod favourite;
pub mod user;
