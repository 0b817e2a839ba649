pub mod character;
pub mod favourite;
pub mod planet;
pub mod user;
pub mod vehicle;
