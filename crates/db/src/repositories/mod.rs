pub mod character_repo;
pub mod favourite_repo;
pub mod planet_repo;
pub mod user_repo;
pub mod vehicle_repo;

pub use character_repo::CharacterRepo;
pub use favourite_repo::{FavouriteCharacterRepo, FavouritePlanetRepo, FavouriteVehicleRepo};
pub use planet_repo::PlanetRepo;
pub use user_repo::UserRepo;
pub use vehicle_repo::VehicleRepo;
