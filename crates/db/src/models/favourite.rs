//! Favourite-link join entities: a row associating a user with a character,
//! planet, or vehicle they marked as a favourite.
//!
//! No uniqueness constraint exists on the (user, target) pair, so the same
//! link may be inserted more than once.

use holocron_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `favourites_characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FavouriteCharacter {
    pub id: DbId,
    pub user_id: DbId,
    pub character_id: DbId,
}

/// DTO for linking a user to a favourite character.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFavouriteCharacter {
    pub user_id: DbId,
    pub character_id: DbId,
}

/// A row from the `favourites_planets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FavouritePlanet {
    pub id: DbId,
    pub user_id: DbId,
    pub planet_id: DbId,
}

/// DTO for linking a user to a favourite planet.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFavouritePlanet {
    pub user_id: DbId,
    pub planet_id: DbId,
}

/// A row from the `favourites_vehicles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FavouriteVehicle {
    pub id: DbId,
    pub user_id: DbId,
    pub vehicle_id: DbId,
}

/// DTO for linking a user to a favourite vehicle.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFavouriteVehicle {
    pub user_id: DbId,
    pub vehicle_id: DbId,
}
