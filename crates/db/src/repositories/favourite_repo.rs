//! Repositories for the three favourites join tables.
//!
//! Inserts perform no existence check on the referenced ids; the foreign key
//! constraints are the only guard against dangling references, and a
//! violation surfaces as `sqlx::Error` for the caller to classify.

use holocron_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::favourite::{
    CreateFavouriteCharacter, CreateFavouritePlanet, CreateFavouriteVehicle, FavouriteCharacter,
    FavouritePlanet, FavouriteVehicle,
};

/// Provides operations for the `favourites_characters` table.
pub struct FavouriteCharacterRepo;

impl FavouriteCharacterRepo {
    /// Insert a favourite-character link, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateFavouriteCharacter,
    ) -> Result<FavouriteCharacter, sqlx::Error> {
        sqlx::query_as::<_, FavouriteCharacter>(
            "INSERT INTO favourites_characters (user_id, character_id)
             VALUES ($1, $2)
             RETURNING id, user_id, character_id",
        )
        .bind(input.user_id)
        .bind(input.character_id)
        .fetch_one(pool)
        .await
    }

    /// List all favourite-character links for a user, in insertion order.
    pub async fn list_by_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<FavouriteCharacter>, sqlx::Error> {
        sqlx::query_as::<_, FavouriteCharacter>(
            "SELECT id, user_id, character_id FROM favourites_characters
             WHERE user_id = $1
             ORDER BY id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}

/// Provides operations for the `favourites_planets` table.
pub struct FavouritePlanetRepo;

impl FavouritePlanetRepo {
    /// Insert a favourite-planet link, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateFavouritePlanet,
    ) -> Result<FavouritePlanet, sqlx::Error> {
        sqlx::query_as::<_, FavouritePlanet>(
            "INSERT INTO favourites_planets (user_id, planet_id)
             VALUES ($1, $2)
             RETURNING id, user_id, planet_id",
        )
        .bind(input.user_id)
        .bind(input.planet_id)
        .fetch_one(pool)
        .await
    }

    /// List all favourite-planet links for a user, in insertion order.
    pub async fn list_by_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<FavouritePlanet>, sqlx::Error> {
        sqlx::query_as::<_, FavouritePlanet>(
            "SELECT id, user_id, planet_id FROM favourites_planets
             WHERE user_id = $1
             ORDER BY id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}

/// Provides operations for the `favourites_vehicles` table.
pub struct FavouriteVehicleRepo;

impl FavouriteVehicleRepo {
    /// Insert a favourite-vehicle link, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateFavouriteVehicle,
    ) -> Result<FavouriteVehicle, sqlx::Error> {
        sqlx::query_as::<_, FavouriteVehicle>(
            "INSERT INTO favourites_vehicles (user_id, vehicle_id)
             VALUES ($1, $2)
             RETURNING id, user_id, vehicle_id",
        )
        .bind(input.user_id)
        .bind(input.vehicle_id)
        .fetch_one(pool)
        .await
    }

    /// List all favourite-vehicle links for a user, in insertion order.
    pub async fn list_by_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<FavouriteVehicle>, sqlx::Error> {
        sqlx::query_as::<_, FavouriteVehicle>(
            "SELECT id, user_id, vehicle_id FROM favourites_vehicles
             WHERE user_id = $1
             ORDER BY id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
