//! Game catalogue access.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use kiosko_client::{endpoints, ApiClient, Error as ApiError, Params};

use crate::entities::{Game, GameDraft, GamePatch};
use crate::repository::{Ack, CrudRepository};
use crate::Error;

#[cfg(test)]
#[path = "games_tests.rs"]
mod tests;

#[derive(Deserialize)]
struct GameListBody {
    games: Option<Vec<Game>>,
}

#[derive(Deserialize)]
struct GameDetailBody {
    game: Option<Game>,
}

/// CRUD gateway for games.
pub struct GameRepository {
    client: Arc<ApiClient>,
}

impl GameRepository {
    /// Creates the repository over the shared API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CrudRepository for GameRepository {
    type Entity = Game;
    type Draft = GameDraft;
    type Patch = GamePatch;

    async fn get_all(&self) -> Result<Option<Vec<Game>>, ApiError> {
        let body: GameListBody = self
            .client
            .request(&endpoints::GAME_LIST)
            .send(Params::new())
            .await?;
        Ok(body.games)
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<Game>, ApiError> {
        let body: GameDetailBody = self
            .client
            .request(&endpoints::GAME_DETAIL)
            .send(Params::new().with("id", id))
            .await?;
        Ok(body.game)
    }

    async fn create(&self, draft: &GameDraft) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::GAME_CREATE)
            .json(draft)?
            .send(Params::new())
            .await?;
        Ok(ack.success)
    }

    async fn update(&self, patch: &GamePatch) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::GAME_UPDATE)
            .json(patch)?
            .send(Params::new().with("id", patch.id))
            .await?;
        Ok(ack.success)
    }

    async fn remove(&self, id: u64) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::GAME_ARCHIVE)
            .send(Params::new().with("id", id))
            .await?;
        Ok(ack.success)
    }
}

/// Game domain service: a thin pass-through over the repository.
pub struct GameService {
    repository: Arc<GameRepository>,
}

impl GameService {
    /// Creates the service over its repository.
    pub fn new(repository: Arc<GameRepository>) -> Self {
        Self { repository }
    }

    /// Lists all games.
    #[instrument(skip(self))]
    pub async fn games(&self) -> Result<Option<Vec<Game>>, Error> {
        Ok(self.repository.get_all().await?)
    }

    /// Fetches one game.
    pub async fn game(&self, id: u64) -> Result<Option<Game>, Error> {
        Ok(self.repository.get_by_id(id).await?)
    }

    /// Creates a game.
    pub async fn create(&self, draft: &GameDraft) -> Result<bool, Error> {
        Ok(self.repository.create(draft).await?)
    }

    /// Updates a game.
    pub async fn update(&self, patch: &GamePatch) -> Result<bool, Error> {
        Ok(self.repository.update(patch).await?)
    }

    /// Archives a game.
    pub async fn archive(&self, id: u64) -> Result<bool, Error> {
        Ok(self.repository.remove(id).await?)
    }
}
