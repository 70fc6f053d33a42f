use crate::core::errors::CashoutError;
use crate::core::models::player::Player;
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    players: Arc<RwLock<Vec<Player>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            players: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn insert_player(&self, player: Player, max_players: usize) -> Result<(), CashoutError> {
        let mut players = self.players.write().await;
        if players.iter().any(|p| p.name == player.name) {
            return Err(CashoutError::DuplicatePlayer(player.name));
        }
        if players.len() >= max_players {
            return Err(CashoutError::TooManyPlayers(max_players));
        }
        players.push(player);
        Ok(())
    }

    async fn get_player(&self, player_id: &str) -> Result<Option<Player>, CashoutError> {
        let players = self.players.read().await;
        Ok(players.iter().find(|p| p.id == player_id).cloned())
    }

    async fn get_players(&self) -> Result<Vec<Player>, CashoutError> {
        let players = self.players.read().await;
        Ok(players.clone())
    }

    async fn remove_player(&self, player_id: &str) -> Result<Option<Player>, CashoutError> {
        let mut players = self.players.write().await;
        // `remove` keeps the remaining players in insertion order
        Ok(players
            .iter()
            .position(|p| p.id == player_id)
            .map(|index| players.remove(index)))
    }

    async fn clear(&self) -> Result<usize, CashoutError> {
        let mut players = self.players.write().await;
        let removed = players.len();
        players.clear();
        Ok(removed)
    }
}
