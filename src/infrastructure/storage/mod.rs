pub mod in_memory;

use crate::core::errors::CashoutError;
use crate::core::models::player::Player;
use async_trait::async_trait;

/// Roster of the one running session. Players come back in insertion order.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Appends `player` unless its name is taken or the roster already holds
    /// `max_players`. The checks and the insert happen atomically.
    async fn insert_player(&self, player: Player, max_players: usize) -> Result<(), CashoutError>;
    async fn get_player(&self, player_id: &str) -> Result<Option<Player>, CashoutError>;
    async fn get_players(&self) -> Result<Vec<Player>, CashoutError>;
    async fn remove_player(&self, player_id: &str) -> Result<Option<Player>, CashoutError>;
    async fn clear(&self) -> Result<usize, CashoutError>;
}
