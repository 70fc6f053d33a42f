pub mod audit;
pub mod player;
pub mod settlement;
