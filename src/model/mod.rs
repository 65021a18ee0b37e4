pub mod asset;
pub mod game_result;
pub mod price;
