mod header;
mod player;

pub use header::Header;
pub use player::Player;
