mod episode;
mod home;
mod not_found;

pub use episode::EpisodePage;
pub use home::Home;
pub use not_found::NotFound;
