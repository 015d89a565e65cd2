pub mod character;
pub mod episode;
pub mod faction;
pub mod home;
pub mod location;
pub mod lore;
pub mod not_found;
pub mod search;
pub mod ship;
pub mod technology;

pub use home::Home;
pub use not_found::NotFound;
