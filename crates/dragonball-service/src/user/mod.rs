//! Identity management and favourites.

pub mod favourites;
pub mod service;

pub use favourites::FavouriteService;
pub use service::UserService;
