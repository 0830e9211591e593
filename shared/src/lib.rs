pub mod api;
pub mod controller;
pub mod cookie;
pub mod filter;
pub mod form;
pub mod model;
pub mod page;

pub use model::{Amenity, Place, Review, ReviewAuthor};
pub use page::{Access, Page};
