pub mod card;
pub mod footer;
pub mod kind_icon;
pub mod list;
pub mod navbar;
pub mod page;
pub mod tags;

pub use card::{Card, EmptyState, Field, Section};
pub use footer::Footer;
pub use kind_icon::KindIcon;
pub use list::ListPage;
pub use navbar::Navbar;
pub use page::Page;
pub use tags::TagList;
