pub mod gallery;
pub mod intro;
pub mod main_page;
pub mod wishlist;

pub use gallery::GalleryPage;
pub use intro::IntroPage;
pub use main_page::MainPage;
pub use wishlist::WishlistPage;
