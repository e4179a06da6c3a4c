pub mod calendar;
pub mod coming_soon_banner;
pub mod countdown;
pub mod gallery_photo;
pub mod page_layout;
pub mod page_navigation;
pub mod rsvp_modal;

pub use calendar::CalendarDisplay;
pub use coming_soon_banner::ComingSoonBanner;
pub use countdown::CountdownTimer;
pub use gallery_photo::GalleryPhoto;
pub use page_layout::PageLayout;
pub use page_navigation::PageNavigation;
pub use rsvp_modal::RsvpModal;
