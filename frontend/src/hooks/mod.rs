pub mod use_countdown;
pub mod use_wedding;

pub use use_countdown::use_countdown;
pub use use_wedding::use_wedding;
