//! Pure data structures shared by the policy, store and session layers.

pub mod booking;
pub mod menu;
pub mod user;

pub use booking::*;
pub use menu::*;
pub use user::*;
