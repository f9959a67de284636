//! Page components, one per route.

pub mod dashboard;
pub mod home;
pub mod login;
