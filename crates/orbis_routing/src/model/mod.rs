pub mod bbox;
pub mod guidance;
pub mod route;
pub mod section;
pub mod summary;
pub mod traffic;
