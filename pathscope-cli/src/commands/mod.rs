pub mod common;
pub mod info;
pub mod paths;
pub mod route;
