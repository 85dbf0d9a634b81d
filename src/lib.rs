pub mod catalog;
pub mod feed;
pub mod scene;
pub mod session;
pub mod web;
