pub mod abstract_trait;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod di;
pub mod forms;
pub mod guard;
pub mod routes;
pub mod service;
pub mod session;
pub mod state;
pub mod theme;
