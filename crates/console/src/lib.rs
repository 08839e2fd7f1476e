pub mod cli;
pub mod controller;
pub mod di;
pub mod navigation;
pub mod prompt;
pub mod router;
pub mod service;
pub mod session;
pub mod state;
pub mod store;
pub mod view;
