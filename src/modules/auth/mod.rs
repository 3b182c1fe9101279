pub mod controller;
pub mod model;
pub mod registration;
pub mod router;
pub mod service;
pub mod tokens;
