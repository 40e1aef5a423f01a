pub mod auth;
pub mod browse;
pub mod players;
pub mod render;
pub mod teams;
