//! Host Routes

pub mod health;
pub mod proxy;
