// src/handlers/mod.rs

pub mod category;
pub mod docs;
pub mod question;
pub mod quiz;
