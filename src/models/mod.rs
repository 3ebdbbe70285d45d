// src/models/mod.rs

pub mod category;
pub mod de;
pub mod question;
pub mod quiz;
