// src/infrastructure/mod.rs
pub mod catalog;
pub mod orders;
pub mod payment;
pub mod storage;
