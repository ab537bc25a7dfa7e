//! Clients for external quote services

pub mod bcb;
