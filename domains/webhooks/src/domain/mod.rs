//! Domain layer for the Webhooks domain

pub mod entities;
