//! HTTP handlers for the Webhooks domain

pub mod receive;
