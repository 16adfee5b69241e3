//! Middleware configuration for the actix-web application.

pub mod cors;
