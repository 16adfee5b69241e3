//! HTTP layer of the CityReport backend: actix-web routes, request/response
//! bodies, error mapping and application wiring.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app::create_app;
pub use state::{Adapters, AppState, Repositories};
