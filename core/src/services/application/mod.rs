//! Application lifecycle service module
//!
//! Citizen reports are created as `Pending` and moved between statuses by staff.
//! There is no transition table: any status may follow any other.

mod service;

#[cfg(test)]
mod tests;

pub use service::ApplicationService;
