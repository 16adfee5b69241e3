//! Request and response bodies for the HTTP surface.
//!
//! Field names follow the public JSON contract, which is why the message body
//! travels as `message` and the image payload as `Hax_Value`.

pub mod account;
pub mod application;
pub mod media;
pub mod message;

pub use account::{LoginRequest, RegisterRequest, ResetPasswordRequest, SendCodeRequest, UserResponse};
pub use application::{
    ApplicationResponse, CreateApplicationRequest, ListApplicationsQuery, UpdateStatusRequest,
};
pub use media::{ConvertImagePayload, ConvertImageResponse};
pub use message::{ContactMessageResponse, CreateMessageRequest};
