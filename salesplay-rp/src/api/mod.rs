//! HTTP API handlers for salesplay-rp

pub mod audio;
pub mod chat;
pub mod feedback;
pub mod health;
pub mod request;

pub use audio::audio_socket;
pub use chat::chat;
pub use feedback::feedback;
pub use health::health_routes;
pub use request::SessionRequest;
