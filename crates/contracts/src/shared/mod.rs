pub mod api_envelope;
pub mod health;
