/// Traits describing the resource families of the API
pub mod interfaces;
/// Implementations of the resource traits for the client
pub mod services;
