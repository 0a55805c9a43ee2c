// Domain layer: view-models mirroring the remote API, form validation
// and the static education content.
// Pure Rust, no framework dependencies

pub mod models;
pub mod validation;
pub mod content;
