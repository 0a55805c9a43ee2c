// Server-only adapters to external collaborators
pub mod backend;
