pub mod errors;
pub mod routing;
pub mod state;
pub mod storage;
pub mod utils;

// Server-only logging module
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

// Client services and hooks (compiled for both targets, inert on the server)
pub mod hooks;
pub mod services;
