// Same-origin API client used by the pages
pub mod api_service;

pub use api_service::ApiService;
