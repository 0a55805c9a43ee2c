pub mod diagnosis_layout;
pub mod footer;
pub mod locale_switcher;
pub mod navbar;
pub mod site_layout;

pub use diagnosis_layout::DiagnosisLayout;
pub use footer::Footer;
pub use locale_switcher::{localized_route, LocaleSwitcher};
pub use navbar::Navbar;
pub use site_layout::SiteLayout;
