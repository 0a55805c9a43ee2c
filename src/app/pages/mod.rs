// Public content
pub mod about;
pub mod doctors;
pub mod education;
pub mod faq;
pub mod home;
pub mod legal;
pub mod not_found;

// Account
pub mod login;
pub mod profile;
pub mod register;

// AI diagnosis
pub mod diagnosis;

pub use about::About;
pub use diagnosis::{DiagnosisChat, DiagnosisHome};
pub use doctors::Doctors;
pub use education::{Education, EducationArticle};
pub use faq::Faq;
pub use home::Home;
pub use legal::{Privacy, Terms};
pub use login::Login;
pub use not_found::{NotFound, Root};
pub use profile::Profile;
pub use register::Register;
