pub mod button;
pub mod card;
pub mod common;
pub mod disclaimer;
pub mod form_field;
pub mod require_auth;
pub mod responsive_tabs;

// Domain cards
pub mod diagnosis_card;
pub mod doctor_card;

// Diagnosis chat
pub mod chat_input;
pub mod chat_messages;
pub mod chat_sidebar;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use chat_input::ChatInput;
pub use chat_messages::ChatMessages;
pub use chat_sidebar::ChatSidebar;
pub use common::{error_text, EmptyState, ErrorMessage, LoadingText};
pub use diagnosis_card::DiagnosisCard;
pub use disclaimer::MedicalDisclaimer;
pub use doctor_card::DoctorCard;
pub use form_field::FormField;
pub use require_auth::RequireAuth;
pub use responsive_tabs::{collapse_tabs, ResponsiveTabs, TabItem, TabLayout};
