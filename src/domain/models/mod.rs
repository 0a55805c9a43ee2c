// View-models mirroring the remote REST API responses.
// Field names are camelCase on the wire.

pub mod user;
pub mod chat;
pub mod doctor;
pub mod diagnosis;
pub mod appointment;
pub mod auth;

pub use user::User;
pub use chat::{MAX_MESSAGE_CHARS, Chat, ChatMessage, ChatRole, CreateChatRequest, SendMessageRequest, SendMessageResponse};
pub use doctor::{known_specialty, Doctor, SPECIALTIES};
pub use diagnosis::Diagnosis;
pub use appointment::{Appointment, AppointmentStatus};
pub use auth::{AuthResponse, LoginRequest, RegisterRequest, SessionUser};
