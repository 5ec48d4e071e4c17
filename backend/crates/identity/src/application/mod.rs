//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod register;
pub mod resolve_user;
pub mod session_token;

// Re-exports
pub use authenticate::{AuthenticateInput, AuthenticateOutput, AuthenticateUseCase};
pub use config::IdentityConfig;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use resolve_user::ResolveUserIdUseCase;
pub use session_token::{VerifyTokenUseCase, issue_token};
