//! Per-request gates: bearer-token authentication and author authorization.

pub mod authenticate;
pub mod authorize;
pub mod identity;

pub use authenticate::AuthenticationGate;
pub use authorize::AuthorizationGate;
pub use identity::CallerIdentity;
