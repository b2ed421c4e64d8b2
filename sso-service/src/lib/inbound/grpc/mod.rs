mod auth_server;
pub mod handlers;
mod validator_server;

pub use auth_server::AuthGrpcService;
pub use validator_server::ValidatorGrpcService;
