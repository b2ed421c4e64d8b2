pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::account;
pub use domain::token;
pub use outbound::repositories;

pub mod proto {
    tonic::include_proto!("sso");
}
