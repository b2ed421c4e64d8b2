use std::sync::Arc;

use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::validate;
use crate::proto::validator_server::Validator;
use crate::proto::ValidateRequest;
use crate::proto::ValidateResponse;
use crate::token::ports::TokenValidatorPort;

pub struct ValidatorGrpcService<V>
where
    V: TokenValidatorPort,
{
    validator: Arc<V>,
}

impl<V> ValidatorGrpcService<V>
where
    V: TokenValidatorPort,
{
    pub fn new(validator: Arc<V>) -> Self {
        Self { validator }
    }
}

#[tonic::async_trait]
impl<V> Validator for ValidatorGrpcService<V>
where
    V: TokenValidatorPort,
{
    async fn validate(
        &self,
        request: Request<ValidateRequest>,
    ) -> Result<Response<ValidateResponse>, Status> {
        let response = validate::validate(self.validator.as_ref(), request.into_inner())?;
        Ok(Response::new(response))
    }
}
