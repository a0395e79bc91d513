//! gRPC adapters over the registry services.

mod product_grpc;
mod user_grpc;

pub use product_grpc::ProductGrpcService;
pub use user_grpc::UserGrpcService;

use common::AppError;
use domain::DomainError;
use tonic::Status;

/// Translate a domain failure into the status sent to gRPC callers.
pub(crate) fn to_status(err: DomainError) -> Status {
    Status::from(AppError::from(err))
}

/// Reject an empty identifier before it reaches the store.
pub(crate) fn require_id(id: &str) -> Result<(), Status> {
    if id.is_empty() {
        return Err(to_status(DomainError::validation("id", "id is required")));
    }
    Ok(())
}
