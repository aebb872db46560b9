//! Contract Detail Flow
//!
//! Deletion after the user has confirmed it.

use crate::domain::ClientError;
use crate::route::Route;
use crate::service::ContractService;

/// Result of a confirmed delete
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// Gone; show `next`
    Deleted { next: Route },
    /// Still there; stay on the detail view and show `message` unless
    /// `error` ends the session
    Failed { message: String, error: ClientError },
}

/// Issue exactly one delete for `id`.
pub async fn delete_contract<S>(service: &S, id: &str) -> DeleteOutcome
where
    S: ContractService + ?Sized,
{
    match service.delete_contract(id).await {
        Ok(()) => DeleteOutcome::Deleted { next: Route::Home },
        Err(error) => {
            log::error!("There was an error deleting contract {}: {}", id, error);
            DeleteOutcome::Failed {
                message: "Failed to delete contract. Please try again later.".to_string(),
                error,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::mock::{MockContractService, ServiceCall};

    #[tokio::test]
    async fn test_delete_success_returns_home() {
        let service = MockContractService::new();

        let outcome = delete_contract(&service, "65a1").await;

        assert_eq!(outcome, DeleteOutcome::Deleted { next: Route::Home });
        assert_eq!(service.calls(), vec![ServiceCall::Delete("65a1".to_string())]);
    }

    #[tokio::test]
    async fn test_delete_failure_stays() {
        let service = MockContractService::new();
        service.set_delete(Err(ClientError::Api {
            status: 404,
            detail: Some("Contract not found".to_string()),
        }));

        let outcome = delete_contract(&service, "65a1").await;

        assert_eq!(
            outcome,
            DeleteOutcome::Failed {
                message: "Failed to delete contract. Please try again later.".to_string(),
                error: ClientError::Api {
                    status: 404,
                    detail: Some("Contract not found".to_string()),
                },
            }
        );
        assert_eq!(service.call_count(), 1);
    }

    #[tokio::test]
    async fn test_delete_unauthorized_is_reported() {
        let service = MockContractService::new();
        service.set_delete(Err(ClientError::Unauthorized(None)));

        match delete_contract(&service, "65a1").await {
            DeleteOutcome::Failed { error, .. } => assert!(error.is_unauthorized()),
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(service.calls(), vec![ServiceCall::Delete("65a1".to_string())]);
    }
}
