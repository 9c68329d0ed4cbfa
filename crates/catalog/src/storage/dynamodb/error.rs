//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `catalog_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use catalog_core::storage::StoreError;

/// Map any operation's SDK error to `StoreError`.
///
/// Errors returned by the service keep their code and message. Failures that
/// never reached the service (construction, dispatch, timeout, unparsable
/// response) become `ConnectionFailed`.
pub fn map_sdk_error<E, R>(err: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    match err {
        SdkError::ServiceError(context) => {
            let service_error = context.err();
            StoreError::service(
                service_error.code().unwrap_or("Unknown"),
                service_error.message().unwrap_or_default(),
            )
        }
        other => StoreError::ConnectionFailed(DisplayErrorContext(&other).to_string()),
    }
}

/// Returns true if an update was rejected by its `attribute_exists` condition,
/// i.e. the item to update does not exist.
pub fn is_conditional_check_failed<R>(err: &SdkError<UpdateItemError, R>) -> bool {
    matches!(
        err.as_service_error(),
        Some(UpdateItemError::ConditionalCheckFailedException(_))
    )
}
