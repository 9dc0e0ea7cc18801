use aws_lambda_events::event::sqs::SqsEvent;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;

const PROCESSED_BODY: &str = "Message processed successfully";

/// Result handed back to the Lambda platform for every successful invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: PROCESSED_BODY.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum HandlerError {
    #[error("SQS event contains no records")]
    NoRecords,
    #[error("SQS message {message_id:?} has no body")]
    MissingBody { message_id: Option<String> },
}

/// Only the first record of the batch is read. Later records are ignored and,
/// since a successful return completes the whole batch, are not redelivered.
#[tracing::instrument(skip(event), fields(request_id = %event.context.request_id))]
pub(crate) async fn function_handler(
    event: LambdaEvent<SqsEvent>,
) -> Result<HandlerResponse, Error> {
    let (message_id, message) = match first_message(&event.payload) {
        Ok(first) => first,
        Err(e) => {
            tracing::error!("Failed to read SQS message: {}", e);
            return Err(Error::from(e));
        }
    };

    tracing::info!(message_id = ?message_id, "Received message from SQS: {}", message);

    Ok(HandlerResponse::success())
}

fn first_message(event: &SqsEvent) -> Result<(Option<&str>, &str), HandlerError> {
    let record = event.records.first().ok_or(HandlerError::NoRecords)?;
    let body = record.body.as_deref().ok_or_else(|| HandlerError::MissingBody {
        message_id: record.message_id.clone(),
    })?;

    Ok((record.message_id.as_deref(), body))
}
