use crate::{AttemptContext, FlowError, FlowResult, Outcome, RequestController};

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use log::{error, info, warn};

/// Run a workflow body with panic recovery. A panic becomes
/// `FlowError::Unknown` instead of tearing down the screen.
pub async fn run_guarded<F, T>(ctx: &AttemptContext, body: F) -> FlowResult<T>
where
    F: Future<Output = FlowResult<T>>,
{
    match AssertUnwindSafe(body).catch_unwind().await {
        Ok(result) => result,
        Err(panic) => {
            let panic_msg = panic_message(panic);
            error!("{} Workflow panicked: {}", ctx.log_prefix(), panic_msg);
            Err(FlowError::unknown(panic_msg))
        }
    }
}

/// Convert a finished run into user-visible state and an `Outcome`.
///
/// Every error is caught here; none propagates past the workflow.
pub fn settle(
    ctx: &AttemptContext,
    controller: &RequestController,
    result: FlowResult<Outcome>,
) -> Outcome {
    if !controller.is_active() {
        info!(
            "{} Screen disposed after {}ms, dropping result",
            ctx.log_prefix(),
            ctx.elapsed_ms()
        );
        return Outcome::Abandoned;
    }

    match result {
        Ok(Outcome::Navigate(route)) => {
            info!(
                "{} Succeeded in {}ms, navigating to {}",
                ctx.log_prefix(),
                ctx.elapsed_ms(),
                route
            );
            controller.succeed();
            Outcome::Navigate(route)
        }
        Ok(Outcome::Notice(message)) => {
            info!("{} Succeeded in {}ms", ctx.log_prefix(), ctx.elapsed_ms());
            controller.notify(message.clone());
            Outcome::Notice(message)
        }
        Ok(other) => other,
        Err(FlowError::Busy { .. }) => {
            warn!("{} Rejected: request already in flight", ctx.log_prefix());
            Outcome::Busy
        }
        Err(err) => {
            let message = err.user_message(ctx.role, ctx.operation);
            match &err {
                FlowError::Validation { .. } => {
                    info!("{} Validation failed: {}", ctx.log_prefix(), message);
                    controller.reject(message.clone());
                }
                _ => {
                    warn!(
                        "{} Failed after {}ms: {}",
                        ctx.log_prefix(),
                        ctx.elapsed_ms(),
                        err
                    );
                    controller.fail(message.clone());
                }
            }
            Outcome::Failed {
                code: err.error_code(),
                message,
                field: err.field(),
            }
        }
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    match panic.downcast::<String>() {
        Ok(msg) => *msg,
        Err(any) => match any.downcast::<&str>() {
            Ok(msg) => msg.to_string(),
            Err(_) => "Unknown panic".to_string(),
        },
    }
}
