//! Runtime backing the `blocking_call()` variants.

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Handle, Runtime};

use crate::{Error, Result};

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn runtime() -> Result<&'static Runtime> {
    if let Some(runtime) = RUNTIME.get() {
        return Ok(runtime);
    }

    let runtime = Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("ngrok-api-blocking")
        .enable_all()
        .build()
        .map_err(|e| Error::Runtime(format!("failed to start runtime: {e}")))?;

    // Another thread may have won the race; its runtime is used and ours dropped.
    let _ = RUNTIME.set(runtime);
    RUNTIME
        .get()
        .ok_or_else(|| Error::Runtime("runtime unavailable".to_string()))
}

/// Drive `future` to completion on the current thread.
///
/// Fails with [`Error::Runtime`] when called from inside a tokio runtime,
/// where blocking would stall the executor; use the async `call()` there.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output> {
    if Handle::try_current().is_ok() {
        return Err(Error::Runtime(
            "blocking_call() cannot be used from within an async runtime; await call() instead"
                .to_string(),
        ));
    }

    Ok(runtime()?.block_on(future))
}
