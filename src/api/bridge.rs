//
//  spotify-web-api
//  api/bridge.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Delivery of request outcomes.
//!
//! A sent [`Call`](super::Call) runs as a task on one of these executors,
//! chosen when it is sent:
//!
//! 1. the runtime registered with
//!    [`SpotifyClient::set_runtime`](super::SpotifyClient::set_runtime);
//! 2. the tokio runtime the caller is already running on;
//! 3. a dedicated thread driving a single-threaded runtime for just that
//!    request.
//!
//! Whichever executor runs it, the outcome goes to exactly one place: the
//! callback, or the [`Pending`] future. [`Pending`] is a plain `futures`
//! oneshot and can be awaited from any executor or blocked on.
//!
//! Each request moves through `Pending -> Resolved | Rejected | Aborted`
//! once. Aborting wins only while the request is still pending; after that,
//! nothing is delivered to either path.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use futures::future::{AbortHandle, Abortable};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::runtime::Handle;
use tracing::{trace, warn};

use super::common::ApiError;
use super::request::RequestDescriptor;
use super::transport::Transport;

/// Receives the outcome of a request sent in callback mode.
pub type Callback<T> = Box<dyn FnOnce(Result<T, ApiError>) + Send + 'static>;

const PENDING: u8 = 0;
const RESOLVED: u8 = 1;
const REJECTED: u8 = 2;
const ABORTED: u8 = 3;

/// Lifecycle of a sent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Pending,
    Resolved,
    Rejected,
    Aborted,
}

impl RequestState {
    fn from_raw(raw: u8) -> Self {
        match raw {
            RESOLVED => Self::Resolved,
            REJECTED => Self::Rejected,
            ABORTED => Self::Aborted,
            _ => Self::Pending,
        }
    }
}

#[derive(Debug)]
struct HandleInner {
    state: AtomicU8,
    abort: AbortHandle,
}

/// Cancellation handle for one in-flight request.
#[derive(Debug, Clone)]
pub struct RequestHandle {
    inner: Arc<HandleInner>,
}

impl RequestHandle {
    fn new(abort: AbortHandle) -> Self {
        Self {
            inner: Arc::new(HandleInner {
                state: AtomicU8::new(PENDING),
                abort,
            }),
        }
    }

    /// Aborts the request if it has not settled yet.
    ///
    /// Returns `false` when the outcome was already delivered. After a
    /// successful abort neither the callback nor the future is ever
    /// settled.
    pub fn abort(&self) -> bool {
        let aborted = self
            .inner
            .state
            .compare_exchange(PENDING, ABORTED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();

        if aborted {
            trace!("Aborting request");
            self.inner.abort.abort();
        }
        aborted
    }

    pub fn is_aborted(&self) -> bool {
        self.state() == RequestState::Aborted
    }

    pub fn state(&self) -> RequestState {
        RequestState::from_raw(self.inner.state.load(Ordering::Acquire))
    }

    /// Claims the right to deliver. Only the first caller wins.
    fn settle(&self, ok: bool) -> bool {
        let next = if ok { RESOLVED } else { REJECTED };
        self.inner
            .state
            .compare_exchange(PENDING, next, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

pub(crate) enum Sink<T> {
    Callback(Callback<T>),
    Channel(oneshot::Sender<Result<T, ApiError>>),
}

impl<T> Sink<T> {
    fn send(self, outcome: Result<T, ApiError>) {
        match self {
            Self::Callback(callback) => callback(outcome),
            Self::Channel(tx) => {
                if tx.send(outcome).is_err() {
                    trace!("Pending future dropped before delivery");
                }
            }
        }
    }
}

/// Owns the sink of one request.
///
/// If the task is dropped without delivering and the request wasn't
/// aborted, the sink receives [`ApiError::Interrupted`] instead.
struct Delivery<T> {
    sink: Option<Sink<T>>,
    handle: RequestHandle,
}

impl<T> Delivery<T> {
    fn deliver(mut self, outcome: Result<T, ApiError>) {
        if let Some(sink) = self.sink.take() {
            if self.handle.settle(outcome.is_ok()) {
                sink.send(outcome);
            } else {
                trace!("Request aborted, dropping outcome");
            }
        }
    }
}

impl<T> Drop for Delivery<T> {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            if self.handle.settle(false) {
                warn!("Request task dropped before completing");
                sink.send(Err(ApiError::Interrupted));
            }
        }
    }
}

/// Future side of a request sent without a callback.
///
/// Resolves once with the outcome. If the request is aborted the future
/// stays pending forever.
#[must_use = "futures do nothing unless polled"]
pub struct Pending<T> {
    rx: oneshot::Receiver<Result<T, ApiError>>,
    handle: RequestHandle,
}

impl<T> Pending<T> {
    pub fn handle(&self) -> &RequestHandle {
        &self.handle
    }

    /// Aborts the request, consuming the future.
    pub fn abort(self) -> RequestHandle {
        self.handle.abort();
        self.handle
    }
}

impl<T> Future for Pending<T> {
    type Output = Result<T, ApiError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(oneshot::Canceled)) if this.handle.is_aborted() => Poll::Pending,
            Poll::Ready(Err(oneshot::Canceled)) => Poll::Ready(Err(ApiError::Interrupted)),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T> std::fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pending")
            .field("state", &self.handle.state())
            .finish()
    }
}

pub(crate) fn pending<T>(
    runtime: Option<Handle>,
    transport: Transport,
    request: Result<RequestDescriptor, ApiError>,
) -> Pending<T>
where
    T: DeserializeOwned + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    let handle = spawn(runtime, transport, request, Sink::Channel(tx));
    Pending { rx, handle }
}

pub(crate) fn spawn<T>(
    runtime: Option<Handle>,
    transport: Transport,
    request: Result<RequestDescriptor, ApiError>,
    sink: Sink<T>,
) -> RequestHandle
where
    T: DeserializeOwned + Send + 'static,
{
    let (abort, registration) = AbortHandle::new_pair();
    let handle = RequestHandle::new(abort);
    let delivery = Delivery {
        sink: Some(sink),
        handle: handle.clone(),
    };

    let task = Abortable::new(run(transport, request, delivery), registration);
    let task = async move {
        if task.await.is_err() {
            trace!("Request task cancelled");
        }
    };

    match runtime.or_else(|| Handle::try_current().ok()) {
        Some(executor) => {
            executor.spawn(task);
        }
        None => spawn_dedicated(task),
    }

    handle
}

async fn run<T>(
    transport: Transport,
    request: Result<RequestDescriptor, ApiError>,
    delivery: Delivery<T>,
) where
    T: DeserializeOwned,
{
    let outcome = match request {
        Ok(request) => transport.execute(request).await.and_then(decode::<T>),
        Err(e) => Err(e),
    };
    delivery.deliver(outcome);
}

/// Decodes a raw outcome, treating an empty success body as `null` when the
/// target type can't be built from `""`.
fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    if value.as_str() == Some("") {
        return serde_json::from_value(value)
            .or_else(|_| serde_json::from_value(Value::Null))
            .map_err(ApiError::Decode);
    }
    serde_json::from_value(value).map_err(ApiError::Decode)
}

/// Runs `task` on its own thread when no tokio runtime is available.
fn spawn_dedicated<F>(task: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    trace!("No runtime available, running request on a dedicated thread");

    let spawned = std::thread::Builder::new()
        .name("spotify-web-api-request".to_string())
        .spawn(move || {
            match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime.block_on(task),
                Err(e) => warn!("Failed to start request runtime: {}", e),
            }
        });

    if let Err(e) = spawned {
        warn!("Failed to spawn request thread: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Device {
        id: String,
    }

    #[test]
    fn test_decode_empty_body() {
        let raw: Value = decode(Value::String(String::new())).unwrap();
        assert_eq!(raw, Value::String(String::new()));

        let optional: Option<Device> = decode(Value::String(String::new())).unwrap();
        assert_eq!(optional, None);

        assert!(matches!(
            decode::<Device>(Value::String(String::new())),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_typed_value() {
        let device: Device = decode(serde_json::json!({"id": "abc"})).unwrap();
        assert_eq!(device.id, "abc");
    }

    #[test]
    fn test_handle_settles_once() {
        let (abort, _registration) = AbortHandle::new_pair();
        let handle = RequestHandle::new(abort);

        assert_eq!(handle.state(), RequestState::Pending);
        assert!(handle.settle(true));
        assert!(!handle.settle(false));
        assert!(!handle.abort());
        assert_eq!(handle.state(), RequestState::Resolved);
    }

    #[test]
    fn test_abort_blocks_delivery() {
        let (abort, _registration) = AbortHandle::new_pair();
        let handle = RequestHandle::new(abort);

        assert!(handle.abort());
        assert!(handle.is_aborted());
        assert!(!handle.settle(true));
        assert!(!handle.abort());
    }

    #[test]
    fn test_dropped_delivery_reports_interruption() {
        let (abort, _registration) = AbortHandle::new_pair();
        let handle = RequestHandle::new(abort);
        let (tx, mut rx) = oneshot::channel::<Result<Value, ApiError>>();

        drop(Delivery {
            sink: Some(Sink::Channel(tx)),
            handle: handle.clone(),
        });

        assert!(matches!(rx.try_recv(), Ok(Some(Err(ApiError::Interrupted)))));
        assert_eq!(handle.state(), RequestState::Rejected);
    }

    #[test]
    fn test_aborted_delivery_is_silent() {
        let (abort, _registration) = AbortHandle::new_pair();
        let handle = RequestHandle::new(abort);
        let (tx, mut rx) = oneshot::channel::<Result<Value, ApiError>>();
        handle.abort();

        Delivery {
            sink: Some(Sink::Channel(tx)),
            handle: handle.clone(),
        }
        .deliver(Ok(Value::Null));

        assert!(rx.try_recv().is_err());
    }
}
