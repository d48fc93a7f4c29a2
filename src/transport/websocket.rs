use std::{future::Future, sync::mpsc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::{
    runtime::{Builder, Runtime},
    sync::{mpsc as async_mpsc, watch},
    task::JoinHandle,
};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::{
    domain::connection_state::ConnectionState,
    usecases::contracts::{ChatTransport, TransportError, TransportEvent},
};

use super::endpoint::ChatEndpoint;

const WS_WORKER_STARTED: &str = "CHAT_WS_WORKER_STARTED";
const WS_WORKER_STOPPED: &str = "CHAT_WS_WORKER_STOPPED";
const WS_CONNECT_FAILED: &str = "CHAT_WS_CONNECT_FAILED";
const WS_READ_FAILED: &str = "CHAT_WS_READ_FAILED";
const WS_WRITE_FAILED: &str = "CHAT_WS_WRITE_FAILED";
const WS_EVENT_SEND_FAILED: &str = "CHAT_WS_EVENT_SEND_FAILED";
const WS_WORKER_PANICKED: &str = "CHAT_WS_WORKER_PANICKED";
const WS_SHUTDOWN_TIMED_OUT: &str = "CHAT_WS_SHUTDOWN_TIMED_OUT";

/// Time the worker gets to flush a close frame when the transport is dropped.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum TransportStartError {
    #[error("failed to initialize async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// WebSocket transport. The socket lives on a private tokio runtime; the
/// event loop talks to it only through channels.
#[derive(Debug)]
pub struct WebSocketTransport {
    runtime: Option<Runtime>,
    worker: Option<JoinHandle<()>>,
    outbound_tx: async_mpsc::UnboundedSender<String>,
    event_rx: mpsc::Receiver<TransportEvent>,
    stop_tx: Option<watch::Sender<bool>>,
}

impl WebSocketTransport {
    /// Starts connecting in the background. Progress is reported through
    /// [`ChatTransport::try_next_event`].
    pub fn connect(endpoint: &ChatEndpoint) -> Result<Self, TransportStartError> {
        install_crypto_provider();

        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("chatbot-ws")
            .enable_all()
            .build()
            .map_err(TransportStartError::Runtime)?;

        let (event_tx, event_rx) = mpsc::channel();
        let (outbound_tx, outbound_rx) = async_mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = watch::channel(false);

        let worker = supervise(
            &runtime,
            run_connection(
                endpoint.as_str().to_owned(),
                event_tx.clone(),
                outbound_rx,
                stop_rx,
            ),
            event_tx,
        );

        tracing::info!(
            code = WS_WORKER_STARTED,
            endpoint = %endpoint,
            secure = endpoint.is_secure(),
            "chat websocket worker started"
        );

        Ok(Self {
            runtime: Some(runtime),
            worker: Some(worker),
            outbound_tx,
            event_rx,
            stop_tx: Some(stop_tx),
        })
    }
}

/// `wss` handshakes need a process-wide rustls provider. Installing twice is
/// harmless; the first provider wins.
fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Runs `worker` as its own task. A panic in it is reported as `Errored`.
fn supervise<F>(
    runtime: &Runtime,
    worker: F,
    events: mpsc::Sender<TransportEvent>,
) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    runtime.spawn(async move {
        if let Err(error) = tokio::spawn(worker).await {
            if error.is_panic() {
                tracing::error!(
                    code = WS_WORKER_PANICKED,
                    error = %error,
                    "chat websocket worker panicked"
                );
                emit(&events, TransportEvent::StateChanged(ConnectionState::Errored));
            }
        }
    })
}

impl ChatTransport for WebSocketTransport {
    fn send_frame(&mut self, frame: String) -> Result<(), TransportError> {
        self.outbound_tx
            .send(frame)
            .map_err(|_| TransportError::WorkerGone)
    }

    fn try_next_event(&mut self) -> Option<TransportEvent> {
        self.event_rx.try_recv().ok()
    }
}

impl Drop for WebSocketTransport {
    fn drop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(true);
        }

        let Some(runtime) = self.runtime.take() else {
            return;
        };

        // The worker sends the close frame before it exits.
        if let Some(worker) = self.worker.take() {
            let finished =
                runtime.block_on(async { tokio::time::timeout(SHUTDOWN_GRACE, worker).await });
            if finished.is_err() {
                tracing::warn!(
                    code = WS_SHUTDOWN_TIMED_OUT,
                    "chat websocket worker did not stop in time"
                );
            }
        }

        runtime.shutdown_timeout(SHUTDOWN_GRACE);
    }
}

async fn run_connection(
    url: String,
    events: mpsc::Sender<TransportEvent>,
    mut outbound_rx: async_mpsc::UnboundedReceiver<String>,
    mut stop_rx: watch::Receiver<bool>,
) {
    let connected = tokio::select! {
        result = connect_async(url.as_str()) => result,
        _ = stop_rx.changed() => return,
    };

    let stream = match connected {
        Ok((stream, _response)) => stream,
        Err(error) => {
            tracing::warn!(
                code = WS_CONNECT_FAILED,
                error = %error,
                url = %url,
                "chat websocket connect failed"
            );
            emit(&events, TransportEvent::StateChanged(ConnectionState::Errored));
            return;
        }
    };

    if !emit(&events, TransportEvent::StateChanged(ConnectionState::Open)) {
        return;
    }

    let (mut write, mut read) = stream.split();

    let final_state = loop {
        tokio::select! {
            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    let _ = write.send(Message::Close(None)).await;
                    break ConnectionState::Closed;
                }
            }
            Some(frame) = outbound_rx.recv() => {
                if let Err(error) = write.send(Message::Text(frame)).await {
                    tracing::warn!(
                        code = WS_WRITE_FAILED,
                        error = %error,
                        "chat websocket write failed"
                    );
                    break ConnectionState::Errored;
                }
            }
            incoming = read.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    if !emit(&events, TransportEvent::Frame(text)) {
                        break ConnectionState::Closed;
                    }
                }
                Some(Ok(Message::Close(frame))) => {
                    tracing::debug!(frame = ?frame, "chat websocket closed by server");
                    break ConnectionState::Closed;
                }
                Some(Ok(Message::Binary(data))) => {
                    tracing::debug!(len = data.len(), "ignoring binary chat frame");
                }
                Some(Ok(_)) => {}
                Some(Err(error)) => {
                    tracing::warn!(
                        code = WS_READ_FAILED,
                        error = %error,
                        "chat websocket read failed"
                    );
                    break ConnectionState::Errored;
                }
                None => break ConnectionState::Closed,
            }
        }
    };

    emit(&events, TransportEvent::StateChanged(final_state));
    tracing::info!(
        code = WS_WORKER_STOPPED,
        state = final_state.as_label(),
        "chat websocket worker stopped"
    );
}

fn emit(events: &mpsc::Sender<TransportEvent>, event: TransportEvent) -> bool {
    match events.send(event) {
        Ok(()) => true,
        Err(error) => {
            tracing::debug!(
                code = WS_EVENT_SEND_FAILED,
                error = %error,
                "event loop is gone; dropping transport event"
            );
            false
        }
    }
}
