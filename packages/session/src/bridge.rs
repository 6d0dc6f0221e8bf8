//! Request/response channel between the host UI and the engine.
//!
//! Calls are user-paced, so the channel holds a single in-flight request;
//! each request carries its own one-shot response slot.

use speclens_scanner::ScanReport;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

/// Operations the host UI can request from the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineRequest {
    Enable,
    Disable,
    Scan,
    ShowReport,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineResponse {
    Done,
    Report(ScanReport),
    Html(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum BridgeError {
    #[error("engine is gone")]
    Closed,

    #[error("engine dropped the request without responding")]
    Dropped,
}

type Envelope = (EngineRequest, oneshot::Sender<EngineResponse>);

/// The host side: sends requests and awaits their responses.
#[derive(Debug, Clone)]
pub struct HostBridge {
    tx: mpsc::Sender<Envelope>,
}

/// The engine side: receives requests and answers through the responder.
#[derive(Debug)]
pub struct RequestListener {
    rx: mpsc::Receiver<Envelope>,
}

/// The response slot of one request.
#[derive(Debug)]
pub struct Responder(oneshot::Sender<EngineResponse>);

impl Responder {
    /// Send the response. The requester may already be gone, which is not
    /// an engine error.
    pub fn respond(self, response: EngineResponse) {
        let _ = self.0.send(response);
    }
}

/// Create a connected bridge pair with a single pending-request slot.
pub fn host_bridge() -> (HostBridge, RequestListener) {
    let (tx, rx) = mpsc::channel(1);
    (HostBridge { tx }, RequestListener { rx })
}

impl HostBridge {
    pub async fn request(&self, request: EngineRequest) -> Result<EngineResponse, BridgeError> {
        let (response_tx, response_rx) = oneshot::channel();
        self.tx
            .send((request, response_tx))
            .await
            .map_err(|_| BridgeError::Closed)?;
        response_rx.await.map_err(|_| BridgeError::Dropped)
    }
}

impl RequestListener {
    /// Next pending request, or `None` when every host handle is gone.
    pub async fn next(&mut self) -> Option<(EngineRequest, Responder)> {
        self.rx
            .recv()
            .await
            .map(|(request, tx)| (request, Responder(tx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_request_response_round_trip() {
        let (host, mut listener) = host_bridge();

        let engine = tokio::spawn(async move {
            while let Some((request, responder)) = listener.next().await {
                match request {
                    EngineRequest::Scan => {
                        let mut report = ScanReport::default();
                        report.checked_elements = 5;
                        responder.respond(EngineResponse::Report(report));
                    }
                    _ => responder.respond(EngineResponse::Done),
                }
            }
        });

        assert_eq!(
            host.request(EngineRequest::Enable).await.unwrap(),
            EngineResponse::Done
        );

        match host.request(EngineRequest::Scan).await.unwrap() {
            EngineResponse::Report(report) => assert_eq!(report.checked_elements, 5),
            other => panic!("expected report, got {:?}", other),
        }

        drop(host);
        engine.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_engine_reports_error() {
        let (host, listener) = host_bridge();
        drop(listener);

        assert_eq!(
            host.request(EngineRequest::Enable).await,
            Err(BridgeError::Closed)
        );
    }

    #[tokio::test]
    async fn test_dropped_request_reports_error() {
        let (host, mut listener) = host_bridge();

        let engine = tokio::spawn(async move {
            let (_request, responder) = listener.next().await.unwrap();
            drop(responder);
        });

        assert_eq!(
            host.request(EngineRequest::ShowReport).await,
            Err(BridgeError::Dropped)
        );
        engine.await.unwrap();
    }
}
