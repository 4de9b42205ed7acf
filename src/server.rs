//! Loopback toggle endpoint
//!
//! `GET /toggleFocus` on `127.0.0.1:<port>` flips the shared focus state.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use tiny_http::{Method, Request, Response, Server};

use crate::error::{BillboardError, BillboardResult};
use crate::focus::FocusController;

pub const TOGGLE_PATH: &str = "/toggleFocus";

const POLL: Duration = Duration::from_millis(100);

/// What a request resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Toggle,
    MethodNotAllowed,
    NotFound,
}

impl Route {
    pub fn resolve(method: &Method, url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        match (path == TOGGLE_PATH, method) {
            (true, Method::Get) => Route::Toggle,
            (true, _) => Route::MethodNotAllowed,
            (false, _) => Route::NotFound,
        }
    }

    fn status(self) -> (u16, &'static str) {
        match self {
            Route::Toggle => (200, "ok"),
            Route::MethodNotAllowed => (405, "method not allowed"),
            Route::NotFound => (404, "not found"),
        }
    }
}

pub struct ToggleServer {
    server: Server,
    focus: FocusController,
}

impl ToggleServer {
    /// Bind on the loopback interface. Port 0 picks a free port.
    pub fn bind(port: u16, focus: FocusController) -> BillboardResult<Self> {
        let addr = format!("127.0.0.1:{port}");
        let server = Server::http(&addr).map_err(|e| BillboardError::Listen {
            addr: addr.clone(),
            message: e.to_string(),
        })?;
        tracing::info!(%addr, "toggle endpoint listening");
        Ok(Self { server, focus })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve until `running` goes false
    pub fn run(&self, running: &AtomicBool) {
        while running.load(Ordering::SeqCst) {
            match self.server.recv_timeout(POLL) {
                Ok(Some(request)) => self.handle(request),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "toggle endpoint receive failed");
                }
            }
        }
        tracing::debug!("toggle endpoint stopped");
    }

    pub fn spawn(self, running: Arc<AtomicBool>) -> JoinHandle<()> {
        std::thread::spawn(move || self.run(&running))
    }

    fn handle(&self, request: Request) {
        let route = Route::resolve(request.method(), request.url());
        if route == Route::Toggle {
            let focused = self.focus.toggle();
            tracing::debug!(focused, "focus toggled over http");
        } else {
            tracing::debug!(method = %request.method(), url = request.url(), ?route, "rejected request");
        }
        let (code, body) = route.status();
        if let Err(e) = request.respond(Response::from_string(body).with_status_code(code)) {
            tracing::warn!(error = %e, "failed to write response");
        }
    }
}

impl std::fmt::Debug for ToggleServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleServer")
            .field("addr", &self.local_addr())
            .finish_non_exhaustive()
    }
}
