//! Model Context Protocol server over stdio.
//!
//! Framing, `initialize`, `ping`, `tools/list` and request ids are handled by
//! `tower_mcp`. Tool failures come back as ordinary text content; malformed
//! arguments are rejected by the framework before a handler runs.

pub mod tools;

use std::sync::{Arc, Mutex};

use tower_mcp::{McpRouter, StdioTransport};
use tracing::{info, warn};

use crate::error::{Result, SearchConsoleError};
use crate::{SearchConsole, SearchConsoleBuilder};
use tools::ToolCall;

pub const SERVER_NAME: &str = "Search Console Analytics";

/// Shared state behind the five tools.
///
/// The [`SearchConsole`] client is built on the first call that needs it;
/// if the credentials cannot be loaded, that call (and later ones, until
/// loading succeeds) reports the configuration error as text.
pub struct ToolServer {
    builder: SearchConsoleBuilder,
    console: Mutex<Option<SearchConsole>>,
}

impl ToolServer {
    pub fn new(builder: SearchConsoleBuilder) -> Self {
        Self {
            builder,
            console: Mutex::new(None),
        }
    }

    /// Serve with an already constructed client.
    pub fn with_console(console: SearchConsole) -> Self {
        Self {
            builder: SearchConsole::builder(),
            console: Mutex::new(Some(console)),
        }
    }

    /// Run a call on the blocking pool and return its text.
    pub async fn call(self: Arc<Self>, call: Result<ToolCall>) -> String {
        match tokio::task::spawn_blocking(move || self.call_blocking(call)).await {
            Ok(text) => text,
            Err(e) => format!("Error: Task join error: {}", e),
        }
    }

    /// Run a validated call, flattening every failure into text.
    pub fn call_blocking(&self, call: Result<ToolCall>) -> String {
        let call = match call {
            Ok(call) => call,
            Err(e) => return e.to_tool_text(),
        };
        info!(tool = call.name(), "calling tool");

        let mut guard = match self.console.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let outcome = match guard.take() {
            Some(console) => Ok(console),
            None => self.builder.clone().build(),
        }
        .and_then(|console| call.run(guard.insert(console)));

        match outcome {
            Ok(text) => text,
            Err(e) => {
                warn!(tool = call.name(), error = %e, "tool call failed");
                e.to_tool_text()
            }
        }
    }
}

/// Router advertising the five tools.
pub fn router(server: Arc<ToolServer>) -> McpRouter {
    tools::all(server).into_iter().fold(
        McpRouter::new().server_info(SERVER_NAME, env!("CARGO_PKG_VERSION")),
        |router, tool| router.tool(tool),
    )
}

/// Serve the tools on stdin/stdout until the client disconnects.
pub async fn serve_stdio(server: ToolServer) -> Result<()> {
    info!(server = SERVER_NAME, "MCP server ready");
    StdioTransport::new(router(Arc::new(server)))
        .run()
        .await
        .map_err(|e| SearchConsoleError::Transport(e.to_string()))?;
    info!("input closed, shutting down");
    Ok(())
}
