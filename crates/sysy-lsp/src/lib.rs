//! SysY language server.
//!
//! [`Backend`] implements [`LanguageServer`](tower_lsp_server::LanguageServer) over the
//! editor features in `sysy-ide`. `tower-lsp-server` owns the `Content-Length` framing and
//! the JSON-RPC lifecycle: requests before `initialize` and after `shutdown` are rejected
//! there. [`serve`] runs a session over any async byte stream; [`run_stdio`] and
//! [`run_tcp`] wrap it in a tokio runtime for the CLI.

mod backend;
mod config;


use std::io;
use std::net::Ipv4Addr;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tower_lsp_server::{LspService, Server};

pub use backend::Backend;
pub use config::ServerConfig;

/// Address the VS Code extension connects to by default.
pub const DEFAULT_TCP_PORT: u16 = 6009;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The client asked the server to shut down before leaving.
    Clean,
    /// `exit` without `shutdown`, or the client hung up.
    Unclean,
}

impl Exit {
    pub fn code(self) -> i32 {
        match self {
            Self::Clean => 0,
            Self::Unclean => 1,
        }
    }
}

/// Serves one client until the connection closes.
pub async fn serve<I, O>(input: I, output: O) -> Exit
where
    I: AsyncRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let (service, socket) = LspService::new(Backend::new);
    let session = Arc::clone(service.inner().session());
    Server::new(input, output, socket).serve(service).await;
    let exit = session.exit_status();
    tracing::info!(?exit, "session ended");
    exit
}

/// Serves one client over stdin and stdout.
pub fn run_stdio() -> Result<Exit> {
    let runtime = runtime()?;
    tracing::info!("serving on stdio");
    let exit = runtime.block_on(serve(tokio::io::stdin(), tokio::io::stdout()));
    // The blocking stdin reader may still be parked on a read
    runtime.shutdown_background();
    Ok(exit)
}

/// Listens on `127.0.0.1:port` and serves the first client that connects.
pub fn run_tcp(port: u16) -> Result<Exit> {
    runtime()?.block_on(async {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, port)).await?;
        tracing::info!(addr = %listener.local_addr()?, "listening");
        let (stream, peer) = listener.accept().await?;
        tracing::info!(%peer, "client connected");
        let (input, output) = stream.into_split();
        Ok::<_, Error>(serve(input, output).await)
    })
}

fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
}
