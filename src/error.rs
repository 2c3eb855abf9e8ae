//! Host startup errors.

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid {key} value: {value}")]
    Config { key: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
