// lsc-api: Async RESTCONF transport client for the Lumina SDN controller

pub mod client;
pub mod error;
pub mod path;
pub mod transport;

pub use client::{Method, RestconfClient};
pub use error::Error;
pub use path::ResourcePath;
pub use transport::{TlsMode, TransportConfig};
