mod models;
mod transport;
mod http;
mod recording;
mod errors;

pub use models::{ApiBase, ApiRequest, Method, RequestBody, SessionToken};
pub use transport::Transport;
pub use http::HttpTransport;
pub use recording::RecordingTransport;
pub use errors::TransportError;
