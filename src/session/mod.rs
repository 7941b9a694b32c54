/// Session layer: typed authentication and transport settings resolved from
/// the parsed options record.
pub mod auth;
pub mod errors;
pub mod transport;

pub use auth::Authentication;
pub use errors::PeasantError;
pub use transport::Transport;
