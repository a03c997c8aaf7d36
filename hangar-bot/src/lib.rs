/// Console and daily-rotated file logging.
pub mod logging;
/// Signed interactions endpoint.
pub mod server;
