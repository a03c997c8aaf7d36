/// Generic embed builders shared across commands.
pub mod embed;
/// Search-result pagination: page math, button grids, navigation and sessions.
pub mod pagination;
/// Typed interaction response builders.
pub mod respond;
/// Ed25519 request signature verification.
pub mod signature;
