//! Header name and header map for user supplied header fields.

mod map;
mod name;

pub use self::map::HeaderMap;
pub use self::name::HeaderName;
