pub mod collection;
pub mod config;
pub mod connection;
pub mod property;

pub use collection::PropertyCollection;
pub use config::ConfigSet;
pub use connection::{ConnectionError, ConnectionParameters};
pub use property::{resolve, PropertyError, PropertyId};
