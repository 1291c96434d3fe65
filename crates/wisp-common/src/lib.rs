pub mod errors;
pub mod events;
pub mod id;
pub mod message;

pub use errors::{ConfigError, WispError};
pub use events::{Event, EventBus};
pub use id::{new_exchange_id, ExchangeId};
pub use message::{Message, Sender};

pub type Result<T> = std::result::Result<T, WispError>;
