//! Eventos de ejecución de una cadena y trait `EventSink`.

mod store;
mod types;

pub use store::{EventSink, InMemoryEventLog, NoopSink};
pub use types::{ChainEvent, ChainEventKind, Produced};
