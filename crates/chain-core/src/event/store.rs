use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{ChainEvent, ChainEventKind};

/// Destino append-only de eventos.
pub trait EventSink {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, run_id: Uuid, kind: ChainEventKind) -> ChainEvent;
    /// Lista eventos de un run (orden ascendente por seq).
    fn list(&self, run_id: Uuid) -> Vec<ChainEvent>;
    /// `false` si el sink descarta todo; el driver entonces no calcula
    /// fingerprints para él.
    fn records(&self) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    pub inner: HashMap<Uuid, Vec<ChainEvent>>,
}

impl InMemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Secuencia de códigos de evento de un run (ver `ChainEventKind::code`).
    pub fn codes(&self, run_id: Uuid) -> String {
        self.inner
            .get(&run_id)
            .map(|evs| evs.iter().map(|e| e.kind.code()).collect())
            .unwrap_or_default()
    }
}

impl EventSink for InMemoryEventLog {
    fn append_kind(&mut self, run_id: Uuid, kind: ChainEventKind) -> ChainEvent {
        let vec = self.inner.entry(run_id).or_default();
        let ev = ChainEvent { seq: vec.len() as u64,
                              run_id,
                              kind,
                              ts: Utc::now() };
        vec.push(ev.clone());
        ev
    }

    fn list(&self, run_id: Uuid) -> Vec<ChainEvent> {
        self.inner.get(&run_id).cloned().unwrap_or_default()
    }
}

/// Sink que descarta todo; lo usa el driver cuando nadie pidió eventos.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn append_kind(&mut self, run_id: Uuid, kind: ChainEventKind) -> ChainEvent {
        ChainEvent { seq: 0,
                     run_id,
                     kind,
                     ts: Utc::now() }
    }

    fn list(&self, _run_id: Uuid) -> Vec<ChainEvent> {
        Vec::new()
    }

    fn records(&self) -> bool {
        false
    }
}
