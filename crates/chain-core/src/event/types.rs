//! Tipos de evento de una cadena.
//!
//! Cada ejecución del driver con un sink emite eventos append-only que
//! describen, término a término, qué se hizo con el bundle.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ChainError;

/// Camino tomado por un `combine` exitoso.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Produced {
    /// Se fusionó un bundle literal.
    Merged,
    /// El stage devolvió un valor plano (queda como `last_value`).
    Value,
    /// El stage devolvió un bundle que pasa tal cual.
    Bundle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChainEventKind {
    /// Primer evento de un `run_id`.
    ChainStarted { term_count: usize, seed_fingerprint: Option<String> },
    /// Se fusionó un bundle literal en la posición `index`.
    BundleMerged { index: usize, positional: usize, keyword: Vec<String> },
    /// Un stage está por invocarse. No implica éxito.
    StageInvoked { index: usize, stage: String },
    /// Un stage terminó; `produced` distingue valor de bundle.
    StageReturned {
        index: usize,
        stage: String,
        produced: Produced,
        fingerprint: Option<String>,
    },
    /// El término `index` falló. La cadena no continúa.
    StageFailed { index: usize, stage: String, error: ChainError },
    ChainCompleted { has_value: bool, fingerprint: Option<String> },
}

impl ChainEventKind {
    /// Letra corta por variante, útil para comparar secuencias en tests.
    pub fn code(&self) -> &'static str {
        match self {
            ChainEventKind::ChainStarted { .. } => "S",
            ChainEventKind::BundleMerged { .. } => "M",
            ChainEventKind::StageInvoked { .. } => "I",
            ChainEventKind::StageReturned { .. } => "R",
            ChainEventKind::StageFailed { .. } => "F",
            ChainEventKind::ChainCompleted { .. } => "C",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainEvent {
    pub seq: u64, // orden de append dentro del run
    pub run_id: Uuid,
    pub kind: ChainEventKind,
    pub ts: DateTime<Utc>,
}
