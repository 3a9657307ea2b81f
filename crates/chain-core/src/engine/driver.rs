use log::debug;
use serde_json::Value;
use uuid::Uuid;

use crate::config::ChainConfig;
use crate::errors::ChainError;
use crate::event::{ChainEventKind, EventSink};
use crate::model::Bundle;
use crate::term::Term;

/// Ejecuta `seed` a través de `terms`, en orden, y devuelve el `last_value`
/// del bundle final.
///
/// Sin términos devuelve el `last_value` del seed. El primer error aborta la
/// cadena y se devuelve tal cual; los términos restantes no se tocan.
pub fn run<I>(seed: Bundle, terms: I) -> Result<Option<Value>, ChainError>
    where I: IntoIterator,
          I::Item: Into<Term>
{
    terms.into_iter()
         .fold(Chain::new(seed), |chain, term| chain.then(term))
         .run()
}

/// Cadena declarada: seed + términos. Ejecutarla no modifica el seed, así
/// que una misma `Chain` puede correrse varias veces (también desde varios
/// hilos si se clona).
#[derive(Debug, Clone)]
pub struct Chain {
    seed: Bundle,
    terms: Vec<Term>,
    config: ChainConfig,
}

impl Chain {
    pub fn new(seed: Bundle) -> Self {
        Self { seed,
               terms: Vec::new(),
               config: ChainConfig::default() }
    }

    pub fn with_config(mut self, config: ChainConfig) -> Self {
        self.config = config;
        self
    }

    /// Añade un término al final.
    pub fn then(mut self, term: impl Into<Term>) -> Self {
        self.terms.push(term.into());
        self
    }

    pub fn seed(&self) -> &Bundle {
        &self.seed
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn run(&self) -> Result<Option<Value>, ChainError> {
        self.run_to_bundle().map(Bundle::into_last_value)
    }

    /// Como `run`, pero devuelve el bundle terminal completo. Fold directo de
    /// `combine`, sin eventos ni fingerprints.
    pub fn run_to_bundle(&self) -> Result<Bundle, ChainError> {
        let cfg = &self.config;
        debug!("run:start terms={}", self.terms.len());
        let out = self.terms.iter().enumerate().try_fold(self.seed.clone(), |current, (index, term)| {
            if cfg.log_payloads {
                debug!("run:term index={index} term={} positional={:?} keyword={:?}",
                       term.label(),
                       current.positional(),
                       current.keyword());
            }
            current.combine_with(term, cfg).inspect_err(|error| {
                debug!("run:failed index={index} term={} err={}", term.label(), error.kind_name());
            })
        })?;
        debug!("run:done has_value={}", out.last_value().is_some());
        Ok(out)
    }

    /// Ejecuta registrando eventos en `sink` bajo `run_id`.
    ///
    /// Estados: bundle actual tras el término `i`; transición: combine con
    /// el término `i + 1`. Cada stage se invoca exactamente una vez. Los
    /// fingerprints sólo se calculan si la config los pide y el sink registra.
    pub fn run_with<E: EventSink>(&self, run_id: Uuid, sink: &mut E) -> Result<Bundle, ChainError> {
        let cfg = &self.config;
        let hashing = cfg.record_fingerprints && sink.records();
        let fingerprint = |bundle: &Bundle| hashing.then(|| bundle.fingerprint());

        debug!("run:start run_id={run_id} terms={}", self.terms.len());
        sink.append_kind(run_id,
                         ChainEventKind::ChainStarted { term_count: self.terms.len(),
                                                        seed_fingerprint: fingerprint(&self.seed) });

        let mut current = self.seed.clone();
        for (index, term) in self.terms.iter().enumerate() {
            if term.is_stage() {
                sink.append_kind(run_id,
                                 ChainEventKind::StageInvoked { index,
                                                                stage: term.label() });
            }
            if cfg.log_payloads {
                debug!("run:term run_id={run_id} index={index} term={} positional={:?} keyword={:?}",
                       term.label(),
                       current.positional(),
                       current.keyword());
            }

            let (next, produced) = match current.combine_traced(term, cfg) {
                Ok(step) => step,
                Err(error) => {
                    debug!("run:failed run_id={run_id} index={index} term={} err={}",
                           term.label(),
                           error.kind_name());
                    sink.append_kind(run_id,
                                     ChainEventKind::StageFailed { index,
                                                                   stage: term.label(),
                                                                   error: error.clone() });
                    return Err(error);
                }
            };

            let kind = match (term, produced) {
                (Term::Bundle(other), _) => {
                    ChainEventKind::BundleMerged { index,
                                                   positional: other.positional().len(),
                                                   keyword: other.keyword().keys().cloned().collect() }
                }
                (_, produced) => ChainEventKind::StageReturned { index,
                                                                 stage: term.label(),
                                                                 produced,
                                                                 fingerprint: fingerprint(&next) },
            };
            sink.append_kind(run_id, kind);
            current = next;
        }

        debug!("run:done run_id={run_id} has_value={}", current.last_value().is_some());
        sink.append_kind(run_id,
                         ChainEventKind::ChainCompleted { has_value: current.last_value().is_some(),
                                                          fingerprint: fingerprint(&current) });
        Ok(current)
    }
}

impl From<Bundle> for Chain {
    fn from(seed: Bundle) -> Self {
        Chain::new(seed)
    }
}
