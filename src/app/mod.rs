use crate::config::AppConfig;
use crate::deck::DeckStore;
use crate::grader::GradeResult;
use crate::model::{AppState, CardDraft};
use crate::navigator::Navigator;
use crate::stats::StatsTracker;
use crate::storage::{KeyValueStore, open_default_store};
use std::collections::BTreeSet;

// Submódulos
pub mod actions;
pub mod deck_io;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{NavSnapshot, OptionRow, StatsSnapshot};

/// Estado completo de la sesión: mazo, estadísticas, posición y estado de la UI.
pub struct QuizApp {
    pub config: AppConfig,
    store: Box<dyn KeyValueStore>,
    pub deck: DeckStore,
    pub stats: StatsTracker,
    pub nav: Navigator,
    /// Selección provisional (solo preguntas de respuesta múltiple)
    pub selected: BTreeSet<usize>,
    /// Corrección de la tarjeta mostrada; `Some` = ya respondida
    pub feedback: Option<GradeResult>,
    pub message: String,
    pub state: AppState,
    pub draft: CardDraft,
    pub confirm_reset: bool,
    pub dark_mode: bool,
    #[cfg(target_arch = "wasm32")]
    pub pending_import: Option<std::sync::mpsc::Receiver<Result<String, String>>>,
}

impl QuizApp {
    pub fn new(config: AppConfig, store: Box<dyn KeyValueStore>) -> Self {
        let deck = DeckStore::load(store.as_ref(), &config.deck_key);
        let stats = StatsTracker::load(store.as_ref(), &config.stats_key);
        let nav = Navigator::new(deck.len());

        Self {
            config,
            store,
            deck,
            stats,
            nav,
            selected: BTreeSet::new(),
            feedback: None,
            message: String::new(),
            state: AppState::Quiz,
            draft: CardDraft::default(),
            confirm_reset: false,
            dark_mode: true,
            #[cfg(target_arch = "wasm32")]
            pending_import: None,
        }
    }

    /// Abre el almacén de la plataforma (localStorage o carpeta de datos).
    pub fn from_platform(config: AppConfig) -> Self {
        let store = open_default_store(&config);
        Self::new(config, store)
    }

    /// Se llama cada vez que cambia la tarjeta mostrada.
    fn on_card_changed(&mut self) {
        self.selected.clear();
        self.feedback = None;
        self.message.clear();
    }
}
