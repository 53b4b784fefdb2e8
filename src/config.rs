// src/config.rs

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

pub const APP_TITLE: &str = "Flashcards Quiz";
pub const DATA_DIR_ENV: &str = "FLASHCARD_QUIZ_DATA_DIR";

/// Parámetros de la aplicación. Los valores por defecto son los de producción.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app_id: String,
    pub deck_key: String,
    pub stats_key: String,
    pub export_file_name: String,
    #[cfg(not(target_arch = "wasm32"))]
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_id: "flashcard_quiz".into(),
            deck_key: "flashcards".into(),
            stats_key: "flashcardStats".into(),
            export_file_name: "flashcards.json".into(),
            #[cfg(not(target_arch = "wasm32"))]
            data_dir: None,
        }
    }
}

impl AppConfig {
    /// Defaults + variables de entorno (solo nativo).
    pub fn from_env() -> Self {
        #[allow(unused_mut)]
        let mut config = Self::default();

        #[cfg(not(target_arch = "wasm32"))]
        {
            config.data_dir = std::env::var(DATA_DIR_ENV)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from);
        }

        config
    }

    /// Carpeta de datos nativa: `$FLASHCARD_QUIZ_DATA_DIR` o `<data_dir>/flashcard_quiz`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join(&self.app_id)))
    }
}
