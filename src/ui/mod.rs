mod files;
mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::config::AppConfig;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, get_value, set_value};
use egui::{Context, Visuals};
use layout::{bottom_panel, top_panel};
use serde::{Deserialize, Serialize};

/// Preferencias de la interfaz (se guardan con la persistencia de eframe).
#[derive(Serialize, Deserialize)]
struct UiPrefs {
    dark_mode: bool,
}

impl QuizApp {
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut app = QuizApp::from_platform(config);
        if let Some(prefs) = cc
            .storage
            .and_then(|storage| get_value::<UiPrefs>(storage, APP_KEY))
        {
            app.dark_mode = prefs.dark_mode;
        }
        cc.egui_ctx.set_visuals(if app.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });
        app
    }
}

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Importación web en curso (lectura asíncrona del archivo)
        #[cfg(target_arch = "wasm32")]
        files::poll_pending_import(self);

        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        match self.state {
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::AddCard => views::add_card::ui_add_card(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(
            storage,
            APP_KEY,
            &UiPrefs {
                dark_mode: self.dark_mode,
            },
        );
    }
}
