// Exportar / importar el mazo como archivo JSON.
// Nativo: diálogos síncronos. Web: descarga con <a download> y lectura asíncrona.

use crate::QuizApp;

#[cfg(not(target_arch = "wasm32"))]
pub fn export_to_file(app: &mut QuizApp) {
    let text = match app.export_deck() {
        Ok(text) => text,
        Err(e) => {
            app.message = format!("⚠ No se pudo exportar: {e}");
            return;
        }
    };
    let Some(path) = rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .set_file_name(app.config.export_file_name.as_str())
        .save_file()
    else {
        return;
    };

    match std::fs::write(&path, text) {
        Ok(()) => {
            log::info!("Mazo exportado a {}", path.display());
            app.message = format!("Mazo exportado a {}", path.display());
        }
        Err(e) => app.message = format!("⚠ No se pudo exportar: {e}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn import_from_file(app: &mut QuizApp, _ctx: &egui::Context) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .pick_file()
    else {
        return;
    };

    match std::fs::read_to_string(&path) {
        Ok(text) => app.apply_import(&text),
        Err(e) => app.message = format!("⚠ Error al leer {}: {e}", path.display()),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn export_to_file(app: &mut QuizApp) {
    let result = app
        .export_deck()
        .map_err(|e| e.to_string())
        .and_then(|text| download(&app.config.export_file_name, &text));
    if let Err(e) = result {
        app.message = format!("⚠ No se pudo exportar: {e}");
    }
}

#[cfg(target_arch = "wasm32")]
fn download(file_name: &str, text: &str) -> Result<(), String> {
    use eframe::wasm_bindgen::{JsCast, JsValue};

    let js_err = |e: JsValue| format!("{e:?}");
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("sin document")?;

    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob =
        web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "el elemento no es un <a>".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)
}

/// El texto llega por un canal cuando termina la lectura; se aplica en `poll_pending_import`.
#[cfg(target_arch = "wasm32")]
pub fn import_from_file(app: &mut QuizApp, ctx: &egui::Context) {
    let (tx, rx) = std::sync::mpsc::channel();
    app.pending_import = Some(rx);
    let ctx = ctx.clone();

    wasm_bindgen_futures::spawn_local(async move {
        let picked = rfd::AsyncFileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
            .await;
        if let Some(file) = picked {
            let bytes = file.read().await;
            let _ = tx.send(String::from_utf8(bytes).map_err(|e| e.to_string()));
        }
        ctx.request_repaint();
    });
}

#[cfg(target_arch = "wasm32")]
pub fn poll_pending_import(app: &mut QuizApp) {
    use std::sync::mpsc::TryRecvError;

    let Some(rx) = &app.pending_import else {
        return;
    };
    match rx.try_recv() {
        Ok(Ok(text)) => {
            app.pending_import = None;
            app.apply_import(&text);
        }
        Ok(Err(e)) => {
            app.pending_import = None;
            app.message = format!("⚠ Error al leer el archivo: {e}");
        }
        Err(TryRecvError::Empty) => {}
        // Diálogo cancelado
        Err(TryRecvError::Disconnected) => app.pending_import = None,
    }
}
