use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex, PoisonError,
};

use eli5_client::services::{ToastSurface, UiSurface};

/// Renders the controller's UI on a terminal: results on stdout, progress and
/// notifications on stderr.
pub struct TerminalSurface {
    enabled: AtomicBool,
    label: Mutex<String>,
    output: Mutex<String>,
}

impl TerminalSurface {
    pub fn new(label: &str) -> Self {
        Self {
            enabled: AtomicBool::new(true),
            label: Mutex::new(label.to_string()),
            output: Mutex::new(String::new()),
        }
    }
}

impl UiSurface for TerminalSurface {
    fn set_trigger_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    fn trigger_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn set_trigger_label(&self, label: &str) {
        tracing::debug!(label, "trigger label");
        *self.label.lock().unwrap_or_else(PoisonError::into_inner) = label.to_string();
    }

    fn set_spinner_visible(&self, visible: bool) {
        if visible {
            let label = self.label.lock().unwrap_or_else(PoisonError::into_inner);
            eprintln!("{label}");
        }
    }

    fn set_output_visible(&self, _visible: bool) {}

    fn render_output(&self, text: &str, duration_tag: &str) {
        *self.output.lock().unwrap_or_else(PoisonError::into_inner) = text.to_string();
        println!("{text}");
        eprintln!("{duration_tag}");
    }

    fn output_text(&self) -> String {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn scroll_output_into_view(&self) {}
}

impl ToastSurface for TerminalSurface {
    fn show_toast(&self, message: &str) {
        eprintln!("{message}");
    }

    fn hide_toast(&self) {}
}
