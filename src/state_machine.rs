use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Result;

use crate::{
    clipboard::ClipboardWriter,
    error::RewriteError,
    model::{RewriteRequest, RewriteResponse, UiState},
    provider::{decode_rewrite, RewriteTransport},
    services::{ToastSurface, UiSurface},
    settings::ClientSettings,
    shortcut::{KeyEvent, Shortcut},
    toast::Toast,
};

pub const COPIED_MESSAGE: &str = "Copied to clipboard! ✅";

/// Handles to the widgets the controller drives.
#[derive(Clone)]
pub struct UiBindings {
    pub surface: Arc<dyn UiSurface>,
    pub toasts: Arc<dyn ToastSurface>,
}

pub struct RewriteController {
    state: Arc<Mutex<UiState>>,
    ui: Arc<dyn UiSurface>,
    toast: Toast,
    transport: Arc<dyn RewriteTransport>,
    clipboard: Arc<dyn ClipboardWriter>,
    shortcut: Shortcut,
    default_label: String,
    loading_label: String,
}

impl RewriteController {
    pub fn new(
        bindings: UiBindings,
        transport: Arc<dyn RewriteTransport>,
        clipboard: Arc<dyn ClipboardWriter>,
        settings: &ClientSettings,
    ) -> Result<Self> {
        let shortcut = Shortcut::parse(&settings.shortcut)?;
        let state = Arc::new(Mutex::new(UiState::default()));

        // An error lasts as long as the notification slot stays up.
        let hook_state = Arc::clone(&state);
        let toast = Toast::new(bindings.toasts, settings.toast_delay()).with_hide_hook(move || {
            let mut current = lock_state(&hook_state);
            if matches!(*current, UiState::Error(_)) {
                *current = UiState::Idle;
            }
        });

        Ok(Self {
            state,
            ui: bindings.surface,
            toast,
            transport,
            clipboard,
            shortcut,
            default_label: settings.default_label.clone(),
            loading_label: settings.loading_label.clone(),
        })
    }

    pub fn state(&self) -> UiState {
        lock_state(&self.state).clone()
    }

    /// Runs one request lifecycle for `raw_input`.
    ///
    /// Empty input only raises a notification. Otherwise the trigger is
    /// disabled until the lifecycle finishes, whichever way it finishes.
    pub async fn submit(&self, raw_input: &str) -> Result<RewriteResponse, RewriteError> {
        let text = raw_input.trim();
        if text.is_empty() {
            let err = RewriteError::EmptyInput;
            self.toast.show(&err.notification());
            return Err(err);
        }

        let _restore = self.enter_loading();
        tracing::info!(
            chars = text.chars().count(),
            endpoint = %self.transport.display_name(),
            "submitting rewrite"
        );

        let request = RewriteRequest {
            text: text.to_owned(),
        };
        let result = self.request(&request).await;
        match &result {
            Ok(response) => {
                self.render(response);
                self.set_state(UiState::Success);
                tracing::info!(duration = response.duration, "rewrite rendered");
            }
            Err(err) => {
                tracing::error!(error = %err, "rewrite failed");
                self.fail(err);
            }
        }
        result
    }

    /// Trigger click. Ignored while the trigger is disabled.
    pub async fn click(&self, raw_input: &str) -> Option<Result<RewriteResponse, RewriteError>> {
        if !self.ui.trigger_enabled() {
            tracing::debug!("trigger disabled, ignoring click");
            return None;
        }
        Some(self.submit(raw_input).await)
    }

    pub async fn handle_key(
        &self,
        event: &KeyEvent,
        raw_input: &str,
    ) -> Option<Result<RewriteResponse, RewriteError>> {
        if !self.shortcut.matches(event) {
            return None;
        }
        self.click(raw_input).await
    }

    /// Copies the rendered output. A failed copy is logged and shows nothing.
    pub fn copy_result(&self) -> Result<()> {
        let text = self.ui.output_text();
        match self.clipboard.write_text(&text) {
            Ok(()) => {
                self.toast.show(COPIED_MESSAGE);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "copy to clipboard failed");
                Err(err)
            }
        }
    }

    async fn request(&self, request: &RewriteRequest) -> Result<RewriteResponse, RewriteError> {
        let raw = self.transport.post_rewrite(request).await?;
        decode_rewrite(&raw)
    }

    fn enter_loading(&self) -> RestoreTrigger<'_> {
        self.set_state(UiState::Loading);
        self.ui.set_trigger_enabled(false);
        self.ui.set_spinner_visible(true);
        self.ui.set_trigger_label(&self.loading_label);
        self.ui.set_output_visible(false);
        RestoreTrigger {
            ui: self.ui.as_ref(),
            default_label: &self.default_label,
        }
    }

    fn render(&self, response: &RewriteResponse) {
        self.ui
            .render_output(&response.simplified, &response.duration_tag());
        self.ui.set_output_visible(true);
        self.ui.scroll_output_into_view();
    }

    fn fail(&self, err: &RewriteError) {
        let message = err.notification();
        self.set_state(UiState::Error(message.clone()));
        self.toast.show(&message);
    }

    fn set_state(&self, next: UiState) {
        let mut current = lock_state(&self.state);
        tracing::debug!(from = current.label(), to = next.label(), "ui state");
        *current = next;
    }
}

fn lock_state(state: &Mutex<UiState>) -> std::sync::MutexGuard<'_, UiState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Puts the trigger back to its resting state when dropped, which covers
/// normal returns, `?` exits, panics and a dropped future alike.
struct RestoreTrigger<'a> {
    ui: &'a dyn UiSurface,
    default_label: &'a str,
}

impl Drop for RestoreTrigger<'_> {
    fn drop(&mut self) {
        self.ui.set_trigger_enabled(true);
        self.ui.set_spinner_visible(false);
        self.ui.set_trigger_label(self.default_label);
    }
}
