use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::runtime::Handle;

use crate::services::ToastSurface;

type HideHook = Arc<dyn Fn() + Send + Sync>;

/// A single transient notification slot with auto-hide.
///
/// Each `show` bumps a generation counter; a hide timer only fires if no newer
/// notification replaced its own, so every message stays up for the full delay.
#[derive(Clone)]
pub struct Toast {
    surface: Arc<dyn ToastSurface>,
    delay: Duration,
    generation: Arc<AtomicU64>,
    on_hide: Option<HideHook>,
}

impl Toast {
    pub fn new(surface: Arc<dyn ToastSurface>, delay: Duration) -> Self {
        Self {
            surface,
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            on_hide: None,
        }
    }

    /// Runs `hook` every time the slot hides, whichever message it held.
    pub fn with_hide_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_hide = Some(Arc::new(hook));
        self
    }

    pub fn show(&self, message: &str) {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.surface.show_toast(message);

        let surface = Arc::clone(&self.surface);
        let generation = Arc::clone(&self.generation);
        let on_hide = self.on_hide.clone();
        let hide = move || {
            if generation.load(Ordering::SeqCst) == ticket {
                tracing::debug!("hiding notification");
                surface.hide_toast();
                if let Some(hook) = on_hide {
                    hook();
                }
            }
        };

        let delay = self.delay;
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    hide();
                });
            }
            // Called from plain sync code: no reactor to time the hide on.
            Err(_) => {
                std::thread::spawn(move || {
                    std::thread::sleep(delay);
                    hide();
                });
            }
        }
    }
}
