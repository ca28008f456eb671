/// The parts of the screen the controller drives. Implementations own the
/// actual widgets; the controller only flips their state.
pub trait UiSurface: Send + Sync {
    fn set_trigger_enabled(&self, enabled: bool);
    fn trigger_enabled(&self) -> bool;
    fn set_trigger_label(&self, label: &str);
    fn set_spinner_visible(&self, visible: bool);
    fn set_output_visible(&self, visible: bool);
    fn render_output(&self, text: &str, duration_tag: &str);
    fn output_text(&self) -> String;
    fn scroll_output_into_view(&self);
}

pub trait ToastSurface: Send + Sync {
    fn show_toast(&self, message: &str);
    fn hide_toast(&self);
}
