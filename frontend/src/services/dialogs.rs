use shared::Dialogs;

/// Native `window.confirm` / `window.alert`
#[derive(Clone, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }

    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }
}
