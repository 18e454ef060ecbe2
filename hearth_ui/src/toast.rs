use hearth::{
    dom::{
        builder::{self, div},
        Attr, Render, View,
    },
    Toast, ToastLevel, ToastProvider, Toaster,
};

use crate::{notification, Color};

fn level_color(level: ToastLevel) -> Color {
    match level {
        ToastLevel::Info => Color::Info,
        ToastLevel::Success => Color::Success,
        ToastLevel::Warning => Color::Warning,
        ToastLevel::Error => Color::Danger,
    }
}

/// The visible list of toasts, newest last.
pub struct ToastStack<'a> {
    pub toasts: &'a [Toast],
    pub toaster: &'a Toaster,
}

impl<'a> Render for ToastStack<'a> {
    fn render(self) -> View {
        if self.toasts.is_empty() {
            return View::Empty;
        }

        let items = self.toasts.iter().map(|toast| {
            let toaster = self.toaster.clone();
            let id = toast.id;
            let dismiss = builder::button()
                .class("delete")
                .attr(Attr::AriaLabel, "Dismiss")
                .on_click(move || {
                    toaster.dismiss(id);
                });

            notification(level_color(toast.level), (dismiss, toast.message.as_str()))
                .class("toast")
                .attr(Attr::DataToast, id.to_string())
        });

        div()
            .class("toast-stack")
            .attr(Attr::AriaLive, "polite")
            .and_iter(items)
            .into_view()
    }
}

/// Toast provider rendering a [`ToastStack`].
pub fn toast_provider() -> ToastProvider {
    ToastProvider::new(|toasts, toaster| ToastStack { toasts, toaster }.render())
}
