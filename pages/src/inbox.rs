use futures_signals::signal::{Mutable, SignalExt};
use hearth::{
    dom::{
        builder::{div, li, p, span, tag, ul},
        Attr, Render, Tag, View,
    },
    Bootstrap, DataIslands, Page, RenderResult, Scope, Toaster,
};
use hearth_ui::{button, buttons, EmptyState};
use wasm_bindgen::prelude::*;

use crate::{bootstrap, data::Thread};

pub const ANCHOR: &str = "inbox-root";
pub const INBOX_ISLAND: &str = "inbox-data";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct InboxState {
    threads: Vec<Thread>,
    unread_only: bool,
}

impl InboxState {
    fn visible(&self) -> impl Iterator<Item = &Thread> {
        let unread_only = self.unread_only;
        self.threads
            .iter()
            .filter(move |thread| !unread_only || thread.unread)
    }

    fn unread_count(&self) -> usize {
        self.threads.iter().filter(|thread| thread.unread).count()
    }

    fn is_unread(&self, id: u64) -> bool {
        self.threads.iter().any(|thread| thread.id == id && thread.unread)
    }

    /// Returns `false` if the thread was unknown or already read.
    fn mark_read(&mut self, id: u64) -> bool {
        match self.threads.iter_mut().find(|thread| thread.id == id) {
            Some(thread) if thread.unread => {
                thread.unread = false;
                true
            }
            _ => false,
        }
    }
}

/// Like [`InboxState::mark_read`], but only takes a write lock when something
/// changes, so stale buttons don't re-render the region.
fn mark_read(state: &Mutable<InboxState>, id: u64) -> bool {
    if !state.lock_ref().is_unread(id) {
        return false;
    }
    state.lock_mut().mark_read(id)
}

fn render_thread(thread: &Thread, state: &Mutable<InboxState>, toaster: &Toaster) -> View {
    let mark_read = thread.unread.then(|| {
        let state = state.clone();
        let toaster = toaster.clone();
        let id = thread.id;
        button()
            .classes_raw("is-small is-light mark-read")
            .text("Mark as read")
            .on_click(move || {
                if mark_read(&state, id) {
                    toaster.success("Marked as read");
                }
            })
    });

    li()
        .classes_raw("box thread")
        .class_if(thread.unread, "is-unread")
        .and(tag(Tag::Strong).class("thread-from").text(thread.from.clone()))
        .and(p().class("thread-subject").text(thread.subject.clone()))
        .and(
            thread
                .preview
                .clone()
                .filter(|preview| !preview.trim().is_empty())
                .map(|preview| p().classes_raw("thread-preview has-text-grey").text(preview)),
        )
        .and(mark_read)
        .into_view()
}

fn render_inbox(current: &InboxState, state: &Mutable<InboxState>, toaster: &Toaster) -> View {
    let toggle = {
        let state = state.clone();
        button()
            .class("unread-filter")
            .class_if(current.unread_only, "is-primary")
            .attr(
                Attr::AriaLabel,
                if current.unread_only {
                    "Show all threads"
                } else {
                    "Show unread threads only"
                },
            )
            .text("Unread only")
            .on_click(move || {
                let mut state = state.lock_mut();
                state.unread_only = !state.unread_only;
            })
    };
    let toolbar = buttons()
        .class("inbox-toolbar")
        .and(toggle)
        .and(span().classes_raw("tag is-info unread-count").text(format!(
            "{} unread",
            current.unread_count()
        )));

    let threads: Vec<View> = current
        .visible()
        .map(|thread| render_thread(thread, state, toaster))
        .collect();

    let body = if threads.is_empty() {
        let mut empty = EmptyState::new("No threads").icon("fas fa-inbox");
        if current.unread_only {
            let state = state.clone();
            empty = empty
                .message("Try clearing filters")
                .on_clear_filters(move || state.lock_mut().unread_only = false);
        }
        empty.render()
    } else {
        ul().class("thread-list").and_iter(threads).into_view()
    };

    div().class("inbox").and(toolbar).and(body).into_view()
}

pub fn page(scope: &Scope) -> RenderResult {
    let threads: Vec<Thread> = scope.require::<DataIslands>()?.parse(INBOX_ISLAND)?;
    let toaster = (*scope.require::<Toaster>()?).clone();

    let state = Mutable::new(InboxState {
        threads,
        unread_only: false,
    });
    let region = state
        .signal_cloned()
        .map(move |current| render_inbox(&current, &state, &toaster));

    Ok(div().signal(region).into_view())
}

pub fn bootstrap() -> Bootstrap<impl Page> {
    bootstrap::with_site_styles(Bootstrap::new(ANCHOR, page)).data(INBOX_ISLAND)
}

#[wasm_bindgen]
pub fn mount_inbox() {
    bootstrap::run(&bootstrap());
}
