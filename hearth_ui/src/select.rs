use std::rc::Rc;

use hearth::dom::{
    builder::{div, tag},
    Attr, Ev, Render, Tag, View,
};
use wasm_bindgen::JsCast;

#[derive(Clone, Debug)]
pub struct SelectOption<T> {
    pub value: T,
    pub label: String,
}

/// Drop-down over a fixed list of values.
///
/// Options are identified by their index in the DOM, so `T` never needs a
/// string representation.
pub struct Select<T: 'static> {
    pub value: Option<T>,
    /// Label of the "no selection" entry. Without it there is no such entry.
    pub empty_option_label: Option<String>,
    pub options: Rc<Vec<SelectOption<T>>>,
    pub on_select: Rc<dyn Fn(Option<T>)>,
}

/// Map the `value` of a selected `<option>` back to its item.
///
/// `None` means the value does not belong to any option.
fn resolve<T: Clone>(options: &[SelectOption<T>], raw: &str) -> Option<Option<T>> {
    if raw.is_empty() {
        return Some(None);
    }
    let index = raw.parse::<usize>().ok()?;
    options.get(index).map(|opt| Some(opt.value.clone()))
}

impl<T: PartialEq + Clone> Render for Select<T> {
    fn render(self) -> View {
        let options = self.options.iter().enumerate().map(|(index, opt)| {
            let selected = self.value.as_ref() == Some(&opt.value);
            tag(Tag::Option)
                .attr(Attr::Value, index.to_string())
                .attr_toggle_if(selected, Attr::Selected)
                .text(opt.label.clone())
        });
        let empty_option = self.empty_option_label.as_ref().map(|label| {
            tag(Tag::Option)
                .attr(Attr::Value, "")
                .attr_toggle_if(self.value.is_none(), Attr::Selected)
                .text(label.clone())
        });

        let opts = self.options.clone();
        let callback = self.on_select;
        let select = tag(Tag::Select)
            .and(empty_option)
            .and_iter(options)
            .on_dom(Ev::Change, move |ev: web_sys::Event| {
                let Some(elem) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                else {
                    return;
                };
                match resolve(&opts, &elem.value()) {
                    Some(value) => callback(value),
                    None => tracing::warn!(value = %elem.value(), "unknown select option"),
                }
            });

        div().class("select").and(select).into_view()
    }
}
