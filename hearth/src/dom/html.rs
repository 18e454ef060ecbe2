//! Serialise a [`View`] to HTML.
//!
//! Output matches what the DOM renderer produces through `outerHTML`:
//! attributes in insertion order followed by `class`, dynamic regions as an
//! empty comment.

use std::fmt::Write;

use super::{Element, View};

pub fn render_to_string(view: &View) -> String {
    let mut out = String::new();
    write_view(&mut out, view);
    out
}

fn write_view(out: &mut String, view: &View) {
    match view {
        View::Empty => {}
        View::Text(text) => {
            html_escape::encode_text_to_string(text, out);
        }
        View::Element(elem) => write_element(out, elem),
        View::Fragment(items) => {
            for item in items {
                write_view(out, item);
            }
        }
        View::Signal(_) => out.push_str("<!---->"),
    }
}

fn write_element(out: &mut String, elem: &Element) {
    let tag = elem.tag().as_str();
    out.push('<');
    out.push_str(tag);

    for (attr, value) in elem.attrs() {
        write_attr(out, attr.as_str(), value);
    }
    if !elem.classes().is_empty() {
        write_attr(out, "class", &elem.classes().join(" "));
    }
    out.push('>');

    if elem.tag().is_void() {
        return;
    }

    for child in elem.children() {
        write_view(out, child);
    }
    // Writing to a String can't fail.
    let _ = write!(out, "</{tag}>");
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    html_escape::encode_double_quoted_attribute_to_string(value, out);
    out.push('"');
}

#[cfg(test)]
mod tests {
    use futures_signals::signal::Mutable;

    use crate::dom::{
        builder::{div, img, p, span},
        Attr, View,
    };

    use super::render_to_string;

    #[test]
    fn test_nested_markup() {
        let view = div()
            .attr(Attr::Id, "test_view")
            .class("lala")
            .and(p().and(("hello", "there")))
            .into_view();

        assert_eq!(
            render_to_string(&view),
            r#"<div id="test_view" class="lala"><p>hellothere</p></div>"#
        );
    }

    #[test]
    fn test_escaping() {
        let view = span()
            .attr(Attr::Title, r#"a "quoted" <title>"#)
            .text("Fish & <chips>")
            .into_view();

        assert_eq!(
            render_to_string(&view),
            r#"<span title="a &quot;quoted&quot; &lt;title&gt;">Fish &amp; &lt;chips&gt;</span>"#
        );
    }

    #[test]
    fn test_quotes_in_text_are_kept() {
        let view = p().text(r#"Say "hi" & it's done"#).into_view();
        assert_eq!(
            render_to_string(&view),
            r#"<p>Say "hi" &amp; it's done</p>"#
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let view = img().attr(Attr::Src, "/a.jpg").attr(Attr::Alt, "").into_view();
        assert_eq!(render_to_string(&view), r#"<img src="/a.jpg" alt="">"#);
    }

    #[test]
    fn test_empty_and_signal() {
        let value = Mutable::new(1);
        let view = View::Fragment(vec![
            View::Empty,
            div().signal(value.signal_ref(|v| v.to_string())).into_view(),
        ]);
        assert_eq!(render_to_string(&view), "<div><!----></div>");
    }
}
