make_str_enum! {
    Tag {
        A = "a",
        Button = "button",
        Div = "div",
        Figure = "figure",
        Footer = "footer",
        H1 = "h1",
        H3 = "h3",
        H4 = "h4",
        I = "i",
        Img = "img",
        Label = "label",
        Li = "li",
        Link = "link",
        Option = "option",
        P = "p",
        Progress = "progress",
        Section = "section",
        Select = "select",
        Span = "span",
        Strong = "strong",
        Ul = "ul",
    }
}

impl Tag {
    /// Elements that never have children or a closing tag.
    pub fn is_void(self) -> bool {
        matches!(self, Self::Img | Self::Link)
    }
}
