use std::rc::Rc;

/// A cloneable handler that components receive as an input.
///
/// Presentational components take `Option<Callback>` for every optional action
/// and leave the matching control out when it is `None`.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    pub fn new<F: Fn() + 'static>(f: F) -> Self {
        Self(Rc::new(f))
    }

    #[inline]
    pub fn emit(&self) {
        (self.0)()
    }
}

impl<F: Fn() + 'static> From<F> for Callback {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Callback")
    }
}

#[derive(Clone)]
pub enum Handler {
    /// Ignores the event payload.
    Callback(Callback),
    /// Receives the raw DOM event. Only ever invoked by the browser.
    Dom(Rc<dyn Fn(web_sys::Event)>),
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Callback(_) => f.write_str("Handler::Callback"),
            Self::Dom(_) => f.write_str("Handler::Dom"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Listener {
    pub(crate) event: Ev,
    pub(crate) handler: Handler,
}

impl Listener {
    #[inline]
    pub fn event(&self) -> Ev {
        self.event
    }

    pub(crate) fn invoke(&self, event: web_sys::Event) {
        match &self.handler {
            Handler::Callback(cb) => cb.emit(),
            Handler::Dom(f) => f(event),
        }
    }

    /// Invoke the handler without a DOM event.
    ///
    /// Returns `false` for handlers that need the raw event.
    pub fn trigger(&self) -> bool {
        match &self.handler {
            Handler::Callback(cb) => {
                cb.emit();
                true
            }
            Handler::Dom(_) => false,
        }
    }
}

make_str_enum! {
    Ev {
        Blur = "blur",
        Change = "change",
        Click = "click",
        Focus = "focus",
        Input = "input",
        KeyDown = "keydown",
        KeyUp = "keyup",
        Load = "load",
        MouseEnter = "mouseenter",
        MouseLeave = "mouseleave",
        Submit = "submit",
    }
}
