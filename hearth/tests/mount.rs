use std::{cell::RefCell, rc::Rc};

use hearth::{
    config::CONFIG_ISLAND,
    dom::{builder::div, View},
    Bootstrap, Composition, DataIslands, Environment, ErrorBoundary, MemoryHost, MountError,
    MountOutcome, RenderError, RenderResult, Scope, SiteConfig, ToastProvider, Toaster,
};

fn hello(_: &Scope) -> RenderResult {
    Ok(div().class("hello").text("Hello").into_view())
}

fn standard(config: &SiteConfig) -> Composition {
    Composition::standard(
        config,
        ErrorBoundary::new(|err| div().class("fallback").text(err.to_string()).into_view()),
        ToastProvider::new(|_, _| View::Empty),
    )
}

#[test]
fn test_mount_renders_exactly_once() {
    let mut host = MemoryHost::new().with_anchor("home-root");
    let outcome = Bootstrap::new("home-root", hello)
        .stylesheet("/css/site.css")
        .stylesheet("/css/site.css")
        .launch(&mut host, standard)
        .unwrap();

    assert_eq!(outcome, MountOutcome::Mounted);
    assert_eq!(host.renders().len(), 1);
    assert_eq!(host.renders()[0].0, "home-root");
    assert_eq!(
        host.html("home-root").unwrap(),
        r#"<div class="hello">Hello</div><!---->"#
    );
    assert_eq!(host.stylesheets(), vec!["/css/site.css"]);
}

#[test]
fn test_missing_anchor_is_a_silent_no_op() {
    let mut host = MemoryHost::new();
    let outcome = Bootstrap::new("home-root", hello)
        .launch(&mut host, standard)
        .unwrap();

    assert_eq!(outcome, MountOutcome::AnchorMissing);
    assert!(host.renders().is_empty());
}

#[test]
fn test_second_mount_is_rejected() {
    let mut host = MemoryHost::new().with_anchor("inbox-root");
    let bootstrap = Bootstrap::new("inbox-root", hello);

    bootstrap.launch(&mut host, standard).unwrap();
    let second = bootstrap.launch(&mut host, standard);

    assert!(matches!(second, Err(MountError::AlreadyMounted(id)) if id == "inbox-root"));
    assert_eq!(host.renders().len(), 1);
}

#[test]
fn test_config_is_resolved_before_render() {
    let mut host = MemoryHost::new().with_anchor("home-root").with_island(
        CONFIG_ISLAND,
        r#"{ "environment": "staging", "maps": { "api_key": "pk.live" } }"#,
    );

    let seen = Rc::new(RefCell::new(None));
    let page = {
        let seen = seen.clone();
        move |scope: &Scope| -> RenderResult {
            *seen.borrow_mut() = Some(scope.config().clone());
            Ok(View::Empty)
        }
    };

    Bootstrap::new("home-root", page)
        .launch(&mut host, standard)
        .unwrap();

    let config = seen.borrow().clone().expect("page did not render");
    assert_eq!(config.environment, Environment::Staging);
    assert_eq!(host.published_maps().len(), 1);
    assert_eq!(
        host.published_maps()[0].as_ref().map(|m| m.api_key.as_str()),
        Some("pk.live")
    );
}

#[test]
fn test_development_mounts_once_despite_double_render() {
    let mut host = MemoryHost::new()
        .with_anchor("home-root")
        .with_island(CONFIG_ISLAND, r#"{ "environment": "development" }"#);

    let renders = Rc::new(RefCell::new(0));
    let page = {
        let renders = renders.clone();
        move |_: &Scope| -> RenderResult {
            *renders.borrow_mut() += 1;
            Ok(View::Text("page".into()))
        }
    };

    Bootstrap::new("home-root", page)
        .launch(&mut host, standard)
        .unwrap();

    assert_eq!(*renders.borrow(), 2);
    assert_eq!(host.renders().len(), 1);
}

#[test]
fn test_boundary_isolates_missing_page_data() {
    let mut host = MemoryHost::new().with_anchor("dashboard-root");

    let page = |scope: &Scope| -> RenderResult {
        let islands = scope.require::<DataIslands>()?;
        let stats: Vec<u32> = islands.parse("dashboard-data")?;
        Ok(View::Text(format!("{} stats", stats.len())))
    };

    let outcome = Bootstrap::new("dashboard-root", page)
        .data("dashboard-data")
        .launch(&mut host, standard)
        .unwrap();

    assert_eq!(outcome, MountOutcome::Mounted);
    assert_eq!(
        host.html("dashboard-root").unwrap(),
        r#"<div class="fallback">page data `dashboard-data` is missing</div>"#
    );
}

#[test]
fn test_page_data_is_provided() {
    let mut host = MemoryHost::new()
        .with_anchor("dashboard-root")
        .with_island("dashboard-data", "[1, 2, 3]");

    let page = |scope: &Scope| -> RenderResult {
        let stats: Vec<u32> = scope.require::<DataIslands>()?.parse("dashboard-data")?;
        Ok(View::Text(format!("{} stats", stats.len())))
    };

    Bootstrap::new("dashboard-root", page)
        .data("dashboard-data")
        .launch(&mut host, standard)
        .unwrap();

    assert_eq!(host.html("dashboard-root").unwrap(), "3 stats<!---->");
}

#[test]
fn test_error_without_boundary_aborts_mount() {
    let mut host = MemoryHost::new().with_anchor("home-root");
    let failing = |_: &Scope| -> RenderResult { Err(RenderError::failed("broken")) };

    let result = Bootstrap::new("home-root", failing).launch(&mut host, |_| Composition::new());

    assert!(matches!(result, Err(MountError::Render(RenderError::Failed(_)))));
    assert!(host.renders().is_empty());
}

#[test]
fn test_toaster_is_available_to_pages() {
    let mut host = MemoryHost::new().with_anchor("inbox-root");
    let page = |scope: &Scope| -> RenderResult {
        let toaster = scope.require::<Toaster>()?;
        toaster.info("ready");
        Ok(View::Empty)
    };

    let outcome = Bootstrap::new("inbox-root", page)
        .launch(&mut host, standard)
        .unwrap();
    assert_eq!(outcome, MountOutcome::Mounted);
}
