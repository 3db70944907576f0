#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use rankr_core::constants::NO_RESULTS_LABEL;
use rankr_core::{MenuConfig, Platform, PlatformRow};
use rankr_web::dom::query_all;
use rankr_web::loader::{load_games, load_platforms};
use rankr_web::menu::MenuController;
use rankr_web::page::PageState;
use rankr_web::render::replace_platform_rows;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{window, Document, Element, Event, HtmlElement, HtmlInputElement, PageTransitionEvent, PageTransitionEventInit};

wasm_bindgen_test_configure!(run_in_browser);

const MENU_HTML: &str = r#"
<div class="platforms-dropdown">
  <span class="pill">Platforms</span>
  <div class="platforms-menu" style="display:none">
    <ul>
      <li class="platform-item" data-platform="playstation">PlayStation</li>
      <li class="platform-item" data-platform="nintendo">Nintendo</li>
    </ul>
    <ul class="platform-models" data-for="playstation"><li>PS5</li></ul>
    <ul class="platform-models" data-for="nintendo"><li>Switch</li></ul>
    <ul class="platform-models" data-for="nintendo"><li>Switch 2</li></ul>
  </div>
</div>
"#;

/// Markup appended to `<body>` for one test and removed afterwards
struct Fixture(Element);

impl Fixture {
    fn new(html: &str) -> Self {
        let doc = document();
        let root = doc.create_element("div").unwrap();
        root.set_inner_html(html);
        doc.body().unwrap().append_child(&root).unwrap();
        Self(root)
    }

    fn query(&self, selector: &str) -> Element {
        self.0
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("fixture has no {selector}"))
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.0.remove();
    }
}

fn document() -> Document {
    window().unwrap().document().unwrap()
}

fn dispatch(target: &Element, event: &str) {
    target.dispatch_event(&Event::new(event).unwrap()).unwrap();
}

fn display(el: &Element) -> String {
    el.dyn_ref::<HtmlElement>().unwrap().style().get_property_value("display").unwrap()
}

/// `item:<key>` / `panel:<key>` for every element carrying `.active`
fn active_marks(root: &Element) -> Vec<String> {
    query_all(root, ".active")
        .into_iter()
        .map(|el| match el.get_attribute("data-platform") {
            Some(key) => format!("item:{key}"),
            None => format!("panel:{}", el.get_attribute("data-for").unwrap_or_default()),
        })
        .collect()
}

fn texts(list: &Element) -> Vec<String> {
    query_all(list, "li")
        .into_iter()
        .map(|li| li.text_content().unwrap_or_default())
        .collect()
}

#[wasm_bindgen_test]
fn hover_marks_exactly_one_item_and_one_panel() {
    let fixture = Fixture::new(MENU_HTML);
    let trigger = fixture.query(".platforms-dropdown");
    let menu = MenuController::bind(trigger.clone(), None, MenuConfig::default())
        .unwrap()
        .expect("panel inside the pill");

    dispatch(&trigger, "mouseenter");
    assert!(menu.is_visible());
    assert_eq!(display(&fixture.query(".platforms-menu")), "block");
    assert_eq!(active_marks(&fixture.0), vec!["item:playstation", "panel:playstation"]);

    dispatch(&fixture.query(r#".platform-item[data-platform="nintendo"]"#), "mouseenter");
    assert_eq!(active_marks(&fixture.0), vec!["item:nintendo", "panel:nintendo"]);
    // Only the first of the two nintendo panels is shown
    let nintendo = query_all(&fixture.0, r#"[data-for="nintendo"]"#);
    assert!(nintendo[0].class_list().contains("active"));
    assert!(!nintendo[1].class_list().contains("active"));
}

#[wasm_bindgen_test(async)]
async fn leaving_nested_panel_onto_pill_keeps_menu_open() {
    let fixture = Fixture::new(MENU_HTML);
    let trigger = fixture.query(".platforms-dropdown");
    let panel = fixture.query(".platforms-menu");
    let menu = MenuController::bind(trigger.clone(), None, MenuConfig::default()).unwrap().unwrap();

    dispatch(&trigger, "mouseenter");
    // Pointer goes from the panel back onto the pill: still inside the trigger
    dispatch(&panel, "mouseleave");
    TimeoutFuture::new(150).await;
    assert!(menu.is_visible());
    assert_eq!(display(&panel), "block");

    dispatch(&trigger, "mouseleave");
    TimeoutFuture::new(150).await;
    assert!(!menu.is_visible());
    assert_eq!(display(&panel), "none");
}

#[wasm_bindgen_test(async)]
async fn failed_games_load_leaves_grid_unchanged() {
    // The test server has no catalog API, so the fetch fails
    let fixture = Fixture::new(r#"<div id="game-grid"><div class="game-card">cached</div></div>"#);
    let grid = fixture.query("#game-grid");
    let before = grid.inner_html();

    load_games(document()).await;

    assert_eq!(grid.inner_html(), before);
}

#[wasm_bindgen_test(async)]
async fn failed_platforms_load_leaves_list_unchanged() {
    let fixture = Fixture::new(r#"<ul class="all-platforms-list"><li>cached</li></ul>"#);
    let state = Rc::new(PageState::new(document()).unwrap());

    load_platforms(state).await;

    assert_eq!(texts(&fixture.query(".all-platforms-list")), vec!["cached"]);
}

#[wasm_bindgen_test(async)]
async fn missing_grid_and_list_are_noops() {
    let fixture = Fixture::new("<p>nothing to fill</p>");
    let before = fixture.0.inner_html();

    load_games(document()).await;
    let state = PageState::new(document()).unwrap();
    state.refresh_platforms(vec![Platform::new("PlayStation 4")]);
    state.render_platforms("zzz");

    assert_eq!(fixture.0.inner_html(), before);
    assert!(document().query_selector("li.no-results").unwrap().is_none());
}

#[wasm_bindgen_test]
fn fetched_platforms_honour_query_typed_before_load() {
    let fixture = Fixture::new(r#"<input id="platform-search-input"><ul class="all-platforms-list"></ul>"#);
    let input: HtmlInputElement = fixture.query("#platform-search-input").dyn_into().unwrap();
    let list = fixture.query(".all-platforms-list");
    let state = PageState::new(document()).unwrap();
    let platforms = || vec![Platform::new("Xbox One"), Platform::new("PlayStation 4"), Platform::new("Sega Saturn")];

    input.set_value("station");
    state.refresh_platforms(platforms());
    assert_eq!(texts(&list), vec!["PlayStation 4"]);

    input.set_value("zzz");
    state.refresh_platforms(platforms());
    assert_eq!(texts(&list), vec![NO_RESULTS_LABEL]);
    assert!(fixture.query("li").class_list().contains("no-results"));
}

#[wasm_bindgen_test]
fn replacing_rows_drops_previous_content() {
    let fixture = Fixture::new(r#"<ul class="all-platforms-list"><li>old</li><li>older</li></ul>"#);
    let list = fixture.query(".all-platforms-list");
    let rows = vec![PlatformRow::Link { label: "Nintendo Switch".to_string() }];

    replace_platform_rows(&document(), &list, &rows).unwrap();

    assert_eq!(texts(&list), vec!["Nintendo Switch"]);
    assert_eq!(fixture.query("li > a").get_attribute("href").as_deref(), Some("#"));
}

#[wasm_bindgen_test]
fn pagehide_keeps_cached_page_mounted() {
    rankr_web::mount(document());
    assert!(rankr_web::is_mounted());

    let init = PageTransitionEventInit::new();
    init.set_persisted(true);
    let cached = PageTransitionEvent::new_with_event_init_dict("pagehide", &init).unwrap();
    rankr_web::handle_pagehide(&cached);
    assert!(rankr_web::is_mounted());

    rankr_web::handle_pagehide(&Event::new("pagehide").unwrap());
    assert!(!rankr_web::is_mounted());
}
