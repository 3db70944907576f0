//! Page controller: owns the fetched platforms, the search box and the
//! dropdown menus for the lifetime of the page

use std::cell::RefCell;
use std::rc::Rc;

use rankr_core::constants::DEFAULT_CATEGORY;
use rankr_core::{filter_platforms, platform_rows, MenuConfig, Platform};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlInputElement};

use crate::dom::{page_root, query_all, query_one, Listener};
use crate::loader;
use crate::menu::MenuController;
use crate::render::replace_platform_rows;

const DEFAULT_PLATFORM_ATTR: &str = "data-default-platform";
const SEARCH_INPUT_ID: &str = "platform-search-input";

pub struct PageState {
    document: Document,
    root: Element,
    platforms: RefCell<Vec<Platform>>,
}

impl PageState {
    pub fn new(document: Document) -> Result<Self, JsValue> {
        let root = page_root(&document).ok_or_else(|| JsValue::from_str("document has no root element"))?;
        Ok(Self {
            document,
            root,
            platforms: RefCell::new(Vec::new()),
        })
    }

    pub fn set_platforms(&self, platforms: Vec<Platform>) {
        *self.platforms.borrow_mut() = platforms;
    }

    /// Re-render the platform list for `query`; no-op without a list on the page
    pub fn render_platforms(&self, query: &str) {
        let Some(list) = self.platform_list() else {
            return;
        };

        let platforms = self.platforms.borrow();
        let rows = platform_rows(filter_platforms(&platforms, query));

        if let Err(e) = replace_platform_rows(&self.document, &list, &rows) {
            tracing::error!("Error rendering platforms: {:?}", e);
        }
    }

    /// Store freshly fetched platforms and show them filtered by whatever is
    /// already typed in the search box
    pub fn refresh_platforms(&self, platforms: Vec<Platform>) {
        self.set_platforms(platforms);
        let query = self.current_query();
        self.render_platforms(&query);
    }

    fn current_query(&self) -> String {
        self.document
            .get_element_by_id(SEARCH_INPUT_ID)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn platform_list(&self) -> Option<Element> {
        query_one(&self.root, ".all-platforms-list")
            .or_else(|| query_one(&self.root, ".platform-models[data-for]"))
    }
}

pub struct PageController {
    _state: Rc<PageState>,
    _menus: Vec<MenuController>,
    _listeners: Vec<Listener>,
}

impl PageController {
    /// Bind menus and search, then start both loaders
    pub fn mount(document: Document) -> Result<Self, JsValue> {
        let state = Rc::new(PageState::new(document.clone())?);

        let menus = bind_menus(&document, &state.root)?;
        let mut listeners = Vec::new();
        if let Some(listener) = bind_search(&document, &state)? {
            listeners.push(listener);
        }

        tracing::info!(menus = menus.len(), "catalog page mounted");

        spawn_local(loader::load_games(document));
        spawn_local(loader::load_platforms(Rc::clone(&state)));

        Ok(Self {
            _state: state,
            _menus: menus,
            _listeners: listeners,
        })
    }
}

fn bind_menus(document: &Document, root: &Element) -> Result<Vec<MenuController>, JsValue> {
    let page_default = document
        .body()
        .and_then(|body| body.get_attribute(DEFAULT_PLATFORM_ATTR));
    let dropdowns = query_all(root, ".platforms-dropdown");
    // A menu outside the pill can only belong to a lone dropdown
    let fallback_panel = if dropdowns.len() == 1 {
        query_one(root, ".platforms-menu")
    } else {
        None
    };

    let mut menus = Vec::new();
    for dropdown in dropdowns {
        let category = dropdown
            .get_attribute(DEFAULT_PLATFORM_ATTR)
            .or_else(|| page_default.clone())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let config = MenuConfig::default().with_default_category(category);

        if let Some(menu) = MenuController::bind(dropdown, fallback_panel.as_ref(), config)? {
            menus.push(menu);
        }
    }
    Ok(menus)
}

fn bind_search(document: &Document, state: &Rc<PageState>) -> Result<Option<Listener>, JsValue> {
    let Some(input) = document.get_element_by_id(SEARCH_INPUT_ID) else {
        return Ok(None);
    };

    let weak = Rc::downgrade(state);
    let listener = Listener::new(&input, "input", move |event| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let query = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        state.render_platforms(&query);
    })?;
    Ok(Some(listener))
}
