//! Hover dropdown controller: binds a `HoverMenu` to its trigger and panel

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use rankr_core::{HoverMenu, MenuConfig, MenuEffect, Rect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

use crate::dom::{query_all, query_one, Listener};

const ACTIVE_CLASS: &str = "active";

struct MenuInner {
    menu: RefCell<HoverMenu>,
    /// The only pending close timer; dropping it cancels it
    close_timer: RefCell<Option<Timeout>>,
    trigger: Element,
    panel: HtmlElement,
}

pub struct MenuController {
    inner: Rc<MenuInner>,
    _listeners: Vec<Listener>,
}

impl MenuController {
    /// Bind the dropdown rooted at `trigger` (`.platforms-dropdown`).
    ///
    /// The panel is the `.platforms-menu` inside the trigger, or `fallback_panel`
    /// for markup that keeps a single menu outside the pill. Returns `Ok(None)`
    /// when no panel exists.
    pub fn bind(
        trigger: Element,
        fallback_panel: Option<&Element>,
        config: MenuConfig,
    ) -> Result<Option<Self>, JsValue> {
        let Some(panel) = query_one(&trigger, ".platforms-menu").or_else(|| fallback_panel.cloned()) else {
            return Ok(None);
        };
        let panel: HtmlElement = panel.dyn_into()?;

        tracing::debug!(default_category = %config.default_category, "binding platforms dropdown");

        let inner = Rc::new(MenuInner {
            menu: RefCell::new(HoverMenu::new(config)),
            close_timer: RefCell::new(None),
            trigger,
            panel,
        });

        let mut listeners = Vec::new();

        let weak = Rc::downgrade(&inner);
        listeners.push(Listener::new(&inner.trigger, "mouseenter", move |_| {
            with_inner(&weak, |inner| {
                let rect = inner.trigger.get_bounding_client_rect();
                let rect = Rect {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                };
                let effects = inner.menu.borrow_mut().enter_trigger(rect);
                apply(inner, effects);
            });
        })?);

        let weak = Rc::downgrade(&inner);
        listeners.push(Listener::new(&inner.panel, "mouseenter", move |_| {
            with_inner(&weak, |inner| {
                let effects = inner.menu.borrow_mut().enter_panel();
                apply(inner, effects);
            });
        })?);

        for target in leave_targets(&inner.trigger, &inner.panel) {
            let weak = Rc::downgrade(&inner);
            listeners.push(Listener::new(&target, "mouseleave", move |_| {
                with_inner(&weak, |inner| {
                    let effects = inner.menu.borrow_mut().leave();
                    apply(inner, effects);
                });
            })?);
        }

        for item in query_all(&inner.panel, ".platform-item[data-platform]") {
            let Some(category) = item.get_attribute("data-platform") else {
                continue;
            };
            let weak = Rc::downgrade(&inner);
            listeners.push(Listener::new(&item, "mouseenter", move |_| {
                with_inner(&weak, |inner| {
                    let effects = inner.menu.borrow_mut().hover_item(&category);
                    apply(inner, effects);
                });
            })?);
        }

        Ok(Some(Self {
            inner,
            _listeners: listeners,
        }))
    }

    pub fn is_visible(&self) -> bool {
        self.inner.menu.borrow().is_visible()
    }
}

/// Elements whose `mouseleave` counts as leaving the menu.
///
/// A panel nested inside the trigger fires `mouseleave` when the pointer
/// moves back onto the pill, so only the trigger is watched in that case.
fn leave_targets(trigger: &Element, panel: &HtmlElement) -> Vec<Element> {
    let panel_node: &Node = panel.as_ref();
    if trigger.contains(Some(panel_node)) {
        vec![trigger.clone()]
    } else {
        vec![trigger.clone(), panel.clone().into()]
    }
}

impl Drop for MenuController {
    fn drop(&mut self) {
        self.inner.close_timer.borrow_mut().take();
    }
}

fn with_inner(weak: &Weak<MenuInner>, f: impl FnOnce(&Rc<MenuInner>)) {
    if let Some(inner) = weak.upgrade() {
        f(&inner);
    }
}

fn apply(inner: &Rc<MenuInner>, effects: Vec<MenuEffect>) {
    for effect in effects {
        match effect {
            MenuEffect::CancelClose => {
                inner.close_timer.borrow_mut().take();
            }
            MenuEffect::ScheduleClose { ticket, delay_ms } => {
                let weak = Rc::downgrade(inner);
                let timeout = Timeout::new(delay_ms, move || {
                    with_inner(&weak, |inner| {
                        let effects = inner.menu.borrow_mut().close_elapsed(ticket);
                        apply(inner, effects);
                    });
                });
                // Replacing the slot drops (cancels) any stale timer
                *inner.close_timer.borrow_mut() = Some(timeout);
            }
            MenuEffect::Show(position) => {
                let style = inner.panel.style();
                let _ = style.set_property("left", &format!("{}px", position.left));
                let _ = style.set_property("top", &format!("{}px", position.top));
                let _ = style.set_property("display", "block");
            }
            MenuEffect::Hide => {
                let _ = inner.panel.style().set_property("display", "none");
            }
            MenuEffect::ClearActive => {
                for el in query_all(&inner.panel, ".platform-item, [data-for]") {
                    let _ = el.class_list().remove_1(ACTIVE_CLASS);
                }
            }
            MenuEffect::Activate(category) => {
                let items = query_all(&inner.panel, ".platform-item[data-platform]")
                    .into_iter()
                    .filter(|el| el.get_attribute("data-platform").as_deref() == Some(category.as_str()));
                let panels = query_all(&inner.panel, "[data-for]")
                    .into_iter()
                    .filter(|el| el.get_attribute("data-for").as_deref() == Some(category.as_str()));
                // First match only: one active item and one active panel
                for el in items.take(1).chain(panels.take(1)) {
                    let _ = el.class_list().add_1(ACTIVE_CLASS);
                }
            }
        }
    }
}
