//! Hover dropdown state machine
//!
//! `HoverMenu` is pure: every event returns the list of effects the host
//! must apply (DOM markers, panel visibility, the close timer). The host owns
//! at most one close timer per menu and must cancel it on `CancelClose`.
//! Each `ScheduleClose` carries a fresh ticket and only the latest ticket can
//! close the menu, so a late timer callback is harmless.

use crate::constants::{CLOSE_DELAY_MS, DEFAULT_CATEGORY, PANEL_OFFSET};

/// Screen-space bounding box of a trigger element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Where the flyout panel is placed when opened
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPosition {
    pub left: f64,
    pub top: f64,
}

impl PanelPosition {
    /// Left-aligned with the trigger, `offset` below its bottom edge
    pub fn below(trigger: Rect, offset: f64) -> Self {
        Self {
            left: trigger.left,
            top: trigger.bottom() + offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuConfig {
    pub close_delay_ms: u32,
    pub panel_offset: f64,
    /// Category key (`data-platform`) selected whenever the menu opens
    pub default_category: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: CLOSE_DELAY_MS,
            panel_offset: PANEL_OFFSET,
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl MenuConfig {
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
    PendingClose { ticket: u64 },
}

/// Instruction for the host after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEffect {
    /// Drop the pending close timer, if any
    CancelClose,
    /// Start a timer; report back with `close_elapsed(ticket)`
    ScheduleClose { ticket: u64, delay_ms: u32 },
    Show(PanelPosition),
    Hide,
    /// Remove the active marker from every item and detail panel
    ClearActive,
    /// Mark the item and detail panel for this category active
    Activate(String),
}

#[derive(Debug, Clone)]
pub struct HoverMenu {
    config: MenuConfig,
    state: MenuState,
    active: Option<String>,
    next_ticket: u64,
}

impl HoverMenu {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            config,
            state: MenuState::Closed,
            active: None,
            next_ticket: 0,
        }
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// The panel is shown in both `Open` and `PendingClose`
    pub fn is_visible(&self) -> bool {
        self.state != MenuState::Closed
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Pointer entered the trigger pill
    pub fn enter_trigger(&mut self, trigger: Rect) -> Vec<MenuEffect> {
        match self.state {
            MenuState::Closed => {
                self.state = MenuState::Open;
                let position = PanelPosition::below(trigger, self.config.panel_offset);
                let mut effects = vec![MenuEffect::CancelClose, MenuEffect::Show(position)];
                let category = self.config.default_category.clone();
                effects.extend(self.select(category));
                effects
            }
            MenuState::PendingClose { .. } => self.resume(),
            MenuState::Open => Vec::new(),
        }
    }

    /// Pointer entered the flyout panel. A hidden panel cannot open the menu.
    pub fn enter_panel(&mut self) -> Vec<MenuEffect> {
        match self.state {
            MenuState::PendingClose { .. } => self.resume(),
            MenuState::Open | MenuState::Closed => Vec::new(),
        }
    }

    /// Pointer left the trigger or the panel
    pub fn leave(&mut self) -> Vec<MenuEffect> {
        let mut effects = match self.state {
            MenuState::Closed => return Vec::new(),
            MenuState::Open => Vec::new(),
            MenuState::PendingClose { .. } => vec![MenuEffect::CancelClose],
        };
        let ticket = self.issue_ticket();
        self.state = MenuState::PendingClose { ticket };
        effects.push(MenuEffect::ScheduleClose {
            ticket,
            delay_ms: self.config.close_delay_ms,
        });
        effects
    }

    /// A close timer fired. Only the most recently scheduled ticket closes.
    pub fn close_elapsed(&mut self, ticket: u64) -> Vec<MenuEffect> {
        match self.state {
            MenuState::PendingClose { ticket: pending } if pending == ticket => {
                self.state = MenuState::Closed;
                vec![MenuEffect::Hide]
            }
            _ => Vec::new(),
        }
    }

    /// Pointer moved onto a sub-item of an open menu
    pub fn hover_item(&mut self, category: &str) -> Vec<MenuEffect> {
        if self.state == MenuState::Closed {
            return Vec::new();
        }
        self.select(category.to_string())
    }

    fn resume(&mut self) -> Vec<MenuEffect> {
        self.state = MenuState::Open;
        vec![MenuEffect::CancelClose]
    }

    fn select(&mut self, category: String) -> Vec<MenuEffect> {
        self.active = Some(category.clone());
        vec![MenuEffect::ClearActive, MenuEffect::Activate(category)]
    }

    fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }
}
