//! Presentable items.
//!
//! This module provides:
//! - `Presentable`: the capability set the scheduler consumes from an
//!   item: identity, priority, show/dismiss side effects, and the
//!   one-shot dismissal hook.
//! - `ModalItem`: the concrete item a producer builds from
//!   `DialogContent` against a `ModalHost`.
//! - `ItemState`: the conceptual lifecycle reported by the scheduler.
//!
//! Items are shared as `Rc<RefCell<..>>` handles: the scheduler holds one
//! while the item is queued or showing, and the producer may keep another
//! to dismiss it directly (the user-initiated path).

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::content::DialogContent;
use crate::error::{ModalqError, Result};
use crate::scheduler::Priority;
use crate::surface::{ModalHost, Surface};

/// One-shot callback the scheduler registers to learn the slot freed.
pub type DismissHook = Box<dyn FnMut()>;

/// Shared handle to any presentable item.
pub type ItemHandle = Rc<RefCell<dyn Presentable>>;

/// Capability set the slot scheduler requires from an item.
pub trait Presentable {
    /// Stable identity; the sole deduplication key.
    fn id(&self) -> &str;

    /// Scheduling priority.
    fn priority(&self) -> Priority;

    /// Trigger the external presentation. Called only on the
    /// Idle → Occupied transition.
    fn show(&mut self);

    /// Trigger the external teardown. Must synchronously invoke the
    /// registered dismissal hook before returning; dismissing an item
    /// that is not showing is a no-op.
    fn dismiss(&mut self);

    /// Register the dismissal hook, overwriting any previous one.
    fn set_on_dismiss(&mut self, hook: DismissHook);
}

/// Conceptual lifecycle of an item, as derived by the scheduler.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    /// Waiting in the pending queue
    Queued,
    /// Occupying the slot
    Showing,
    /// Not held by the scheduler
    Dismissed,
}

impl ItemState {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemState::Queued => "queued",
            ItemState::Showing => "showing",
            ItemState::Dismissed => "dismissed",
        }
    }
}

impl std::fmt::Display for ItemState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dialog item: immutable content plus the surface it shows on.
pub struct ModalItem {
    content: DialogContent,
    surface: Box<dyn Surface>,
    showing: bool,
    on_dismiss: Option<DismissHook>,
    on_click: Option<Box<dyn FnMut(usize)>>,
}

impl std::fmt::Debug for ModalItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalItem")
            .field("content", &self.content)
            .field("showing", &self.showing)
            .field("on_dismiss", &self.on_dismiss.is_some())
            .field("on_click", &self.on_click.is_some())
            .finish_non_exhaustive()
    }
}

impl ModalItem {
    /// Build an item against a host.
    ///
    /// Fails fast with [`ModalqError::NonModalHost`] when the host cannot
    /// present an exclusive modal surface; this is the one fatal
    /// precondition in the crate, enforced here and never inside the
    /// scheduler.
    pub fn create(host: &dyn ModalHost, content: DialogContent) -> Result<Rc<RefCell<ModalItem>>> {
        if !host.supports_modal() {
            return Err(ModalqError::NonModalHost(host.describe().to_string()));
        }
        Ok(Rc::new(RefCell::new(ModalItem {
            content,
            surface: host.create_surface(),
            showing: false,
            on_dismiss: None,
            on_click: None,
        })))
    }

    /// The content this item presents.
    pub fn content(&self) -> &DialogContent {
        &self.content
    }

    /// Whether the item currently occupies the slot.
    pub fn is_showing(&self) -> bool {
        self.showing
    }

    /// Register a button click handler, invoked with the button index.
    pub fn set_on_click(&mut self, handler: impl FnMut(usize) + 'static) {
        self.on_click = Some(Box::new(handler));
    }

    /// A button was pressed: run the handler, then dismiss.
    ///
    /// Clicks on an item that is not showing are ignored.
    pub fn click(&mut self, button: usize) {
        if !self.showing {
            return;
        }
        if let Some(handler) = self.on_click.as_mut() {
            handler(button);
        }
        self.dismiss();
    }
}

impl Presentable for ModalItem {
    fn id(&self) -> &str {
        &self.content.id
    }

    fn priority(&self) -> Priority {
        self.content.priority
    }

    fn show(&mut self) {
        self.surface.present(&self.content);
        self.showing = true;
    }

    fn dismiss(&mut self) {
        // Expected race: dismissal of an item that is not showing.
        if !self.showing {
            return;
        }
        self.surface.withdraw(&self.content);
        self.showing = false;
        // The hook is one-shot: taken here, re-registered on the next show.
        if let Some(mut hook) = self.on_dismiss.take() {
            hook();
        }
    }

    fn set_on_dismiss(&mut self, hook: DismissHook) {
        self.on_dismiss = Some(hook);
    }
}

// Identity-based equality: two items are the same iff their ids match,
// regardless of content or surface.
impl PartialEq for ModalItem {
    fn eq(&self, other: &Self) -> bool {
        self.content.id == other.content.id
    }
}
