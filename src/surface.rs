//! Presentation surface seam.
//!
//! This module provides:
//! - `Surface`: the side-effect boundary a shown item drives (present,
//!   withdraw). Rendering technology lives behind it and never leaks
//!   into the scheduler.
//! - `ModalHost`: the capability a producer must hold to build items.
//!   A host that cannot present an exclusive modal surface fails item
//!   construction, not scheduling.
//! - `MockSurface` / `MockHost`: recording doubles for tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::content::DialogContent;

/// External presentation side effects for one item.
///
/// Implementations must not call back into the scheduler from `present`
/// or `withdraw`; producers drive the scheduler only through its public
/// operations.
pub trait Surface {
    /// Put the content on screen. Called once per occupancy of the slot.
    fn present(&mut self, content: &DialogContent);

    /// Tear the content down. Called once per dismissal.
    fn withdraw(&mut self, content: &DialogContent);
}

/// A presentation context capable of hosting dialogs.
pub trait ModalHost {
    /// Whether this host can present an exclusive modal surface.
    ///
    /// An application-wide or otherwise non-interactive context returns
    /// false, which fails item construction fast.
    fn supports_modal(&self) -> bool;

    /// Create a surface bound to this host.
    fn create_surface(&self) -> Box<dyn Surface>;

    /// Short description used in the construction error.
    fn describe(&self) -> &str {
        "host"
    }
}

/// A recorded surface side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// `present` was invoked for the item with this id.
    Presented(String),
    /// `withdraw` was invoked for the item with this id.
    Withdrawn(String),
}

/// Recording surface for tests.
///
/// Clones share one event log, so a test can keep a handle while the
/// boxed clone lives inside an item.
#[derive(Debug, Clone, Default)]
pub struct MockSurface {
    events: Rc<RefCell<Vec<SurfaceEvent>>>,
}

impl MockSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded event, in order.
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    /// How many times the item with `id` was presented.
    pub fn presented_count(&self, id: &str) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::Presented(i) if i == id))
            .count()
    }

    /// How many times the item with `id` was withdrawn.
    pub fn withdrawn_count(&self, id: &str) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::Withdrawn(i) if i == id))
            .count()
    }
}

impl Surface for MockSurface {
    fn present(&mut self, content: &DialogContent) {
        self.events.borrow_mut().push(SurfaceEvent::Presented(content.id.clone()));
    }

    fn withdraw(&mut self, content: &DialogContent) {
        self.events.borrow_mut().push(SurfaceEvent::Withdrawn(content.id.clone()));
    }
}

/// Host double for tests.
///
/// `interactive()` hands out clones of one shared `MockSurface`;
/// `headless()` models a context that cannot show modal dialogs.
#[derive(Debug, Clone)]
pub struct MockHost {
    surface: MockSurface,
    supports_modal: bool,
}

impl MockHost {
    /// A host that can present modal surfaces.
    pub fn interactive() -> Self {
        Self {
            surface: MockSurface::new(),
            supports_modal: true,
        }
    }

    /// A host that cannot, e.g. an application-wide context.
    pub fn headless() -> Self {
        Self {
            surface: MockSurface::new(),
            supports_modal: false,
        }
    }

    /// The shared surface log for assertions.
    pub fn surface(&self) -> &MockSurface {
        &self.surface
    }
}

impl ModalHost for MockHost {
    fn supports_modal(&self) -> bool {
        self.supports_modal
    }

    fn create_surface(&self) -> Box<dyn Surface> {
        Box::new(self.surface.clone())
    }

    fn describe(&self) -> &str {
        if self.supports_modal { "mock host" } else { "headless mock host" }
    }
}
