//! modalq - priority-queued scheduling for one exclusive modal slot
//!
//! Many producers compete for a single presentation slot that can show
//! only one item at a time. modalq guarantees that at most one item is
//! ever showing, that the highest-priority pending item eventually shows,
//! and that a strictly higher-priority arrival evicts and requeues the
//! current occupant.
//!
//! The crate is single-threaded and callback-driven: every operation runs
//! to completion synchronously, including the reconcile chains triggered
//! by dismissal hooks. Construct one [`SlotScheduler`] per presentation
//! surface and hand it to producers; rendering stays behind the
//! [`Surface`] trait and never concerns the scheduler.

pub mod content;
pub mod error;
pub mod item;
pub mod scheduler;
pub mod surface;

pub use content::DialogContent;
pub use error::{ModalqError, Result};
pub use item::{DismissHook, ItemHandle, ItemState, ModalItem, Presentable};
pub use scheduler::{PendingQueue, Priority, SlotScheduler};
pub use surface::{MockHost, MockSurface, ModalHost, Surface, SurfaceEvent};
