//! Slot scheduler: the state machine owning the single presentation slot.
//!
//! The scheduler is either `Idle` (no occupant) or `Occupied` (exactly
//! one item showing). Every state-changing operation ends in a
//! `reconcile` step that inspects the slot and the queue head and either
//! occupies, preempts, or does nothing:
//!
//! - Idle: pop the head and show it, registering a dismissal hook that
//!   frees the slot and reconciles again.
//! - Occupied: a strictly higher-priority head evicts the occupant by
//!   requeueing it and dismissing it through the ordinary teardown path;
//!   the dismissal hook then picks the contender. Equal or lower
//!   priority never displaces the occupant.
//!
//! All of this runs synchronously on one logical execution context; the
//! recursion through dismissal hooks is bounded by the queue size.

use std::cell::RefCell;
use std::rc::Rc;

use crate::item::{DismissHook, ItemHandle, ItemState, Presentable};
use crate::scheduler::queue::PendingQueue;

#[derive(Default)]
struct SlotState {
    current: Option<ItemHandle>,
    queue: PendingQueue,
}

/// Owner of the single presentation slot.
///
/// A `SlotScheduler` is a cheap-clone handle over shared state; the
/// dismissal hooks it registers hold a weak reference back to it so a
/// user-initiated dismissal can drive the next occupancy synchronously.
/// One scheduler per presentation surface, owned by the caller and handed
/// to producers explicitly.
#[derive(Clone, Default)]
pub struct SlotScheduler {
    inner: Rc<RefCell<SlotState>>,
}

impl SlotScheduler {
    /// Create an idle scheduler with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit an item for presentation.
    ///
    /// The item joins the pending queue (silently ignored when its id is
    /// already queued) and the slot is reconciled immediately, so a
    /// strictly higher-priority submission preempts the occupant eagerly.
    pub fn submit(&self, item: ItemHandle) {
        {
            let id = item.borrow().id().to_string();
            let priority = item.borrow().priority();
            tracing::debug!(id = %id, priority = %priority, "Item submitted");
            let mut state = self.inner.borrow_mut();
            state.queue.insert(item);
        }
        self.reconcile();
    }

    /// Remove the item with this id, wherever it is.
    ///
    /// The currently showing item is dismissed normally (its hook
    /// advances the queue); a queued item is dropped with no side effect;
    /// an empty or unknown id is a no-op.
    pub fn remove_by_id(&self, id: &str) {
        if id.is_empty() {
            return;
        }
        let showing = {
            let state = self.inner.borrow();
            state
                .current
                .as_ref()
                .filter(|current| current.borrow().id() == id)
                .cloned()
        };
        if let Some(current) = showing {
            // Not a preemption: a plain dismissal whose hook advances the queue.
            current.borrow_mut().dismiss();
            return;
        }
        {
            let mut state = self.inner.borrow_mut();
            if let Some(item) = state.queue.find_by_id(id) {
                state.queue.remove(&item);
                tracing::debug!(id = %id, "Removed queued item");
            }
        }
        self.reconcile();
    }

    /// Drop every pending item and dismiss the occupant.
    pub fn clear_all(&self) {
        let current = {
            let mut state = self.inner.borrow_mut();
            // Queue first: the occupant's dismissal hook reconciles and
            // must find nothing left to show.
            state.queue.clear();
            state.current.clone()
        };
        tracing::debug!("Cleared all items");
        if let Some(item) = current {
            item.borrow_mut().dismiss();
        }
    }

    /// Whether the slot is unoccupied.
    pub fn is_idle(&self) -> bool {
        self.inner.borrow().current.is_none()
    }

    /// Id of the currently showing item, if any.
    pub fn current_id(&self) -> Option<String> {
        self.inner
            .borrow()
            .current
            .as_ref()
            .map(|current| current.borrow().id().to_string())
    }

    /// Number of items waiting in the queue.
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Lifecycle state of the item with this id.
    ///
    /// Anything the scheduler does not hold reports as dismissed.
    pub fn state_of(&self, id: &str) -> ItemState {
        let state = self.inner.borrow();
        if state
            .current
            .as_ref()
            .is_some_and(|current| current.borrow().id() == id)
        {
            ItemState::Showing
        } else if state.queue.contains_id(id) {
            ItemState::Queued
        } else {
            ItemState::Dismissed
        }
    }

    /// Inspect (slot, queue head) and occupy, preempt, or do nothing.
    fn reconcile(&self) {
        // Idle: occupy the slot with the queue head, if any.
        let next = {
            let mut state = self.inner.borrow_mut();
            if state.current.is_none() {
                match state.queue.pop_head() {
                    Some(item) => {
                        state.current = Some(item.clone());
                        Some(item)
                    }
                    // Empty queue and empty slot is a valid steady state.
                    None => return,
                }
            } else {
                None
            }
        };
        if let Some(item) = next {
            item.borrow_mut().set_on_dismiss(self.slot_freed_hook());
            let id = item.borrow().id().to_string();
            tracing::info!(id = %id, "Presenting item");
            item.borrow_mut().show();
            return;
        }

        // Occupied: evict only for a strictly higher-priority head.
        let preempted = {
            let state = self.inner.borrow();
            match (state.current.as_ref(), state.queue.peek_head()) {
                (Some(current), Some(head))
                    if head.borrow().priority() > current.borrow().priority() =>
                {
                    Some(current.clone())
                }
                _ => None,
            }
        };
        if let Some(current) = preempted {
            {
                // Requeue straight into the queue, not through submit:
                // submit reconciles again before the dismissal has run.
                let mut state = self.inner.borrow_mut();
                state.queue.insert(current.clone());
            }
            let id = current.borrow().id().to_string();
            tracing::info!(id = %id, "Preempted by higher-priority item");
            // Teardown reuses the ordinary dismissal path; its hook frees
            // the slot and picks the contender.
            current.borrow_mut().dismiss();
        }
    }

    /// Hook registered on the occupant: free the slot, then reconcile.
    fn slot_freed_hook(&self) -> DismissHook {
        let slot = Rc::downgrade(&self.inner);
        Box::new(move || {
            let Some(inner) = slot.upgrade() else { return };
            // The slot must be free before the hook's reconcile begins.
            inner.borrow_mut().current = None;
            SlotScheduler { inner }.reconcile();
        })
    }
}
