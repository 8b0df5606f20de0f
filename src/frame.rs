//! `requestAnimationFrame` loop with a cancellable handle.
//!
//! ARCHITECTURE
//! ============
//! One `Closure` per loop is created up front and re-submitted each frame, so
//! a running loop allocates nothing per frame. The pending request id is kept
//! so [`FrameLoop::cancel`] can withdraw a frame that has not fired yet. The
//! closure holds only a weak reference back to the loop; whoever owns the
//! `Rc<FrameLoop>` decides how long it lives.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::dom;
use crate::error::PageError;

pub struct FrameLoop {
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    /// Build a loop around `step`, which receives the frame timestamp and
    /// returns whether another frame is wanted. Nothing runs until
    /// [`FrameLoop::request`].
    pub fn new<F>(mut step: F) -> Rc<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let this = Rc::new(Self { pending: Cell::new(None), callback: RefCell::new(None) });
        let weak: Weak<Self> = Rc::downgrade(&this);
        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(this) = weak.upgrade() else {
                return;
            };
            this.pending.set(None);
            if step(timestamp) {
                if let Err(err) = this.request() {
                    log::warn!("animation frame request failed: {err}");
                }
            }
        });
        *this.callback.borrow_mut() = Some(callback);
        this
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Schedule the next frame. No-op if one is already pending.
    pub fn request(&self) -> Result<(), PageError> {
        if self.is_pending() {
            return Ok(());
        }
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let id = dom::window()?.request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.pending.set(Some(id));
        Ok(())
    }

    /// Withdraw the pending frame, if any.
    pub fn cancel(&self) -> Result<(), PageError> {
        if let Some(id) = self.pending.take() {
            dom::window()?.cancel_animation_frame(id)?;
        }
        Ok(())
    }
}
