//! Async/await support for the completion dispatcher.
//!
//! The interrupt handler runs the status handler and wakes the deferred task
//! whenever work was published; the task awaits [`AsyncCecState::next_events`]
//! in a loop.
//!
//! # Example
//!
//! ```ignore
//! static CEC_STATE: AsyncCecState = AsyncCecState::new();
//!
//! #[interrupt]
//! fn HDMI() {
//!     dw_hdmi_cec::sync::asynch::async_interrupt_handler(&BUS, &CEC_STATE);
//! }
//!
//! #[embassy_executor::task]
//! async fn cec_events(mut sink: Framework) {
//!     loop {
//!         CEC_STATE.next_events(&mut sink).await;
//!     }
//! }
//! ```

use core::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use super::primitives::AtomicWaker;
use crate::driver::dispatch::{CecEvents, Dispatched};
use crate::driver::interrupt::{CecIrq, IrqReturn};
use crate::driver::state::ControllerState;
use crate::hal::RegisterBus;

/// Controller state paired with the waker of the deferred task.
pub struct AsyncCecState {
    state: ControllerState,
    waker: AtomicWaker,
}

impl AsyncCecState {
    /// Create an idle state (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            state: ControllerState::new(),
            waker: AtomicWaker::new(),
        }
    }

    /// Shared state to hand to [`Cec::new`](crate::driver::Cec::new)
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Wait until the status handler publishes work, then deliver it.
    pub fn next_events<'a, E: CecEvents + ?Sized>(
        &'a self,
        events: &'a mut E,
    ) -> DeferredFuture<'a, E> {
        DeferredFuture {
            shared: self,
            events,
        }
    }
}

impl Default for AsyncCecState {
    fn default() -> Self {
        Self::new()
    }
}

/// Async-aware interrupt handler.
///
/// Runs the status handler against `shared` and wakes the deferred task when
/// it returns [`IrqReturn::WakeThread`].
#[inline]
pub fn async_interrupt_handler<B: RegisterBus + ?Sized>(
    bus: &B,
    shared: &AsyncCecState,
) -> IrqReturn {
    let ret = CecIrq::new(bus, &shared.state).handle();
    if ret == IrqReturn::WakeThread {
        shared.waker.wake();
    }
    ret
}

/// Future returned by [`AsyncCecState::next_events`].
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct DeferredFuture<'a, E: CecEvents + ?Sized> {
    shared: &'a AsyncCecState,
    events: &'a mut E,
}

impl<E: CecEvents + ?Sized> Future for DeferredFuture<'_, E> {
    type Output = Dispatched;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        let out = this.shared.state.dispatch(&mut *this.events);
        if out.any() {
            return Poll::Ready(out);
        }

        this.shared.waker.register(cx.waker());

        // Work published between the first check and registering
        let out = this.shared.state.dispatch(&mut *this.events);
        if out.any() {
            Poll::Ready(out)
        } else {
            Poll::Pending
        }
    }
}
