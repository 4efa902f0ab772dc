//! Repeating poll timer driving the dashboard refreshes.
//!
//! The poller is armed once when the dashboard loads and disarmed when the
//! page unloads (or when the poller is dropped).

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use web_sys::Window;
use zerofeed_app::ports::DashboardApi;
use zerofeed_app::services::dashboard_service::DashboardService;

use crate::view::SignalView;

/// Guard owning the repeating timer and the `beforeunload` listener.
pub struct Poller {
    interval: Rc<RefCell<Option<Interval>>>,
    window: Option<Window>,
    on_unload: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl Poller {
    /// Refresh both sections immediately, then every `period_ms` milliseconds.
    ///
    /// Ticks do not wait for earlier refreshes to finish; a late response
    /// simply overwrites whatever is shown at the time it arrives.
    pub fn start<A>(service: Rc<DashboardService<A>>, view: SignalView, period_ms: u32) -> Self
    where
        A: DashboardApi + 'static,
    {
        tick(&service, view);

        let interval = Rc::new(RefCell::new(Some(Interval::new(period_ms, move || {
            tick(&service, view);
        }))));

        let window = web_sys::window();
        let on_unload = window.as_ref().and_then(|window| {
            let slot = Rc::clone(&interval);
            let on_unload = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                disarm(&slot);
            });
            match window
                .add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref())
            {
                Ok(()) => Some(on_unload),
                Err(err) => {
                    leptos::logging::warn!("failed to register beforeunload listener: {err:?}");
                    None
                }
            }
        });

        Self {
            interval,
            window,
            on_unload,
        }
    }

    /// Cancel the timer. Refreshes already in flight still complete.
    pub fn stop(&self) {
        disarm(&self.interval);
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
        if let (Some(window), Some(on_unload)) = (&self.window, &self.on_unload) {
            if let Err(err) = window.remove_event_listener_with_callback(
                "beforeunload",
                on_unload.as_ref().unchecked_ref(),
            ) {
                leptos::logging::warn!("failed to remove beforeunload listener: {err:?}");
            }
        }
    }
}

/// Dropping the interval clears it.
fn disarm(slot: &RefCell<Option<Interval>>) {
    drop(slot.borrow_mut().take());
}

/// Fire both refreshes without waiting for them.
fn tick<A>(service: &Rc<DashboardService<A>>, view: SignalView)
where
    A: DashboardApi + 'static,
{
    let svc = Rc::clone(service);
    spawn_local(async move { svc.refresh_status(&view).await });
    let svc = Rc::clone(service);
    spawn_local(async move { svc.refresh_logs(&view).await });
}
