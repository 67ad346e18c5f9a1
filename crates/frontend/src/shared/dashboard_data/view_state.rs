//! View-state machine shared by every dashboard.
//!
//! `Loading` on mount and on every refresh/retry, then exactly one of
//! `Ready`/`Error` per load cycle. Each load takes a [`LoadTicket`]; only the
//! newest ticket may settle the machine, so a superseded load's result is
//! dropped when it arrives.

use std::cell::RefCell;

use super::gateway::{EndpointGateway, FetchError};
use super::orchestrator::{load, RawAggregateBundle};
use super::request_set::AggregateRequestSet;

/// What the presentation layer renders.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<P> {
    Loading,
    Error(String),
    Ready(P),
}

impl<P> ViewState<P> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&P> {
        match self {
            Self::Ready(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Generation number handed out when a load enters `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ViewStateMachine<P> {
    state: ViewState<P>,
    generation: u64,
    in_flight: bool,
}

impl<P> Default for ViewStateMachine<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ViewStateMachine<P> {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            generation: 0,
            in_flight: false,
        }
    }

    pub fn state(&self) -> &ViewState<P> {
        &self.state
    }

    /// Any state -> `Loading`. Supersedes a load that is still in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        if self.in_flight {
            log::debug!("Load {} superseded", self.generation);
        }
        self.generation += 1;
        self.in_flight = true;
        self.state = ViewState::Loading;
        LoadTicket(self.generation)
    }

    pub fn refresh(&mut self) -> LoadTicket {
        self.begin_load()
    }

    pub fn retry(&mut self) -> LoadTicket {
        self.begin_load()
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.in_flight && ticket.0 == self.generation
    }

    /// `Loading -> Ready | Error` for the current ticket.
    ///
    /// Returns `false` and leaves the state untouched for stale tickets.
    pub fn settle(&mut self, ticket: LoadTicket, result: Result<P, FetchError>) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "Discarding result of load {} (current: {})",
                ticket.0,
                self.generation
            );
            return false;
        }
        self.in_flight = false;
        self.state = match result {
            Ok(payload) => ViewState::Ready(payload),
            Err(err) => ViewState::Error(err.to_string()),
        };
        true
    }

    /// Invalidates every outstanding ticket (component unmounted).
    pub fn dispose(&mut self) {
        self.generation += 1;
        self.in_flight = false;
    }
}

/// Turns a joined bundle into the typed payload a dashboard renders.
pub type DeriveFn<P> = fn(&RawAggregateBundle) -> Result<P, FetchError>;

/// Somewhere a [`ViewStateMachine`] lives and can be mutated in place.
///
/// Returns `None` when the machine is gone (e.g. disposed reactive owner).
pub trait ViewStateStore<P> {
    fn with_machine<R>(&self, f: impl FnOnce(&mut ViewStateMachine<P>) -> R) -> Option<R>;

    /// Read-only access; must not notify observers of the store.
    fn peek_machine<R>(&self, f: impl FnOnce(&ViewStateMachine<P>) -> R) -> Option<R>;
}

impl<P> ViewStateStore<P> for RefCell<ViewStateMachine<P>> {
    fn with_machine<R>(&self, f: impl FnOnce(&mut ViewStateMachine<P>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn peek_machine<R>(&self, f: impl FnOnce(&ViewStateMachine<P>) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

/// Second half of a load cycle: fetch, derive, settle `ticket`.
///
/// Returns whether the result was applied. A stale ticket never writes to
/// the store, so observers are not woken for a discarded result.
pub async fn complete_load_cycle<S, G, P>(
    store: &S,
    ticket: LoadTicket,
    gateway: &G,
    requests: &AggregateRequestSet,
    derive: DeriveFn<P>,
) -> bool
where
    S: ViewStateStore<P> + ?Sized,
    G: EndpointGateway + ?Sized,
{
    let result = load(gateway, requests)
        .await
        .and_then(|bundle| derive(&bundle));

    if !store
        .peek_machine(|machine| machine.is_current(ticket))
        .unwrap_or(false)
    {
        log::debug!("Discarding superseded load result");
        return false;
    }

    if let Err(err) = &result {
        log::warn!("Dashboard load failed: {}", err);
    }

    store
        .with_machine(|machine| machine.settle(ticket, result))
        .unwrap_or(false)
}

/// Full load cycle: enter `Loading`, then [`complete_load_cycle`].
pub async fn run_load_cycle<S, G, P>(
    store: &S,
    gateway: &G,
    requests: &AggregateRequestSet,
    derive: DeriveFn<P>,
) -> bool
where
    S: ViewStateStore<P> + ?Sized,
    G: EndpointGateway + ?Sized,
{
    let Some(ticket) = store.with_machine(ViewStateMachine::begin_load) else {
        return false;
    };
    complete_load_cycle(store, ticket, gateway, requests, derive).await
}
