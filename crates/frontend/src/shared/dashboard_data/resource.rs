//! Leptos binding of the view-state machine.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::gateway::HttpGateway;
use super::request_set::AggregateRequestSet;
use super::view_state::{
    complete_load_cycle, DeriveFn, ViewState, ViewStateMachine, ViewStateStore,
};

impl<P> ViewStateStore<P> for RwSignal<ViewStateMachine<P>>
where
    P: Send + Sync + 'static,
{
    fn with_machine<R>(&self, f: impl FnOnce(&mut ViewStateMachine<P>) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn peek_machine<R>(&self, f: impl FnOnce(&ViewStateMachine<P>) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

/// Reactive handle to one dashboard's data.
///
/// Owned by the component that called [`use_dashboard_data`]; copies are cheap.
pub struct DashboardData<P: Send + Sync + 'static> {
    machine: RwSignal<ViewStateMachine<P>>,
    requests: StoredValue<AggregateRequestSet>,
    derive: DeriveFn<P>,
}

impl<P: Send + Sync + 'static> Clone for DashboardData<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Send + Sync + 'static> Copy for DashboardData<P> {}

impl<P: Send + Sync + 'static> DashboardData<P> {
    /// Enters `Loading` now and settles when every fetch has completed.
    pub fn load(&self) {
        let Some(ticket) = self.machine.try_update(ViewStateMachine::begin_load) else {
            return;
        };

        let machine = self.machine;
        let derive = self.derive;
        let Some(requests) = self.requests.try_get_value() else {
            return;
        };

        spawn_local(async move {
            let gateway = HttpGateway::new();
            complete_load_cycle(&machine, ticket, &gateway, &requests, derive).await;
        });
    }

    /// "Refresh Data" button
    pub fn refresh(&self) {
        self.load();
    }

    /// Retry affordance of the error view
    pub fn retry(&self) {
        self.load();
    }

    pub fn is_loading(&self) -> bool {
        self.machine.with(|m| m.state().is_loading())
    }

    /// Runs `f` against the current state, tracking it reactively.
    pub fn with_state<R>(&self, f: impl FnOnce(&ViewState<P>) -> R) -> R {
        self.machine.with(|m| f(m.state()))
    }
}

/// Creates the view-state machine for a dashboard and starts the first load.
///
/// Results arriving after the component unmounts are dropped.
pub fn use_dashboard_data<P>(requests: AggregateRequestSet, derive: DeriveFn<P>) -> DashboardData<P>
where
    P: Send + Sync + 'static,
{
    let data = DashboardData {
        machine: RwSignal::new(ViewStateMachine::new()),
        requests: StoredValue::new(requests),
        derive,
    };

    let machine = data.machine;
    on_cleanup(move || {
        machine.try_update(ViewStateMachine::dispose);
    });

    data.load();
    data
}
