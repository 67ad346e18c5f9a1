//! Dashboard data orchestration.
//!
//! One orchestrator and one view-state machine serve every dashboard: a
//! dashboard supplies its [`AggregateRequestSet`] and a [`DeriveFn`], and
//! renders whatever [`ViewState`] the machine currently holds.

pub mod gateway;
pub mod metrics;
pub mod orchestrator;
pub mod request_set;
pub mod resource;
pub mod view_state;

#[cfg(test)]
pub(crate) mod testing;

pub use gateway::{EndpointGateway, FetchError, HttpGateway};
pub use orchestrator::{load, RawAggregateBundle};
pub use request_set::AggregateRequestSet;
pub use resource::{use_dashboard_data, DashboardData};
pub use view_state::{DeriveFn, LoadTicket, ViewState, ViewStateMachine};
