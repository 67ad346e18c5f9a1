//! Loading and error placeholders shared by all dashboards.

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Busy indicator shown while a load cycle is running
#[component]
pub fn LoadingState(message: &'static str) -> impl IntoView {
    view! {
        <div class="dashboard-state dashboard-state--loading">
            <Spinner />
            <p>{message}</p>
        </div>
    }
}

/// Error card with a retry affordance
#[component]
pub fn ErrorState(
    message: String,
    /// Called when the user presses "Retry"
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dashboard-state dashboard-state--error">
            <MessageBar intent=MessageBarIntent::Error>
                <div style="display: flex; align-items: center; gap: var(--spacing-sm);">
                    {icon("alert")}
                    <strong>"Error"</strong>
                    <span>{message}</span>
                </div>
            </MessageBar>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_retry.run(())>
                "Retry"
            </Button>
        </div>
    }
}

/// Page header with title and a "Refresh Data" button
#[component]
pub fn DashboardHeader(
    title: &'static str,
    on_refresh: Callback<()>,
    /// Disables the refresh button while a load is in flight
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <h2 class="page__title">{title}</h2>
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=loading
                on_click=move |_| on_refresh.run(())
            >
                {icon("refresh")}
                " Refresh Data"
            </Button>
        </div>
    }
}
