use crate::dashboards::d101_sample_data::view_model::{
    derive_sample_table, sample_request_set, SampleTableView,
};
use crate::shared::components::state_views::{DashboardHeader, ErrorState, LoadingState};
use crate::shared::dashboard_data::{use_dashboard_data, ViewState};
use crate::shared::page_frame::PageFrame;
use leptos::prelude::*;

/// Raw rows of the sample query as a table
#[component]
pub fn SampleDataDashboard() -> impl IntoView {
    let data = use_dashboard_data(sample_request_set(), derive_sample_table);
    let on_refresh = Callback::new(move |_: ()| data.refresh());
    let on_retry = Callback::new(move |_: ()| data.retry());

    view! {
        <PageFrame page_id="d101_sample_data--dashboard">
            <DashboardHeader
                title="Sample Data"
                on_refresh=on_refresh
                loading=Signal::derive(move || data.is_loading())
            />
            {move || data.with_state(|state| match state {
                ViewState::Loading => view! {
                    <LoadingState message="Loading sample data..." />
                }.into_any(),
                ViewState::Error(message) => view! {
                    <ErrorState message=message.clone() on_retry=on_retry />
                }.into_any(),
                ViewState::Ready(table) => view! {
                    <SampleTable table=table.clone() />
                    <div class="chart-card info-card">
                        <h3>"About this page"</h3>
                        <p>
                            "Rows come from the single-row query behind "
                            <code>"/api/sample-data"</code>
                            ". Columns follow the order of the first row."
                        </p>
                    </div>
                }.into_any(),
            })}
        </PageFrame>
    }
}

#[component]
fn SampleTable(table: SampleTableView) -> impl IntoView {
    let SampleTableView { columns, rows } = table;

    view! {
        <div class="chart-card">
            <h3>"Query result"</h3>
            {if rows.is_empty() {
                view! { <p class="no-data">"No data available"</p> }.into_any()
            } else {
                view! {
                    <div class="table-container">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    {columns.into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|row| view! {
                                    <tr>
                                        {row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
