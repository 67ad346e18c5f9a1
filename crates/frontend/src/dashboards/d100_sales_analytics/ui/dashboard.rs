use super::charts::{CategoryBreakdown, RegionShareChart, TopProductsChart, TrendChart};
use super::recent_table::RecentSalesTable;
use crate::dashboards::d100_sales_analytics::view_model::{
    derive_sales_view, sales_request_set, SalesDashboardView,
};
use crate::shared::components::stat_card::{StatCard, ValueFormat};
use crate::shared::components::state_views::{DashboardHeader, ErrorState, LoadingState};
use crate::shared::dashboard_data::{use_dashboard_data, ViewState};
use crate::shared::page_frame::PageFrame;
use leptos::prelude::*;

/// Sales Analytics Dashboard component
#[component]
pub fn SalesAnalyticsDashboard() -> impl IntoView {
    let data = use_dashboard_data(sales_request_set(), derive_sales_view);
    let on_refresh = Callback::new(move |_: ()| data.refresh());
    let on_retry = Callback::new(move |_: ()| data.retry());

    view! {
        <PageFrame page_id="d100_sales_analytics--dashboard" class="sales-dashboard">
            <DashboardHeader
                title="Sales Analytics Dashboard"
                on_refresh=on_refresh
                loading=Signal::derive(move || data.is_loading())
            />
            {move || data.with_state(|state| match state {
                ViewState::Loading => view! {
                    <LoadingState message="Loading sales analytics..." />
                }.into_any(),
                ViewState::Error(message) => view! {
                    <ErrorState message=message.clone() on_retry=on_retry />
                }.into_any(),
                ViewState::Ready(sales) => view! {
                    <SalesReady sales=sales.clone() />
                }.into_any(),
            })}
        </PageFrame>
    }
}

#[component]
fn SalesReady(sales: SalesDashboardView) -> impl IntoView {
    let SalesDashboardView {
        overview,
        trends,
        top_products,
        regions,
        categories,
        recent,
    } = sales;

    view! {
        <div class="page__content">
            <div class="kpi-grid">
                <StatCard label="Total Revenue" icon_name="revenue" value=overview.total_revenue format=ValueFormat::Money />
                <StatCard label="Total Orders" icon_name="orders" value={overview.total_orders as f64} format=ValueFormat::Integer />
                <StatCard label="Avg Order Value" icon_name="avg-order" value=overview.avg_order_value format=ValueFormat::Money />
                <StatCard label="Unique Customers" icon_name="customers" value={overview.unique_customers as f64} format=ValueFormat::Integer />
            </div>

            <TrendChart points=trends />

            <div class="charts-row">
                <TopProductsChart bars=top_products />
                <RegionShareChart regions=regions />
            </div>

            <CategoryBreakdown categories=categories />
            <RecentSalesTable sales=recent />
        </div>
    }
}
