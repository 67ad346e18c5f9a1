//! Bar-based charts of the sales dashboard.
//!
//! Each chart renders nothing for an empty series.

use crate::dashboards::d100_sales_analytics::view_model::{
    CategoryShare, ProductBar, RegionShare, TrendPoint,
};
use crate::shared::number_format::{format_money, format_number_int, format_percent};
use crate::shared::settings::settings;
use leptos::prelude::*;

/// "2024-03" -> "03"
fn month_label(month: &str) -> &str {
    month.get(5..).filter(|s| !s.is_empty()).unwrap_or(month)
}

#[component]
pub fn TrendChart(points: Vec<TrendPoint>) -> impl IntoView {
    if points.is_empty() {
        return None;
    }
    let max_height = settings().trend_chart_height_px;

    Some(view! {
        <div class="chart-card">
            <h3>"Sales Trends Over Time"</h3>
            <div class="line-chart">
                <div class="chart-container">
                    {points.into_iter().map(|point| {
                        let height = point.height_ratio * max_height;
                        let title = format!("{}: {}", point.row.month, format_money(point.row.revenue));
                        view! {
                            <div class="line-chart-point">
                                <div class="line-bar" style={format!("height: {:.2}px", height)} title=title></div>
                                <div class="line-label">{month_label(&point.row.month).to_string()}</div>
                                <div class="line-value">{format_money(point.row.revenue)}</div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    })
}

#[component]
pub fn TopProductsChart(bars: Vec<ProductBar>) -> impl IntoView {
    if bars.is_empty() {
        return None;
    }

    Some(view! {
        <div class="chart-card half-width">
            <h3>"Top Products by Revenue"</h3>
            <div class="bar-chart">
                {bars.into_iter().map(|bar| {
                    view! {
                        <div class="bar-item">
                            <div class="bar-label">{bar.row.product}</div>
                            <div class="bar-container">
                                <div class="bar-fill" style={format!("width: {:.2}%", bar.width_ratio * 100.0)}></div>
                                <div class="bar-value">{format_money(bar.row.revenue)}</div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    })
}

#[component]
pub fn RegionShareChart(regions: Vec<RegionShare>) -> impl IntoView {
    if regions.is_empty() {
        return None;
    }
    let palette = settings();

    Some(view! {
        <div class="chart-card half-width">
            <h3>"Sales by Region"</h3>
            <div class="pie-chart">
                {regions.into_iter().enumerate().map(|(index, region)| {
                    let style = format!(
                        "width: {:.2}%; background-color: {}",
                        region.share_percent,
                        palette.region_color(index)
                    );
                    view! {
                        <div class="pie-item">
                            <div class="pie-slice" style=style></div>
                            <div class="pie-label">
                                <span class="pie-region">{region.row.region}</span>
                                <span class="pie-percentage">{format_percent(region.share_percent)}</span>
                                <span class="pie-value">{format_money(region.row.revenue)}</span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    })
}

#[component]
pub fn CategoryBreakdown(categories: Vec<CategoryShare>) -> impl IntoView {
    if categories.is_empty() {
        return None;
    }

    Some(view! {
        <div class="chart-card">
            <h3>"Sales by Category"</h3>
            <div class="category-chart">
                {categories.into_iter().map(|category| {
                    view! {
                        <div class="category-item">
                            <div class="category-header">
                                <span class="category-name">{category.row.category}</span>
                                <span class="category-revenue">{format_money(category.row.revenue)}</span>
                            </div>
                            <div class="category-bar-container">
                                <div class="category-bar" style={format!("width: {:.2}%", category.share_percent)}></div>
                            </div>
                            <div class="category-stats">
                                <span>{format!("{} of total", format_percent(category.share_percent))}</span>
                                <span>{format!("{} units", format_number_int(category.row.quantity as f64))}</span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    })
}
