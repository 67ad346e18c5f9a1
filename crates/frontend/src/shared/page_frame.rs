//! PageFrame: standard root wrapper for every dashboard page.
//!
//! Sets `id` in the `"{dashboard}--dashboard"` form (e.g.
//! `"d100_sales_analytics--dashboard"`) so a node copied from the DOM
//! inspector leads straight to `dashboards/d100_sales_analytics/`.

use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{dashboard}--dashboard`
    page_id: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page page--dashboard".to_string()
    } else {
        format!("page page--dashboard {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category="dashboard">
            {children()}
        </div>
    }
}
