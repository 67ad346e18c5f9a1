use crate::shared::number_format::format_money;
use contracts::dashboards::d100_sales_analytics::RecentSaleRow;
use leptos::prelude::*;

#[component]
pub fn RecentSalesTable(sales: Vec<RecentSaleRow>) -> impl IntoView {
    if sales.is_empty() {
        return None;
    }

    Some(view! {
        <div class="chart-card">
            <h3>"Recent Transactions"</h3>
            <div class="table-container">
                <table class="sales-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Product"</th>
                            <th>"Category"</th>
                            <th>"Region"</th>
                            <th>"Quantity"</th>
                            <th>"Unit Price"</th>
                            <th>"Revenue"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {sales.into_iter().map(|sale| {
                            view! {
                                <tr data-sale-id={sale.id.to_string()}>
                                    <td>{sale.date}</td>
                                    <td>{sale.product}</td>
                                    <td><span class="category-badge">{sale.category}</span></td>
                                    <td>{sale.region}</td>
                                    <td>{sale.quantity}</td>
                                    <td>{format_money(sale.unit_price)}</td>
                                    <td class="revenue-cell">{format_money(sale.revenue)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    })
}
