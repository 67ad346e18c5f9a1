use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number_int};
use leptos::prelude::*;

/// How a KPI value is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Money,
    Integer,
}

fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Money => format_money(val),
        ValueFormat::Integer => format_number_int(val),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    value: f64,
    /// How to format the value
    format: ValueFormat,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{format_value(value, format)}</div>
            </div>
        </div>
    }
}
