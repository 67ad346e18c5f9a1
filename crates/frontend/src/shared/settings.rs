//! Process-wide dashboard settings.
//!
//! Initialised once on first access and never mutated afterwards.

use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct DashboardSettings {
    /// Rows kept by the "Top products" chart
    pub top_products: usize,
    /// Height of the tallest bar in the trend chart, px
    pub trend_chart_height_px: f64,
    /// Colours cycled through by the region share chart
    pub region_palette: &'static [&'static str],
    /// Currency code used for money values
    pub currency: &'static str,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            top_products: 5,
            trend_chart_height_px: 200.0,
            region_palette: &["#FF3621", "#FF6B4A", "#FFA07A", "#FFB899", "#FFD0B8"],
            currency: "USD",
        }
    }
}

static SETTINGS: Lazy<DashboardSettings> = Lazy::new(DashboardSettings::default);

pub fn settings() -> &'static DashboardSettings {
    &SETTINGS
}

impl DashboardSettings {
    /// Palette colour for the `index`-th slice
    pub fn region_color(&self, index: usize) -> &'static str {
        self.region_palette[index % self.region_palette.len()]
    }
}
