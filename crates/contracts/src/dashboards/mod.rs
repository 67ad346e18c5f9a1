pub mod d100_sales_analytics;
pub mod d101_sample_data;
