// Dashboard service - binds the dataset to chart payloads once, at startup
use crate::domain::chart::{AxisScale, ChartKind, ChartOptions, ChartSpec, DatasetSpec, Paint};
use crate::domain::dataset::{DashboardDataset, YEAR_2020, YEAR_2021};
use crate::domain::layout;
use crate::domain::ranking::{division_rankings, DivisionRanking};
use std::sync::Arc;

const PREVIOUS_YEAR_GREY: &str = "#999999";
const CURRENT_YEAR_BLUE: &str = "#0066CC";
const TOP_PRODUCT_GRADIENT: [&str; 5] = ["#003366", "#004C99", "#0066CC", "#3399FF", "#66B2FF"];
const SEGMENT_PALETTE: [&str; 6] = [
    "#003366", "#0066CC", "#00CC66", "#FF9900", "#CC3333", "#666666",
];

#[derive(Clone)]
pub struct DashboardService {
    dataset: Arc<DashboardDataset>,
    charts: Arc<Vec<ChartSpec>>,
    charts_json: Arc<String>,
    rankings: Arc<Vec<DivisionRanking>>,
}

impl DashboardService {
    /// Validates the dataset and builds every chart payload. Nothing is rebuilt afterwards.
    pub fn new(dataset: DashboardDataset) -> anyhow::Result<Self> {
        dataset.validate()?;
        let charts = build_charts(&dataset);
        for chart in &charts {
            chart.check()?;
        }
        let charts_json = serde_json::to_string(&charts)?;

        tracing::info!(
            charts = charts.len(),
            markets = dataset.markets.len(),
            "Dashboard payloads built"
        );

        Ok(Self {
            dataset: Arc::new(dataset),
            charts: Arc::new(charts),
            charts_json: Arc::new(charts_json),
            rankings: Arc::new(division_rankings()),
        })
    }

    pub fn dataset(&self) -> &DashboardDataset {
        &self.dataset
    }

    pub fn charts(&self) -> &[ChartSpec] {
        &self.charts
    }

    /// The chart payloads as served to the page, serialized once
    pub fn charts_json(&self) -> &str {
        &self.charts_json
    }

    pub fn rankings(&self) -> &[DivisionRanking] {
        &self.rankings
    }
}

/// One payload per chart mount point, in page order.
pub fn build_charts(data: &DashboardDataset) -> Vec<ChartSpec> {
    let charts = vec![
        ChartSpec::new(
            layout::SALES_TREND,
            ChartKind::Line,
            &data.sales_trend.labels,
            vec![DatasetSpec::new(
                Some("Gross Sales (Millions)"),
                &data.sales_trend.values,
                Paint::solid("rgba(0, 51, 102, 0.1)"),
            )
            .filled_line("#003366", 0.4)],
            ChartOptions::default(),
        ),
        ChartSpec::new(
            layout::CHANNEL_DONUT,
            ChartKind::Doughnut,
            &data.channel_mix.share.labels,
            vec![DatasetSpec::new(
                None,
                &data.channel_mix.share.values,
                Paint::PerPoint(data.channel_mix.colors.clone()),
            )
            .hover_offset(4)],
            ChartOptions::default().cutout("60%"),
        ),
        ChartSpec::new(
            layout::PRODUCT_GROWTH,
            ChartKind::Bar,
            &data.product_growth.labels,
            vec![
                DatasetSpec::new(
                    Some(YEAR_2020),
                    data.product_growth.values(YEAR_2020),
                    Paint::solid(PREVIOUS_YEAR_GREY),
                ),
                DatasetSpec::new(
                    Some(YEAR_2021),
                    data.product_growth.values(YEAR_2021),
                    Paint::solid(CURRENT_YEAR_BLUE),
                ),
            ],
            ChartOptions::default().horizontal(),
        ),
        ChartSpec::new(
            layout::TOP_PRODUCTS,
            ChartKind::Bar,
            &data.top_products.labels,
            vec![DatasetSpec::new(
                Some("Revenue ($M)"),
                &data.top_products.values,
                Paint::per_point(&TOP_PRODUCT_GRADIENT),
            )],
            ChartOptions::default().horizontal(),
        ),
        ChartSpec::new(
            layout::QUARTERLY_SALES,
            ChartKind::Bar,
            &data.quarterly_volume.labels,
            vec![
                DatasetSpec::new(
                    Some("2020 Volume"),
                    data.quarterly_volume.values(YEAR_2020),
                    Paint::solid(PREVIOUS_YEAR_GREY),
                ),
                DatasetSpec::new(
                    Some("2021 Volume"),
                    data.quarterly_volume.values(YEAR_2021),
                    Paint::solid(CURRENT_YEAR_BLUE),
                ),
            ],
            ChartOptions::default(),
        ),
        ChartSpec::new(
            layout::TOP_DISCOUNT_CUSTOMERS,
            ChartKind::Bar,
            &data.top_discounts.labels,
            vec![DatasetSpec::new(
                Some("Avg Discount %"),
                &data.top_discounts.values,
                Paint::solid("#CC3333"),
            )],
            ChartOptions::default().horizontal().x_axis(AxisScale {
                begin_at_zero: true,
                suggested_max: Some(35.0),
            }),
        ),
        ChartSpec::new(
            layout::DISCOUNT_HISTOGRAM,
            ChartKind::Bar,
            &data.discount_histogram.labels,
            vec![DatasetSpec::new(
                Some("Customer Count"),
                &data.discount_histogram.values,
                Paint::solid("#00CC66"),
            )],
            ChartOptions::default(),
        ),
        // Chart.js has no treemap without a plugin; a pie stands in for it
        ChartSpec::new(
            layout::SEGMENT_TREEMAP,
            ChartKind::Pie,
            &data.segment_distribution.labels,
            vec![DatasetSpec::new(
                None,
                &data.segment_distribution.values,
                Paint::per_point(&SEGMENT_PALETTE),
            )],
            ChartOptions::default(),
        ),
    ];

    for chart in &charts {
        tracing::debug!(
            mount = %chart.mount,
            kind = ?chart.kind(),
            points = chart.labels().len(),
            datasets = chart.datasets().len(),
            "Bound chart"
        );
    }

    charts
}
