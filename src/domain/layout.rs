// Page layout - tabs and the mount points each one carries
pub const SALES_TREND: &str = "salesTrendChart";
pub const CHANNEL_DONUT: &str = "channelDonutChart";
pub const PRODUCT_GROWTH: &str = "productGrowthChart";
pub const TOP_PRODUCTS: &str = "topProductsChart";
pub const QUARTERLY_SALES: &str = "quarterlySalesChart";
pub const TOP_DISCOUNT_CUSTOMERS: &str = "topDiscountCustomersChart";
pub const DISCOUNT_HISTOGRAM: &str = "discountHistogramChart";
pub const SEGMENT_TREEMAP: &str = "segmentTreemapChart";

pub const RANKING_MATRIX: &str = "topProductsMatrix";
pub const MARKET_GRID: &str = "marketGrid";
pub const FISCAL_YEAR_FILTER: &str = "fy-filter";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Ranking,
    Markets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Kpis,
    Chart {
        mount: &'static str,
        title: &'static str,
    },
    Fragment {
        mount: &'static str,
        title: &'static str,
        fragment: Fragment,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLayout {
    pub id: &'static str,
    pub label: &'static str,
    pub panels: Vec<Panel>,
}

pub fn dashboard_tabs() -> Vec<TabLayout> {
    vec![
        TabLayout {
            id: "executive",
            label: "Executive Summary",
            panels: vec![
                Panel::Kpis,
                Panel::Chart {
                    mount: SALES_TREND,
                    title: "Monthly Gross Sales (FY2021)",
                },
                Panel::Chart {
                    mount: CHANNEL_DONUT,
                    title: "Channel Mix",
                },
                Panel::Fragment {
                    mount: MARKET_GRID,
                    title: "Markets",
                    fragment: Fragment::Markets,
                },
            ],
        },
        TabLayout {
            id: "products",
            label: "Products",
            panels: vec![
                Panel::Chart {
                    mount: PRODUCT_GROWTH,
                    title: "Unique Products by Segment",
                },
                Panel::Chart {
                    mount: TOP_PRODUCTS,
                    title: "Top 5 Products by Revenue",
                },
                Panel::Chart {
                    mount: SEGMENT_TREEMAP,
                    title: "Segment Distribution",
                },
                Panel::Fragment {
                    mount: RANKING_MATRIX,
                    title: "Top Products by Division",
                    fragment: Fragment::Ranking,
                },
            ],
        },
        TabLayout {
            id: "sales",
            label: "Sales Volume",
            panels: vec![Panel::Chart {
                mount: QUARTERLY_SALES,
                title: "Quarterly Volume",
            }],
        },
        TabLayout {
            id: "customers",
            label: "Customers",
            panels: vec![
                Panel::Chart {
                    mount: TOP_DISCOUNT_CUSTOMERS,
                    title: "Top Customers by Average Discount",
                },
                Panel::Chart {
                    mount: DISCOUNT_HISTOGRAM,
                    title: "Customers by Discount Band",
                },
            ],
        },
    ]
}

pub fn tab_ids() -> Vec<String> {
    dashboard_tabs()
        .iter()
        .map(|t| t.id.to_string())
        .collect()
}
