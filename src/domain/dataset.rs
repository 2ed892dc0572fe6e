// Dataset domain model - the fixed figures every chart and fragment reads from
use super::error::DashboardError;
use serde::Serialize;

/// Headline scalars shown on the executive tab. Sales are in millions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveKpis {
    pub total_sales_2021: f64,
    pub total_sales_2020: f64,
    pub products_2021: u32,
    pub products_2020: u32,
    pub markets: u32,
    pub growth_pct: f64,
}

/// One ordered label sequence paired with one value sequence of the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl LabeledSeries {
    pub fn new(labels: &[&str], values: &[f64]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            values: values.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedValues {
    pub name: String,
    pub values: Vec<f64>,
}

impl NamedValues {
    pub fn new(name: &str, values: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            values: values.to_vec(),
        }
    }
}

/// Labels shared by several value sequences, e.g. one per year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedSeries {
    pub labels: Vec<String>,
    pub groups: Vec<NamedValues>,
}

impl GroupedSeries {
    pub fn new(labels: &[&str], groups: Vec<NamedValues>) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            groups,
        }
    }

    /// Values of the group called `name`, empty when absent
    pub fn values(&self, name: &str) -> &[f64] {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.values.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelMix {
    #[serde(flatten)]
    pub share: LabeledSeries,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Market {
    pub name: String,
    /// Already formatted with currency and unit, e.g. "$161M"
    pub display_value: String,
    pub growing: bool,
}

impl Market {
    fn new(name: &str, display_value: &str, growing: bool) -> Self {
        Self {
            name: name.to_string(),
            display_value: display_value.to_string(),
            growing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardDataset {
    pub executive: ExecutiveKpis,
    pub sales_trend: LabeledSeries,
    pub channel_mix: ChannelMix,
    pub product_growth: GroupedSeries,
    pub top_products: LabeledSeries,
    pub quarterly_volume: GroupedSeries,
    pub markets: Vec<Market>,
    pub segment_distribution: LabeledSeries,
    pub top_discounts: LabeledSeries,
    pub discount_histogram: LabeledSeries,
}

pub const YEAR_2020: &str = "2020";
pub const YEAR_2021: &str = "2021";

const SEGMENTS: [&str; 6] = [
    "Notebook",
    "Accessories",
    "Peripherals",
    "Desktop",
    "Storage",
    "Networking",
];

impl DashboardDataset {
    /// The FY2021 sales figures. Top products and the discount histogram are estimates.
    pub fn fiscal_2021() -> Self {
        Self {
            executive: ExecutiveKpis {
                total_sales_2021: 173.3,
                total_sales_2020: 92.7,
                products_2021: 334,
                products_2020: 245,
                markets: 27,
                growth_pct: 86.9,
            },
            sales_trend: LabeledSeries::new(
                &[
                    "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul",
                    "Aug",
                ],
                &[9.3, 13.2, 20.5, 12.9, 19.6, 15.1, 12.3, 11.5, 10.8, 11.5, 18.3, 18.4],
            ),
            channel_mix: ChannelMix {
                share: LabeledSeries::new(
                    &["Retailer", "Distributor", "Direct"],
                    &[73.2, 11.3, 15.5],
                ),
                colors: vec![
                    "#0066CC".to_string(),
                    "#FF9900".to_string(),
                    "#00CC66".to_string(),
                ],
            },
            product_growth: GroupedSeries::new(
                &SEGMENTS,
                vec![
                    NamedValues::new(YEAR_2020, &[92.0, 69.0, 59.0, 7.0, 12.0, 6.0]),
                    NamedValues::new(YEAR_2021, &[108.0, 103.0, 75.0, 22.0, 17.0, 9.0]),
                ],
            ),
            top_products: LabeledSeries::new(
                &[
                    "AQ HOME Allin1",
                    "AQ Pen Drive 2in1",
                    "AQ Gamers Ms",
                    "AQ Digit",
                    "AQ Master Wired",
                ],
                &[215.0, 180.0, 156.0, 134.0, 128.0],
            ),
            quarterly_volume: GroupedSeries::new(
                &["Q1 (Sep-Nov)", "Q2 (Dec-Feb)", "Q3 (Mar-May)", "Q4 (Jun-Aug)"],
                vec![
                    NamedValues::new(YEAR_2020, &[7.0, 6.6, 2.0, 4.0]),
                    NamedValues::new(YEAR_2021, &[8.5, 9.2, 7.9, 8.2]),
                ],
            ),
            markets: vec![
                Market::new("India", "$161M", true),
                Market::new("Indonesia", "$43M", true),
                Market::new("S.Korea", "$37M", true),
                Market::new("Japan", "$22M", true),
                Market::new("Philippines", "$18M", true),
                Market::new("Australia", "$15M", true),
                Market::new("New Zealand", "$9M", true),
                Market::new("Bangladesh", "$6M", false),
            ],
            segment_distribution: LabeledSeries::new(
                &SEGMENTS,
                &[32.4, 29.1, 21.1, 8.0, 6.8, 2.3],
            ),
            top_discounts: LabeledSeries::new(
                &["Flipkart", "Viveks", "Ezone", "Croma", "Amazon"],
                &[30.83, 30.38, 30.28, 30.25, 29.33],
            ),
            discount_histogram: LabeledSeries::new(
                &["0-5%", "5-10%", "10-15%", "15-20%", "20-25%", "25-30%+"],
                &[5.0, 45.0, 60.0, 20.0, 10.0, 5.0],
            ),
        }
    }

    /// Check every series against its labels. Fails on the first mismatch.
    pub fn validate(&self) -> Result<(), DashboardError> {
        let single = [
            ("sales_trend", &self.sales_trend),
            ("channel_mix", &self.channel_mix.share),
            ("top_products", &self.top_products),
            ("segment_distribution", &self.segment_distribution),
            ("top_discounts", &self.top_discounts),
            ("discount_histogram", &self.discount_histogram),
        ];
        for (name, series) in single {
            check_length(name, series.labels.len(), series.values.len())?;
        }
        check_length(
            "channel_mix.colors",
            self.channel_mix.share.labels.len(),
            self.channel_mix.colors.len(),
        )?;

        let grouped = [
            ("product_growth", &self.product_growth),
            ("quarterly_volume", &self.quarterly_volume),
        ];
        for (name, series) in grouped {
            for group in &series.groups {
                check_length(
                    &format!("{}.{}", name, group.name),
                    series.labels.len(),
                    group.values.len(),
                )?;
            }
        }

        Ok(())
    }
}

fn check_length(series: &str, labels: usize, values: usize) -> Result<(), DashboardError> {
    if labels == values {
        Ok(())
    } else {
        Err(DashboardError::SeriesLength {
            series: series.to_string(),
            labels,
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fiscal_2021_is_well_formed() {
        assert_eq!(DashboardDataset::fiscal_2021().validate(), Ok(()));
    }

    #[test]
    fn test_series_shapes() {
        let data = DashboardDataset::fiscal_2021();
        assert_eq!(data.sales_trend.labels.len(), 12);
        assert_eq!(data.product_growth.labels.len(), 6);
        assert_eq!(data.product_growth.values(YEAR_2020).len(), 6);
        assert_eq!(data.product_growth.values(YEAR_2021).len(), 6);
        assert_eq!(data.quarterly_volume.values(YEAR_2021), &[8.5, 9.2, 7.9, 8.2]);
        assert!(data.quarterly_volume.values("1999").is_empty());
    }

    #[test]
    fn test_only_bangladesh_is_not_growing() {
        let data = DashboardDataset::fiscal_2021();
        let flat: Vec<&str> = data
            .markets
            .iter()
            .filter(|m| !m.growing)
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(flat, vec!["Bangladesh"]);
        assert_eq!(data.markets.len(), 8);
    }

    #[test]
    fn test_validate_reports_mismatched_series() {
        let mut data = DashboardDataset::fiscal_2021();
        data.top_discounts.values.pop();
        assert_eq!(
            data.validate(),
            Err(DashboardError::SeriesLength {
                series: "top_discounts".to_string(),
                labels: 5,
                values: 4,
            })
        );

        let mut data = DashboardDataset::fiscal_2021();
        data.quarterly_volume.groups[0].values.push(1.0);
        assert_eq!(
            data.validate(),
            Err(DashboardError::SeriesLength {
                series: "quarterly_volume.2020".to_string(),
                labels: 4,
                values: 5,
            })
        );
    }
}
