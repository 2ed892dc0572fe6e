// Chart domain models - serialized as the Chart.js constructor config
use super::error::DashboardError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexAxis {
    X,
    Y,
}

/// Fill color for a dataset: one color for every point, or one per point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    PerPoint(Vec<String>),
}

impl Paint {
    pub fn solid(color: &str) -> Self {
        Paint::Solid(color.to_string())
    }

    pub fn per_point(colors: &[&str]) -> Self {
        Paint::PerPoint(colors.iter().map(|c| c.to_string()).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: Paint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
}

impl DatasetSpec {
    pub fn new(label: Option<&str>, data: &[f64], background_color: Paint) -> Self {
        Self {
            label: label.map(str::to_string),
            data: data.to_vec(),
            background_color,
            border_color: None,
            tension: None,
            fill: None,
            hover_offset: None,
        }
    }

    /// Stroked, smoothed area under a line
    pub fn filled_line(mut self, border_color: &str, tension: f64) -> Self {
        self.border_color = Some(border_color.to_string());
        self.tension = Some(tension);
        self.fill = Some(true);
        self
    }

    pub fn hover_offset(mut self, offset: u32) -> Self {
        self.hover_offset = Some(offset);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisScale {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisScale>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<IndexAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

impl Default for ChartOptions {
    /// Fill the parent container, ignoring the canvas aspect ratio
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            index_axis: None,
            cutout: None,
            scales: None,
        }
    }
}

impl ChartOptions {
    pub fn horizontal(mut self) -> Self {
        self.index_axis = Some(IndexAxis::Y);
        self
    }

    pub fn cutout(mut self, cutout: &str) -> Self {
        self.cutout = Some(cutout.to_string());
        self
    }

    pub fn x_axis(mut self, scale: AxisScale) -> Self {
        self.scales = Some(Scales { x: Some(scale) });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// A chart payload bound to the canvas element it is drawn into.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub mount: String,
    pub config: ChartConfig,
}

impl ChartSpec {
    pub fn new(
        mount: &str,
        kind: ChartKind,
        labels: &[String],
        datasets: Vec<DatasetSpec>,
        options: ChartOptions,
    ) -> Self {
        Self {
            mount: mount.to_string(),
            config: ChartConfig {
                kind,
                data: ChartData {
                    labels: labels.to_vec(),
                    datasets,
                },
                options,
            },
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.config.kind
    }

    pub fn labels(&self) -> &[String] {
        &self.config.data.labels
    }

    pub fn datasets(&self) -> &[DatasetSpec] {
        &self.config.data.datasets
    }

    /// Every dataset carries one value per label
    pub fn is_well_formed(&self) -> bool {
        self.check().is_ok()
    }

    /// Fails on the first dataset whose length differs from the labels
    pub fn check(&self) -> Result<(), DashboardError> {
        let labels = self.config.data.labels.len();
        match self
            .config
            .data
            .datasets
            .iter()
            .find(|d| d.data.len() != labels)
        {
            Some(dataset) => Err(DashboardError::SeriesLength {
                series: match &dataset.label {
                    Some(label) => format!("{}.{}", self.mount, label),
                    None => self.mount.clone(),
                },
                labels,
                values: dataset.data.len(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_serializes_as_chart_js_config() {
        let chart = ChartSpec::new(
            "discounts",
            ChartKind::Bar,
            &labels(&["a", "b"]),
            vec![DatasetSpec::new(Some("Avg Discount %"), &[1.5, 2.0], Paint::solid("#CC3333"))],
            ChartOptions::default().horizontal().x_axis(AxisScale {
                begin_at_zero: true,
                suggested_max: Some(35.0),
            }),
        );

        let value = serde_json::to_value(&chart).unwrap();
        assert_eq!(
            value,
            json!({
                "mount": "discounts",
                "config": {
                    "type": "bar",
                    "data": {
                        "labels": ["a", "b"],
                        "datasets": [{
                            "label": "Avg Discount %",
                            "data": [1.5, 2.0],
                            "backgroundColor": "#CC3333"
                        }]
                    },
                    "options": {
                        "responsive": true,
                        "maintainAspectRatio": false,
                        "indexAxis": "y",
                        "scales": { "x": { "beginAtZero": true, "suggestedMax": 35.0 } }
                    }
                }
            })
        );
    }

    #[test]
    fn test_per_point_paint_serializes_as_array() {
        let dataset = DatasetSpec::new(None, &[1.0, 2.0], Paint::per_point(&["#111", "#222"]))
            .hover_offset(4);
        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value["backgroundColor"], json!(["#111", "#222"]));
        assert_eq!(value["hoverOffset"], json!(4));
        assert!(value.get("label").is_none());
    }

    #[test]
    fn test_is_well_formed() {
        let good = ChartSpec::new(
            "c",
            ChartKind::Line,
            &labels(&["a", "b", "c"]),
            vec![DatasetSpec::new(None, &[1.0, 2.0, 3.0], Paint::solid("#000"))],
            ChartOptions::default(),
        );
        assert!(good.is_well_formed());

        let short = ChartSpec::new(
            "c",
            ChartKind::Bar,
            &labels(&["a", "b", "c"]),
            vec![
                DatasetSpec::new(None, &[1.0, 2.0, 3.0], Paint::solid("#000")),
                DatasetSpec::new(None, &[1.0], Paint::solid("#000")),
            ],
            ChartOptions::default(),
        );
        assert!(!short.is_well_formed());
        assert_eq!(
            short.check(),
            Err(DashboardError::SeriesLength {
                series: "c".to_string(),
                labels: 3,
                values: 1,
            })
        );
    }
}
