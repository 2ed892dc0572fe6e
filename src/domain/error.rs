// Domain errors
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DashboardError {
    #[error("unknown {group} option '{id}'")]
    UnknownOption { group: &'static str, id: String },

    #[error("default {group} option '{id}' is not one of the declared options")]
    InvalidDefault { group: &'static str, id: String },

    #[error("series '{series}' has {labels} labels but {values} values")]
    SeriesLength {
        series: String,
        labels: usize,
        values: usize,
    },
}
