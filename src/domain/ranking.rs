// Per-division product podium. Authored by hand, not derived from the dataset series.
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedProduct {
    pub product: String,
    /// Formatted figure, e.g. "4.3M" or "17k"
    pub figure: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionRanking {
    pub division: String,
    /// Gold, silver, bronze
    pub podium: [RankedProduct; 3],
}

impl DivisionRanking {
    fn new(division: &str, podium: [(&str, &str); 3]) -> Self {
        Self {
            division: division.to_string(),
            podium: podium.map(|(product, figure)| RankedProduct {
                product: product.to_string(),
                figure: figure.to_string(),
            }),
        }
    }
}

pub fn division_rankings() -> Vec<DivisionRanking> {
    vec![
        DivisionRanking::new(
            "P & A",
            [
                ("AQ Gamers Ms", "4.3M"),
                ("AQ Master wireless", "4.1M"),
                ("AQ Master wired", "3.9M"),
            ],
        ),
        DivisionRanking::new(
            "N & S",
            [
                ("AQ Pen Drive 2in1", "3.9M"),
                ("AQ Pen Drive DRC", "3.7M"),
                ("AQ Clx1", "3.5M"),
            ],
        ),
        DivisionRanking::new(
            "PC",
            [
                ("AQ Digit", "17k"),
                ("AQ Velocity", "17k"),
                ("AQ Digit Blue", "17k"),
            ],
        ),
    ]
}
