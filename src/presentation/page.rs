// Page rendering - the dashboard document and its injected fragments
use crate::domain::dataset::{ExecutiveKpis, Market};
use crate::domain::layout::{self, Fragment, Panel, TabLayout};
use crate::domain::navigation::NavigationState;
use crate::domain::ranking::DivisionRanking;
use crate::presentation::assets::{DASHBOARD_CSS, DASHBOARD_JS};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const PODIUM_HEADINGS: [&str; 3] = ["Rank 1 (Gold)", "Rank 2 (Silver)", "Rank 3 (Bronze)"];

/// Everything the page needs, borrowed from the app state for one render
pub struct PageContext<'a> {
    pub title: &'a str,
    pub chart_js_url: &'a str,
    pub tabs: &'a [TabLayout],
    pub navigation: &'a NavigationState,
    pub kpis: &'a ExecutiveKpis,
    pub markets: &'a [Market],
    pub rankings: &'a [DivisionRanking],
    pub charts_json: &'a str,
}

pub fn render_page(ctx: &PageContext<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (ctx.title) }
                style { (PreEscaped(DASHBOARD_CSS)) }
            }
            body {
                header {
                    h1 { (ctx.title) }
                    (fiscal_year_filter(ctx.navigation))
                }
                nav {
                    @for tab in ctx.tabs {
                        button.nav-btn.active[ctx.navigation.tabs.is_active(tab.id)] data-tab=(tab.id) {
                            (tab.label)
                        }
                    }
                }
                main {
                    @for tab in ctx.tabs {
                        section.dashboard-page.active[ctx.navigation.tabs.is_active(tab.id)] id=(tab.id) {
                            @for panel in &tab.panels {
                                (render_panel(panel, ctx))
                            }
                        }
                    }
                }
                script type="application/json" id="chart-payloads" {
                    (PreEscaped(script_safe_json(ctx.charts_json)))
                }
                script src=(ctx.chart_js_url) {}
                script { (PreEscaped(DASHBOARD_JS)) }
            }
        }
    }
}

fn fiscal_year_filter(navigation: &NavigationState) -> Markup {
    html! {
        div id=(layout::FISCAL_YEAR_FILTER) {
            @for fy in navigation.fiscal_year.options() {
                button.active[navigation.fiscal_year.is_active(fy)] data-value=(fy) { (fy) }
            }
        }
    }
}

fn render_panel(panel: &Panel, ctx: &PageContext<'_>) -> Markup {
    match *panel {
        Panel::Kpis => kpi_cards(ctx.kpis),
        Panel::Chart { mount, title } => html! {
            div.panel {
                h2 { (title) }
                div.chart-box {
                    canvas id=(mount) {}
                }
            }
        },
        Panel::Fragment {
            mount,
            title,
            fragment,
        } => {
            let body = match fragment {
                Fragment::Ranking => ranking_table(ctx.rankings),
                Fragment::Markets => market_grid(ctx.markets),
            };
            html! {
                div.panel {
                    h2 { (title) }
                    div id=(mount) { (body) }
                }
            }
        }
    }
}

pub fn kpi_cards(kpis: &ExecutiveKpis) -> Markup {
    let cards = [
        (
            "Total Sales FY2021",
            format!("${:.1}M", kpis.total_sales_2021),
            format!("vs ${:.1}M in FY2020", kpis.total_sales_2020),
        ),
        (
            "Sales Growth",
            format!("+{:.1}%", kpis.growth_pct),
            "year over year".to_string(),
        ),
        (
            "Unique Products",
            kpis.products_2021.to_string(),
            format!("vs {} in FY2020", kpis.products_2020),
        ),
        (
            "Markets",
            kpis.markets.to_string(),
            "countries served".to_string(),
        ),
    ];

    html! {
        div.kpi-row {
            @for (label, value, note) in &cards {
                div.kpi-card {
                    div.kpi-label { (label) }
                    div.kpi-value { (value) }
                    div.kpi-note { (note) }
                }
            }
        }
    }
}

pub fn ranking_table(rankings: &[DivisionRanking]) -> Markup {
    html! {
        table.matrix-table {
            thead {
                tr {
                    th { "Division" }
                    @for heading in PODIUM_HEADINGS {
                        th { (heading) }
                    }
                }
            }
            tbody {
                @for row in rankings {
                    tr {
                        td { strong { (row.division) } }
                        @for (index, entry) in row.podium.iter().enumerate() {
                            td class=(format!("rank-{}", index + 1)) {
                                (entry.product) " (" (entry.figure) ")"
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn market_grid(markets: &[Market]) -> Markup {
    html! {
        div.market-grid {
            @for market in markets {
                div.market-bubble.highlight[market.growing] {
                    div.market-name { (market.name) }
                    div.market-val { (market.display_value) }
                }
            }
        }
    }
}

/// Keep a JSON document from closing the surrounding script element
fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::DashboardDataset;
    use crate::domain::layout::dashboard_tabs;
    use crate::domain::navigation::{ToggleGroup, FISCAL_YEAR_GROUP, TAB_GROUP};
    use crate::domain::ranking::division_rankings;

    fn navigation(tab: &str) -> NavigationState {
        NavigationState {
            tabs: ToggleGroup::new(TAB_GROUP, layout::tab_ids(), tab).unwrap(),
            fiscal_year: ToggleGroup::new(
                FISCAL_YEAR_GROUP,
                vec!["FY2020".to_string(), "FY2021".to_string()],
                "FY2021",
            )
            .unwrap(),
        }
    }

    #[test]
    fn test_market_grid_highlights_growing_markets() {
        let data = DashboardDataset::fiscal_2021();
        let html = market_grid(&data.markets).into_string();

        assert_eq!(html.matches("market-bubble").count(), data.markets.len());
        assert_eq!(
            html.matches("highlight").count(),
            data.markets.iter().filter(|m| m.growing).count()
        );
        assert!(html.contains(
            r#"<div class="market-bubble"><div class="market-name">Bangladesh</div><div class="market-val">$6M</div></div>"#
        ));
        assert!(html.contains(r#"<div class="market-bubble highlight"><div class="market-name">India</div>"#));
    }

    #[test]
    fn test_ranking_table_has_three_per_division() {
        let rankings = division_rankings();
        let html = ranking_table(&rankings).into_string();

        let body = html.split("<tbody>").nth(1).unwrap();
        let rows: Vec<&str> = body.split("<tr>").skip(1).collect();
        assert_eq!(rows.len(), rankings.len());
        for row in rows {
            assert_eq!(row.matches("class=\"rank-").count(), 3);
            assert!(row.contains("rank-1") && row.contains("rank-2") && row.contains("rank-3"));
        }
        assert!(html.contains("<strong>P &amp; A</strong>"));
        assert!(html.contains(r#"<td class="rank-1">AQ Gamers Ms (4.3M)</td>"#));
    }

    #[test]
    fn test_kpi_cards_format_values() {
        let data = DashboardDataset::fiscal_2021();
        let html = kpi_cards(&data.executive).into_string();
        assert!(html.contains("$173.3M"));
        assert!(html.contains("vs $92.7M in FY2020"));
        assert!(html.contains("+86.9%"));
        assert!(html.contains(">334<"));
    }

    #[test]
    fn test_page_marks_only_the_active_tab() {
        let data = DashboardDataset::fiscal_2021();
        let rankings = division_rankings();
        let tabs = dashboard_tabs();
        let nav = navigation("customers");
        let ctx = PageContext {
            title: "Sales",
            chart_js_url: "/chart.js",
            tabs: &tabs,
            navigation: &nav,
            kpis: &data.executive,
            markets: &data.markets,
            rankings: &rankings,
            charts_json: "[]",
        };
        let html = render_page(&ctx).into_string();

        assert_eq!(html.matches("dashboard-page active").count(), 1);
        assert!(html.contains(r#"<section class="dashboard-page active" id="customers">"#));
        assert!(html.contains(r#"<button class="nav-btn active" data-tab="customers">"#));
        assert_eq!(html.matches("nav-btn active").count(), 1);
        assert!(html.contains(r#"<button class="active" data-value="FY2021">"#));
        for mount in [
            layout::SALES_TREND,
            layout::SEGMENT_TREEMAP,
            layout::RANKING_MATRIX,
            layout::MARKET_GRID,
            layout::FISCAL_YEAR_FILTER,
        ] {
            assert!(html.contains(&format!("id=\"{}\"", mount)), "missing {}", mount);
        }
    }

    #[test]
    fn test_script_safe_json() {
        assert_eq!(script_safe_json(r#"["</script>"]"#), r#"["\u003c/script>"]"#);
    }
}
