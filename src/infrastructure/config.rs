use serde::Deserialize;

pub const DEFAULT_CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub page: PageSettings,
    pub navigation: NavigationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageSettings {
    pub title: String,
    pub chart_js_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NavigationSettings {
    pub default_tab: String,
    pub fiscal_years: Vec<String>,
    pub default_fiscal_year: String,
}

/// Built-in defaults overlaid by `config/dashboard.*` when that file exists
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = with_defaults(config::Config::builder())?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(builder
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("page.title", "Sales Performance Dashboard")?
        .set_default("page.chart_js_url", DEFAULT_CHART_JS_URL)?
        .set_default("navigation.default_tab", "executive")?
        .set_default("navigation.fiscal_years", vec!["FY2020", "FY2021"])?
        .set_default("navigation.default_fiscal_year", "FY2021")?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = with_defaults(config::Config::builder())
            .unwrap()
            .build()
            .unwrap();
        let config: DashboardConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.page.chart_js_url, DEFAULT_CHART_JS_URL);
        assert_eq!(config.navigation.default_tab, "executive");
        assert_eq!(config.navigation.fiscal_years, vec!["FY2020", "FY2021"]);
        assert_eq!(config.navigation.default_fiscal_year, "FY2021");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [page]
            title = "Regional Sales"

            [navigation]
            default_tab = "customers"
        "#;
        let settings = with_defaults(config::Config::builder())
            .unwrap()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap();
        let config: DashboardConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.page.title, "Regional Sales");
        assert_eq!(config.navigation.default_tab, "customers");
        assert_eq!(config.server.bind, "0.0.0.0:8080");
    }
}
