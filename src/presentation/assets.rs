//! Inline CSS and the browser-side script that draws charts and toggles tabs.
//!
//! The script reads the chart payloads embedded in the page, hands each one to
//! Chart.js, toggles tabs locally, and asks the navigation API to acknowledge
//! fiscal-year clicks.

pub const DASHBOARD_CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; background: #f4f6f9; color: #1f2933; }
header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background: #003366; color: #fff; }
header h1 { font-size: 1.4rem; }
#fy-filter button { border: 1px solid #fff; background: transparent; color: #fff; padding: 0.3rem 0.8rem; cursor: pointer; }
#fy-filter button.active { background: #fff; color: #003366; }
nav { display: flex; gap: 0.5rem; padding: 0.75rem 2rem; background: #fff; border-bottom: 1px solid #d9e2ec; }
.nav-btn { border: none; background: none; padding: 0.5rem 1rem; cursor: pointer; color: #52606d; }
.nav-btn.active { color: #003366; border-bottom: 3px solid #0066CC; font-weight: 600; }
.dashboard-page { display: none; padding: 1.5rem 2rem; }
.dashboard-page.active { display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 1.25rem; }
.panel { background: #fff; border-radius: 8px; padding: 1rem; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08); }
.panel h2 { font-size: 1rem; margin-bottom: 0.75rem; }
.chart-box { position: relative; height: 320px; }
.kpi-row { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; grid-column: 1 / -1; }
.kpi-card { background: #fff; border-radius: 8px; padding: 1rem; border-left: 4px solid #0066CC; }
.kpi-card .kpi-value { font-size: 1.6rem; font-weight: 700; }
.kpi-card .kpi-note { font-size: 0.8rem; color: #7b8794; }
.matrix-table { width: 100%; border-collapse: collapse; }
.matrix-table th, .matrix-table td { padding: 0.5rem; border-bottom: 1px solid #e4e7eb; text-align: left; }
.rank-1 { background: #fff4cc; }
.rank-2 { background: #eef0f2; }
.rank-3 { background: #f6e3d1; }
.market-grid { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.market-bubble { border-radius: 999px; padding: 0.75rem 1.25rem; background: #e4e7eb; text-align: center; }
.market-bubble.highlight { background: #00CC66; color: #fff; }
.market-name { font-weight: 600; }
"#;

pub const DASHBOARD_JS: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
    const payloads = JSON.parse(document.getElementById('chart-payloads').textContent);
    payloads.forEach(function (chart) {
        new Chart(document.getElementById(chart.mount).getContext('2d'), chart.config);
    });

    const navButtons = document.querySelectorAll('.nav-btn');
    const pages = document.querySelectorAll('.dashboard-page');
    navButtons.forEach(function (btn) {
        btn.addEventListener('click', function () {
            navButtons.forEach(function (b) { b.classList.remove('active'); });
            pages.forEach(function (p) { p.classList.remove('active'); });
            btn.classList.add('active');
            const tabId = btn.getAttribute('data-tab');
            document.getElementById(tabId).classList.add('active');
        });
    });

    const fyButtons = document.querySelectorAll('#fy-filter button');
    fyButtons.forEach(function (btn) {
        btn.addEventListener('click', function () {
            fyButtons.forEach(function (b) { b.classList.remove('active'); });
            btn.classList.add('active');
            const value = btn.getAttribute('data-value');
            const fallback = 'Fiscal Year set to ' + value + '.';
            fetch('/api/navigation/fiscal-year/' + encodeURIComponent(value), { method: 'POST' })
                .then(function (r) {
                    return r.json().then(function (body) {
                        alert(r.ok ? body.message : (body.error || fallback));
                    }, function () {
                        alert(fallback);
                    });
                })
                .catch(function () { alert(fallback); });
        });
    });
});
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fiscal_year_alert_checks_response_status() {
        assert!(DASHBOARD_JS.contains("alert(r.ok ? body.message : (body.error || fallback))"));
        assert!(DASHBOARD_JS.contains(".catch(function () { alert(fallback); })"));
        assert!(!DASHBOARD_JS.contains("alert(ack.message)"));
    }

    #[test]
    fn test_tab_clicks_stay_in_the_browser() {
        assert!(!DASHBOARD_JS.contains("/api/navigation/tab/"));
    }
}
