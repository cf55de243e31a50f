//! Page Layout
//!
//! Static dashboard page: Bootstrap fluid container with the area selector
//! and statistics panel on the left and the chart tabs on the right. Initial
//! figures and panel are embedded; the inline script calls the callback
//! endpoints when a selector changes.

use leptos::*;

use super::panel::OutputPanel;
use crate::data::AreaSummary;

/// Bootstrap LITERA theme
pub const STYLESHEET_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootswatch@5.3.3/dist/litera/bootstrap.min.css";

pub const BOOTSTRAP_JS_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

pub const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub const PAGE_TITLE: &str = "Waste and recycling";

pub const LEAD_TEXT: &str =
    "Turn London waste into an opportunity – by reducing waste, reusing and recycling more of it.";

/// Everything the page needs for its first render
#[derive(Debug, Clone)]
pub struct PageContent {
    pub areas: Vec<String>,
    pub selected_area: String,
    pub periods: Vec<String>,
    pub selected_period: String,
    /// Statistics for `selected_area`
    pub summary: AreaSummary,
    /// Recycling-by-area figure JSON
    pub area_figure: String,
    /// Recycling-by-year figure JSON
    pub year_figure: String,
}

impl PageContent {
    /// Render the full HTML document
    pub fn render(self) -> String {
        let html = leptos::ssr::render_to_string(move || view! { <DashboardPage content=self /> });
        format!("<!DOCTYPE html>\n{}", html)
    }
}

/// Dashboard page component
#[component]
pub fn DashboardPage(content: PageContent) -> impl IntoView {
    let PageContent {
        areas,
        selected_area,
        periods,
        selected_period,
        summary,
        area_figure,
        year_figure,
    } = content;

    let area_options = areas
        .into_iter()
        .map(|area| {
            let selected = area == selected_area;
            let value = area.clone();
            view! { <option value=value selected=selected>{area}</option> }
        })
        .collect_view();

    let period_options = periods
        .into_iter()
        .map(|period| {
            let selected = period == selected_period;
            let value = period.clone();
            view! { <option value=value selected=selected>{period}</option> }
        })
        .collect_view();

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{PAGE_TITLE}</title>
                <link rel="stylesheet" href=STYLESHEET_URL/>
                <script src=PLOTLY_JS_URL></script>
            </head>
            <body>
                <div class="container-fluid">
                    <br/>
                    <h1>{PAGE_TITLE}</h1>
                    <p class="lead">{LEAD_TEXT}</p>
                    <div class="row">
                        <div class="col-3">
                            <div class="mb-3">
                                <h4>"Select Area"</h4>
                                <select id="area_select" class="form-select">
                                    {area_options}
                                </select>
                            </div>
                            <br/>
                            <div id="output-panel">
                                <OutputPanel summary=summary/>
                            </div>
                        </div>
                        <div class="col-9">
                            <ul class="nav nav-pills" role="tablist">
                                <TabLink tab_id="area-tab" pane="area-pane" label="Recycling by area" active=true/>
                                <TabLink tab_id="year-tab" pane="year-pane" label="Recycling by year" active=false/>
                            </ul>
                            <div class="tab-content">
                                <div class="tab-pane fade show active" id="area-pane" role="tabpanel">
                                    <div id="recycle-chart" style="height: 500px"></div>
                                </div>
                                <div class="tab-pane fade" id="year-pane" role="tabpanel">
                                    <div class="mt-3 col-3">
                                        <select id="period_select" class="form-select">
                                            {period_options}
                                        </select>
                                    </div>
                                    <div id="recycle-year" style="height: 500px"></div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
                <script id="recycle-chart-figure" type="application/json" inner_html=script_safe(&area_figure)></script>
                <script id="recycle-year-figure" type="application/json" inner_html=script_safe(&year_figure)></script>
                <script src=BOOTSTRAP_JS_URL></script>
                <script inner_html=CALLBACK_SCRIPT></script>
            </body>
        </html>
    }
}

/// Pill that switches between the chart panes
#[component]
fn TabLink(
    tab_id: &'static str,
    pane: &'static str,
    label: &'static str,
    active: bool,
) -> impl IntoView {
    let class = if active { "nav-link active" } else { "nav-link" };

    view! {
        <li class="nav-item" role="presentation">
            <button
                class=class
                id=tab_id
                data-bs-toggle="pill"
                data-bs-target=format!("#{}", pane)
                type="button"
                role="tab"
            >
                {label}
            </button>
        </li>
    }
}

/// Escape JSON for embedding in a script element
///
/// `<`, `>` and `&` only occur inside JSON strings, where the `\u` escapes
/// decode to the same characters.
fn script_safe(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wires the selectors to the callback endpoints
const CALLBACK_SCRIPT: &str = r#"
(function () {
  function embedded(id) {
    return JSON.parse(document.getElementById(id).textContent);
  }
  function draw(target, figure) {
    Plotly.react(target, figure.data, figure.layout, {responsive: true});
  }
  function fetchFigure(url, target) {
    fetch(url)
      .then(function (r) { if (!r.ok) { throw new Error(r.statusText); } return r.json(); })
      .then(function (figure) { draw(target, figure); })
      .catch(function (err) { console.error(err); });
  }

  draw("recycle-chart", embedded("recycle-chart-figure"));
  draw("recycle-year", embedded("recycle-year-figure"));

  document.getElementById("area_select").addEventListener("change", function (e) {
    var area = encodeURIComponent(e.target.value);
    fetch("/api/v1/callbacks/output-panel?area=" + area)
      .then(function (r) { if (!r.ok) { throw new Error(r.statusText); } return r.text(); })
      .then(function (html) { document.getElementById("output-panel").innerHTML = html; })
      .catch(function (err) { console.error(err); });
    fetchFigure("/api/v1/callbacks/recycle-chart?area=" + area, "recycle-chart");
  });

  document.getElementById("period_select").addEventListener("change", function (e) {
    var period = encodeURIComponent(e.target.value);
    fetchFigure("/api/v1/callbacks/recycle-year?period=" + period, "recycle-year");
  });

  document.getElementById("year-tab").addEventListener("shown.bs.tab", function () {
    Plotly.Plots.resize("recycle-year");
  });
})();
"#;
