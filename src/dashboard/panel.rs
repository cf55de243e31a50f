//! Statistics Panel
//!
//! Card showing the selected area's comparison to the national rate, change
//! since the previous period and best period.

use leptos::*;

use crate::data::AreaSummary;

/// Render the output panel for an area summary
pub fn render_output_panel(summary: &AreaSummary) -> String {
    let summary = summary.clone();
    leptos::ssr::render_to_string(move || view! { <OutputPanel summary=summary /> }).to_string()
}

/// Output panel component
#[component]
pub fn OutputPanel(summary: AreaSummary) -> impl IntoView {
    let formatted = summary.formatted();

    view! {
        <div>
            <h4 id="card_name">{summary.area}</h4>
            <div class="card bg-dark text-light">
                <div class="card-body">
                    <br/>
                    <h6 class="card-title">{format!("Compared to {}:", summary.national_area)}</h6>
                    <h4 class="card-text text-light">{formatted.compare_to_eng}</h4>
                    <br/>
                    <h6 class="card-title">"Compared to previous year:"</h6>
                    <h4 class="card-text text-light">{formatted.change_area}</h4>
                    <br/>
                    <h6 class="card-title">"Best period:"</h6>
                    <h4 class="card-text text-light">{formatted.best_period}</h4>
                    <h6 class="card-title text-light">
                        {format!("with recycling rate {}", formatted.best_rate)}
                    </h6>
                    <br/>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Period, RecyclingData, RecyclingRecord};

    /// Whether a card value heading shows `value` (slashes may be entity-escaped)
    fn shows(html: &str, value: &str) -> bool {
        html.contains(&format!(">{}</h4>", value))
            || html.contains(&format!(">{}</h4>", value.replace('/', "&#x2F;")))
    }

    #[test]
    fn test_panel_for_known_area() {
        let data = RecyclingData::bundled("England").unwrap();
        let summary = data.process_data_for_area("Bexley").unwrap();
        let html = render_output_panel(&summary);

        assert!(html.contains(r#"id="card_name""#));
        assert!(html.contains("Bexley</h4>"));
        assert!(html.contains("Compared to England:"));
        assert!(html.contains("Compared to previous year:"));
        assert!(shows(&html, "9%"));
        assert!(shows(&html, "2016/17"));
        assert!(html.contains("with recycling rate 54%"));
    }

    #[test]
    fn test_panel_escapes_area_name() {
        let data = RecyclingData::from_records(
            vec![
                RecyclingRecord::new("England", Period::parse("2018/19").unwrap(), 43.5),
                RecyclingRecord::new("<b>Odd</b>", Period::parse("2018/19").unwrap(), 20.0),
            ],
            "England",
        )
        .unwrap();

        let summary = data.process_data_for_area("<b>Odd</b>").unwrap();
        let html = render_output_panel(&summary);

        assert!(html.contains("&lt;b&gt;Odd"));
        assert!(!html.contains("<b>Odd</b>"));
        // single observation
        assert!(shows(&html, "n/a"));
    }
}
