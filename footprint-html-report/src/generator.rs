//! HTML report generator implementation.

use footprint::{Catalog, ColorHint, Results, Suggestion};

/// Options for HTML generation.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Title for the HTML document.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "footprint".to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the report fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

/// Render results as an HTML report.
///
/// The catalog supplies the maximum score and the order of the breakdown
/// rows.
pub fn to_html(results: &Results, catalog: &Catalog, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        if let Some(title) = &options.title {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!("<section class=\"{prefix}-report\">\n"));

    // Title
    if let Some(title) = &options.title {
        html.push_str(&format!(
            "  <h1 class=\"{prefix}-title\">{}</h1>\n",
            escape_html(title)
        ));
    }

    html.push_str(&generate_summary(results, catalog, prefix));
    html.push_str(&generate_breakdown(results, catalog, prefix));

    // Suggestions
    html.push_str(&format!("  <div class=\"{prefix}-suggestions\">\n"));
    html.push_str("    <h2>Your Action Plan</h2>\n");
    for suggestion in &results.suggestions {
        html.push_str(&generate_suggestion(suggestion, prefix));
    }
    html.push_str("  </div>\n");

    html.push_str(&format!(
        "  <p class=\"{prefix}-share\">{}</p>\n",
        escape_html(&results.share_text(catalog.max_score()))
    ));

    html.push_str("</section>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Score gauge, tier and tier message.
fn generate_summary(results: &Results, catalog: &Catalog, prefix: &str) -> String {
    let max = catalog.max_score();
    let gauge = ColorHint::for_share_of_max(results.total_score, max);
    let category = &results.result_category;

    let mut html = String::new();
    html.push_str(&format!(
        "  <div class=\"{prefix}-summary {prefix}-{}\">\n",
        category.color_hint
    ));
    html.push_str(&format!(
        "    <div class=\"{prefix}-score {prefix}-gauge-{gauge}\">\
         <span class=\"{prefix}-total\">{}</span> / {max}</div>\n",
        results.total_score
    ));
    html.push_str(&format!(
        "    <div class=\"{prefix}-level\">{} impact</div>\n",
        escape_html(&title_case(category.level.as_str()))
    ));
    html.push_str(&format!(
        "    <p class=\"{prefix}-message\">{}</p>\n",
        escape_html(&category.message)
    ));
    html.push_str("  </div>\n");
    html
}

/// Per-category table in catalog order.
fn generate_breakdown(results: &Results, catalog: &Catalog, prefix: &str) -> String {
    let mut html = String::new();
    html.push_str(&format!("  <table class=\"{prefix}-breakdown\">\n"));
    html.push_str("    <thead><tr><th>Category</th><th>Score</th></tr></thead>\n");
    html.push_str("    <tbody>\n");

    for question in catalog.questions() {
        let id = question.id();
        let score = results.scores.get(id).unwrap_or(0);
        let band = ColorHint::for_category_score(score);
        html.push_str(&format!(
            "      <tr class=\"{prefix}-{band}\"><td>{}</td><td>{score}</td></tr>\n",
            escape_html(id.label())
        ));
    }

    html.push_str("    </tbody>\n");
    html.push_str("  </table>\n");
    html
}

/// One suggestion card.
fn generate_suggestion(suggestion: &Suggestion, prefix: &str) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "    <article class=\"{prefix}-card {prefix}-priority-{}\">\n",
        suggestion.priority
    ));
    html.push_str(&format!(
        "      <span class=\"{prefix}-category\">{}</span>\n",
        escape_html(&suggestion.category)
    ));
    html.push_str(&format!(
        "      <h3>{}</h3>\n",
        escape_html(&suggestion.title)
    ));
    html.push_str(&format!(
        "      <p>{}</p>\n",
        escape_html(&suggestion.description)
    ));

    if !suggestion.tips.is_empty() {
        html.push_str(&format!("      <ul class=\"{prefix}-tips\">\n"));
        for tip in &suggestion.tips {
            html.push_str(&format!("        <li>{}</li>\n", escape_html(tip)));
        }
        html.push_str("      </ul>\n");
    }

    html.push_str(&format!(
        "      <p class=\"{prefix}-impact\">Impact: {}</p>\n",
        escape_html(&suggestion.impact)
    ));
    html.push_str("    </article>\n");
    html
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-report {{
      max-width: 720px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{prefix}-summary {{
      text-align: center;
      padding: 1rem;
      border-radius: 8px;
      background: #f5f5f5;
    }}
    .{prefix}-score {{
      font-size: 2rem;
    }}
    .{prefix}-green {{
      color: #2e7d32;
    }}
    .{prefix}-yellow {{
      color: #f9a825;
    }}
    .{prefix}-red {{
      color: #c62828;
    }}
    .{prefix}-breakdown {{
      width: 100%;
      margin: 1rem 0;
      border-collapse: collapse;
    }}
    .{prefix}-breakdown td, .{prefix}-breakdown th {{
      padding: 0.25rem 0.5rem;
      border-bottom: 1px solid #ddd;
      text-align: left;
    }}
    .{prefix}-card {{
      margin: 1rem 0;
      padding: 1rem;
      border-left: 4px solid #ccc;
    }}
    .{prefix}-priority-high {{
      border-left-color: #c62828;
    }}
    .{prefix}-priority-medium {{
      border-left-color: #f9a825;
    }}
    .{prefix}-priority-low {{
      border-left-color: #2e7d32;
    }}
    .{prefix}-category {{
      font-size: 0.8rem;
      text-transform: uppercase;
      color: #666;
    }}
    .{prefix}-impact {{
      font-style: italic;
    }}
  </style>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint::{AnswerSet, ScoringConfig, assess, standard_catalog};

    fn results() -> (Results, Catalog) {
        let catalog = standard_catalog();
        let answers: AnswerSet = catalog
            .questions()
            .iter()
            .map(|q| (q.id(), q.max_value()))
            .collect();
        let results = assess(&catalog, &answers, &ScoringConfig::default()).unwrap();
        (results, catalog)
    }

    #[test]
    fn html_options_creation() {
        let _options = HtmlOptions::new();
        let _with_title = HtmlOptions::new().with_title("Test");
        let _with_styles = HtmlOptions::new().with_styles(true);
        let _full_doc = HtmlOptions::new().full_document(true);
        let _with_prefix = HtmlOptions::new().with_class_prefix("custom");
        let _default = HtmlOptions::default();
    }

    #[test]
    fn html_options_chaining() {
        let options = HtmlOptions::new()
            .with_title("My Footprint")
            .with_styles(true)
            .full_document(true)
            .with_class_prefix("eco");

        assert_eq!(options.title, Some("My Footprint".to_string()));
        assert!(options.include_styles);
        assert!(options.full_document);
        assert_eq!(options.class_prefix, "eco");
    }

    #[test]
    fn escapes_special_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn full_document_report() {
        let (results, catalog) = results();
        let html = to_html(&results, &catalog, &HtmlOptions::new().with_title("Q&A"));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Q&amp;A</title>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<span class=\"footprint-total\">51</span> / 51"));
        assert!(html.contains("High impact"));
        assert!(html.contains("Begin Your Sustainability Journey"));
        assert!(html.contains("I got a score of 51/51!"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn fragment_has_no_document_wrapper() {
        let (results, catalog) = results();
        let options = HtmlOptions::new()
            .full_document(false)
            .with_class_prefix("eco");
        let html = to_html(&results, &catalog, &options);

        assert!(!html.contains("<html"));
        assert!(!html.contains("<style>"));
        assert!(html.starts_with("<section class=\"eco-report\">"));
    }

    #[test]
    fn breakdown_rows_follow_catalog() {
        let (results, catalog) = results();
        let html = to_html(&results, &catalog, &HtmlOptions::new());

        let energy = html.find("<td>Energy</td>").unwrap();
        let digital = html.find("<td>Digital</td>").unwrap();
        assert!(energy < digital);
        assert!(html.contains("<tr class=\"footprint-red\"><td>Diet</td><td>6</td></tr>"));
    }

    #[test]
    fn apostrophes_in_titles_are_escaped() {
        let catalog = standard_catalog();
        let answers: AnswerSet = catalog
            .questions()
            .iter()
            .map(|q| (q.id(), q.min_value()))
            .collect();
        let results = assess(&catalog, &answers, &ScoringConfig::default()).unwrap();
        let html = to_html(&results, &catalog, &HtmlOptions::new());

        assert!(html.contains("You&#39;re a Sustainability Champion!"));
    }
}
