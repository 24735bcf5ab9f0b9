//! Askama filters for the admin templates.

use std::fmt::Display;

/// Current year, for the footer copyright line in `base.html`.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use askama::Template;
    use chrono::Datelike;

    use crate::filters;

    #[derive(Template)]
    #[template(source = r#"{{ ""|current_year }}"#, ext = "txt")]
    struct YearTemplate;

    #[test]
    fn test_current_year_matches_clock() {
        let rendered = YearTemplate.render().unwrap();
        assert_eq!(rendered, chrono::Utc::now().year().to_string());
    }
}
