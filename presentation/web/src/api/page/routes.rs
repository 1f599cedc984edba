use poem::handler;
use poem::web::{Data, Html};

use crate::config::groq_config::MISSING_KEY_WARNING;

const LAYOUT: &str = include_str!("../../../static/index.html");
const FORM: &str = include_str!("../../../static/form.html");

/// The single page of the app, rendered once at startup.
#[derive(Debug, Clone)]
pub struct IndexPage {
    html: String,
}

impl IndexPage {
    /// Without a credential the form is replaced by a warning, so the page
    /// cannot trigger any humanize request.
    pub fn render(credential_configured: bool, logo_data_uri: Option<&str>) -> Self {
        let logo = logo_data_uri
            .map(|uri| {
                format!(
                    r#"<div class="center-logo"><img src="{}" alt="GenCode Labs Logo" width="150"></div>"#,
                    uri
                )
            })
            .unwrap_or_default();

        let content = if credential_configured {
            FORM.to_string()
        } else {
            format!(r#"<div class="warning">{}</div>"#, MISSING_KEY_WARNING)
        };

        let html = LAYOUT
            .replace("{{logo}}", &logo)
            .replace("{{content}}", &content);

        Self { html }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

#[handler]
pub fn index(page: Data<&IndexPage>) -> Html<String> {
    Html(page.html().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_form_when_credential_is_configured() {
        let page = IndexPage::render(true, None);

        assert!(page.html().contains("AI Content Humanizer"));
        assert!(page.html().contains("Paste the AI-generated content here:"));
        assert!(page.html().contains("Humanize Content"));
        assert!(!page.html().contains(MISSING_KEY_WARNING));
        assert!(!page.html().contains("{{"));
    }

    #[test]
    fn should_render_warning_instead_of_form_without_credential() {
        let page = IndexPage::render(false, None);

        assert!(page.html().contains(MISSING_KEY_WARNING));
        assert!(!page.html().contains("humanize-form\""));
    }

    #[test]
    fn should_embed_logo_when_available() {
        let page = IndexPage::render(true, Some("data:image/png;base64,AAAA"));

        assert!(page.html().contains(r#"<img src="data:image/png;base64,AAAA""#));
    }
}
