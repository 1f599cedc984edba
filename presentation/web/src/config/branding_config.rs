use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const DEFAULT_LOGO_PATH: &str = "GenCode Labs.png";

/// Optional logo shown at the top of the page.
#[derive(Debug, Clone, Default)]
pub struct BrandingConfig {
    /// `data:` URI of the logo image, if one could be read.
    pub logo_data_uri: Option<String>,
}

impl BrandingConfig {
    /// Environment variables:
    /// - LOGO_PATH: image embedded in the page (default: "GenCode Labs.png").
    ///   A missing or unreadable file leaves the page without a logo.
    pub fn from_env() -> Self {
        let path = std::env::var("LOGO_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOGO_PATH));
        Self::from_path(&path)
    }

    pub fn from_path(path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(bytes) => Self {
                logo_data_uri: Some(to_data_uri(path, &bytes)),
            },
            Err(err) => {
                tracing::info!("No logo loaded from {}: {}", path.display(), err);
                Self::default()
            }
        }
    }
}

fn mime_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

fn to_data_uri(path: &Path, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type_for(path), STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_encode_logo_as_png_data_uri() {
        let uri = to_data_uri(Path::new("GenCode Labs.png"), b"png-bytes");
        assert_eq!(uri, "data:image/png;base64,cG5nLWJ5dGVz");
    }

    #[test]
    fn should_pick_mime_type_from_extension() {
        assert_eq!(mime_type_for(Path::new("logo.JPG")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("logo.svg")), "image/svg+xml");
        assert_eq!(mime_type_for(Path::new("logo")), "image/png");
    }

    #[test]
    fn should_skip_logo_when_file_is_missing() {
        let config = BrandingConfig::from_path(Path::new("does/not/exist.png"));
        assert!(config.logo_data_uri.is_none());
    }
}
