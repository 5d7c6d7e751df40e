//! PDF export
//!
//! The rendered catalog markup is wrapped in a standalone print document
//! and posted to the backend, which answers with the PDF bytes.

use tracing::{debug, warn};

use crate::api::{CatalogApi, PdfExportRequest};
use crate::domain::{CatalogResult, ValidationError, ViewMode};
use crate::guards;
use crate::notify::{Notification, Notifier};
use crate::session::SessionStore;

/// Container every exported document must carry
pub const PDF_ROOT_MARKER: &str = r#"id="pdf-root""#;
/// Page color used when the catalog has none
pub const FALLBACK_PAGE_BACKGROUND: &str = "#f8fafc";

/// Relative asset prefixes rewritten to absolute URLs
const ASSET_PREFIXES: [&str; 2] = ["../media/", "/_nextjs_font/"];

const PRINT_STYLES: &str = r#"
      #pdf-root { width: 980px; margin: 0 auto; padding: 24px; }
      .pdf-card-list { display: flex; flex-direction: column; gap: 18px; }
      .pdf-card {
        border: 2px solid rgba(15, 23, 42, 0.18);
        border-radius: 18px;
        padding: 16px;
        background: var(--pdf-card-bg);
      }
      .pdf-card-body { display: grid; grid-template-columns: 1fr 280px; gap: 18px; align-items: center; }
      .pdf-card-title { font-size: 20px; font-weight: 700; margin-bottom: 6px; color: rgb(15, 23, 42); }
      .pdf-card-desc { font-size: 13px; color: rgb(71, 85, 105); line-height: 1.5; }
      .pdf-card-price, .pdf-checklist-price {
        display: inline-block;
        padding: 6px 12px;
        border-radius: 10px;
        border: 2px solid rgba(15, 23, 42, 0.3);
        font-weight: 700;
        white-space: nowrap;
      }
      .pdf-card-image { width: 280px; height: 280px; border-radius: 16px; overflow: hidden; background: #fff; }
      .pdf-card-image img, .pdf-checklist-thumb img { width: 100%; height: 100%; object-fit: cover; display: block; }
      .pdf-checklist {
        display: flex;
        flex-direction: column;
        gap: 12px;
        padding: 8px;
        border: 2px solid rgba(15, 23, 42, 0.18);
        border-radius: 18px;
        background: var(--pdf-card-bg);
      }
      .pdf-checklist-header { padding: 8px 12px 12px; border-bottom: 2px dashed rgba(15, 23, 42, 0.18); }
      .pdf-checklist-title { font-size: 22px; font-weight: 700; margin-bottom: 4px; }
      .pdf-checklist-item {
        display: grid;
        grid-template-columns: 72px 1fr auto;
        gap: 12px;
        align-items: center;
        padding: 10px 12px;
      }
      .pdf-checklist-thumb { width: 64px; height: 64px; border-radius: 12px; overflow: hidden; background: #fff; }
      .pdf-table { width: 100%; border-collapse: collapse; background: var(--pdf-card-bg); }
      .pdf-table th, .pdf-table td { padding: 8px 12px; border-bottom: 1px solid rgba(15, 23, 42, 0.18); text-align: left; }
      @page { size: A4; margin: 12mm; }
      @media print {
        body { zoom: 0.9; }
        * { -webkit-print-color-adjust: exact; print-color-adjust: exact; box-shadow: none !important; }
        img { max-width: 100%; height: auto; }
        .pdf-card, .pdf-checklist-item, .pdf-table tr { break-inside: avoid; page-break-inside: avoid; }
      }
"#;

/// Inputs of the print document
#[derive(Debug, Clone, Copy)]
pub struct PdfTemplate<'a> {
    /// CSS collected from the page
    pub styles: &'a str,
    pub html_content: &'a str,
    pub base_href: &'a str,
    pub page_background: &'a str,
    pub component_background: &'a str,
}

pub fn build_catalog_pdf_html(template: &PdfTemplate<'_>) -> String {
    let mut html = String::with_capacity(
        PRINT_STYLES.len() + template.styles.len() + template.html_content.len() + 512,
    );
    html.push_str("<!doctype html>\n<html>\n  <head>\n    <meta charset=\"utf-8\" />\n");
    html.push_str(&format!("    <base href=\"{}\" />\n    <style>\n", template.base_href));
    html.push_str(template.styles);
    html.push_str(&format!(
        "\n      body {{ background: {}; }}\n      #pdf-root {{ --pdf-card-bg: {}; }}",
        template.page_background, template.component_background
    ));
    html.push_str(PRINT_STYLES);
    html.push_str("    </style>\n  </head>\n  <body>\n    <div id=\"pdf-root\">\n");
    html.push_str(template.html_content);
    html.push_str("\n    </div>\n  </body>\n</html>\n");
    html
}

/// What the page hands over for an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfSource {
    /// Inner HTML of the hidden print view
    pub html_content: String,
    pub styles: String,
    /// Page origin, e.g. `http://localhost:8080`
    pub base_href: String,
    pub page_background: Option<String>,
    pub component_background: String,
    pub view_mode: ViewMode,
}

/// A checked export, ready to post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfExport {
    pub token: String,
    pub catalog_id: String,
    pub request: PdfExportRequest,
}

/// Downloaded document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDownload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub fn pdf_file_name(catalog_id: &str) -> String {
    format!("catalogo-{catalog_id}.pdf")
}

pub fn prepare_pdf_export(
    session: &dyn SessionStore,
    catalog_id: Option<&str>,
    source: &PdfSource,
) -> CatalogResult<PdfExport> {
    let token = guards::require_token(session)?;
    let catalog_id = guards::require_catalog_id(catalog_id)?;
    let html_content = source.html_content.trim();
    if html_content.is_empty() {
        return Err(ValidationError::MissingHtml.into());
    }

    let base_href = source.base_href.trim_end_matches('/');
    let mut html = build_catalog_pdf_html(&PdfTemplate {
        styles: &source.styles,
        html_content,
        base_href,
        page_background: source.page_background.as_deref().unwrap_or(FALLBACK_PAGE_BACKGROUND),
        component_background: &source.component_background,
    });
    for prefix in ASSET_PREFIXES {
        let absolute = format!("{base_href}/{}", prefix.trim_start_matches("../").trim_start_matches('/'));
        html = html.replace(prefix, &absolute);
    }

    if !html.contains(PDF_ROOT_MARKER) {
        return Err(ValidationError::MissingPdfRoot.into());
    }

    debug!(catalog_id = %catalog_id, size = html.len(), "pdf html prepared");
    Ok(PdfExport { token, catalog_id, request: PdfExportRequest { html, view_mode: source.view_mode } })
}

/// Prepare, render and return the file to download
pub async fn export_pdf<A>(
    api: &A,
    session: &dyn SessionStore,
    catalog_id: Option<&str>,
    source: &PdfSource,
    notifier: &dyn Notifier,
) -> CatalogResult<PdfDownload>
where
    A: CatalogApi + ?Sized,
{
    let export = match prepare_pdf_export(session, catalog_id, source) {
        Ok(export) => export,
        Err(err) => {
            warn!(error = %err, "pdf export rejected");
            notifier.notify(Notification::from_error("Could not export", &err));
            return Err(err);
        }
    };

    notifier.notify(Notification::success("Exporting PDF...", "This can take a few seconds."));
    match api.export_pdf(&export.token, &export.catalog_id, &export.request).await {
        Ok(bytes) => {
            notifier.notify(Notification::success("PDF ready", "The catalog was downloaded."));
            Ok(PdfDownload { file_name: pdf_file_name(&export.catalog_id), bytes })
        }
        Err(err) => {
            warn!(catalog_id = %export.catalog_id, error = %err, "pdf export failed");
            notifier.notify(Notification::from_error("Could not export", &err));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CatalogError;
    use crate::session::MemorySessionStore;
    use crate::testing::{FakeApi, RecordingNotifier};

    fn source(content: &str) -> PdfSource {
        PdfSource {
            html_content: content.to_string(),
            styles: ".title { font: url(/_nextjs_font/a.woff2); }".to_string(),
            base_href: "http://app.test/".to_string(),
            page_background: None,
            component_background: "#F2BADE".to_string(),
            view_mode: ViewMode::Checklist,
        }
    }

    #[test]
    fn test_template_wraps_content() {
        let html = build_catalog_pdf_html(&PdfTemplate {
            styles: "",
            html_content: "<p>Lamp</p>",
            base_href: "http://app.test",
            page_background: "#fff",
            component_background: "#000",
        });
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains(PDF_ROOT_MARKER));
        assert!(html.contains("<base href=\"http://app.test\" />"));
        assert!(html.contains("--pdf-card-bg: #000;"));
        assert!(html.contains("<p>Lamp</p>"));
    }

    #[test]
    fn test_prepare_rewrites_assets() {
        let content = r#"<img src="../media/lamp.png">"#;
        let export = prepare_pdf_export(&MemorySessionStore::with_token("t"), Some("c1"), &source(content)).unwrap();

        assert!(export.request.html.contains(r#"src="http://app.test/media/lamp.png""#));
        assert!(export.request.html.contains("url(http://app.test/_nextjs_font/a.woff2)"));
        assert!(export.request.html.contains(&format!("background: {FALLBACK_PAGE_BACKGROUND};")));
        assert_eq!(export.request.view_mode, ViewMode::Checklist);
    }

    #[test]
    fn test_prepare_guards() {
        let session = MemorySessionStore::with_token("t");
        assert_eq!(
            prepare_pdf_export(&MemorySessionStore::new(), Some("c1"), &source("<p/>")),
            Err(CatalogError::Unauthenticated)
        );
        assert_eq!(
            prepare_pdf_export(&session, None, &source("<p/>")),
            Err(CatalogError::NotFound("catalog".to_string()))
        );
        assert_eq!(
            prepare_pdf_export(&session, Some("c1"), &source("  \n ")),
            Err(ValidationError::MissingHtml.into())
        );
    }

    #[tokio::test]
    async fn test_export_returns_named_file() {
        let api = FakeApi::default();
        let notifier = RecordingNotifier::default();

        let download = export_pdf(&api, &MemorySessionStore::with_token("t"), Some("42"), &source("<p/>"), &notifier)
            .await
            .unwrap();

        assert_eq!(download.file_name, "catalogo-42.pdf");
        assert!(download.bytes.starts_with(b"%PDF"));
        assert_eq!(api.pdf_requests()[0].0, "42");
        assert_eq!(notifier.titles(), vec!["Exporting PDF...".to_string(), "PDF ready".to_string()]);
    }

    #[tokio::test]
    async fn test_export_failure_is_reported() {
        let api = FakeApi::default();
        api.fail_pdf("Renderer offline");
        let notifier = RecordingNotifier::default();

        let result = export_pdf(&api, &MemorySessionStore::with_token("t"), Some("42"), &source("<p/>"), &notifier).await;

        assert!(result.is_err());
        assert_eq!(notifier.last().unwrap().description, "Renderer offline");
    }
}
