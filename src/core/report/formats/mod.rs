//! Report format implementations
//!
//! Provides exporters for different report formats: Markdown, HTML, and PDF.

pub mod html;
pub mod markdown;
pub mod pdf;

pub use html::HtmlReporter;
pub use markdown::MarkdownReporter;
pub use pdf::PdfReporter;

use super::ReportGenerator;
use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Markdown format with Mermaid charts
    Markdown,
    /// Self-contained HTML with inline SVG charts
    Html,
    /// PDF format (generated from HTML)
    #[default]
    Pdf,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Pdf => "pdf",
        }
    }

    /// Reporter that writes this format
    ///
    /// `pdf_converter` only matters for PDF; without it a browser is
    /// auto-detected.
    #[must_use]
    pub fn reporter(self, pdf_converter: Option<&str>) -> Box<dyn ReportGenerator> {
        match self {
            Self::Markdown => Box::new(MarkdownReporter::new()),
            Self::Html => Box::new(HtmlReporter::new()),
            Self::Pdf => Box::new(
                pdf_converter.map_or_else(PdfReporter::new, PdfReporter::with_converter),
            ),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            "pdf" => Ok(Self::Pdf),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
            Self::Pdf => write!(f, "pdf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("MD".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("htm".parse::<ReportFormat>(), Ok(ReportFormat::Html));
        assert_eq!("pdf".parse::<ReportFormat>(), Ok(ReportFormat::Pdf));
        assert!("docx".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_default_is_pdf() {
        assert_eq!(ReportFormat::default(), ReportFormat::Pdf);
        assert_eq!(ReportFormat::default().extension(), "pdf");
    }
}
