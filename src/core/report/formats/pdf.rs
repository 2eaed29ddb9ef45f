//! PDF report generator via HTML-to-PDF conversion
//!
//! Renders the HTML slip to a temporary file and prints it to PDF with
//! headless Chrome/Chromium or a configured converter.

use super::html::HtmlReporter;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::debug;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

/// PDF report generator using HTML-to-PDF conversion
pub struct PdfReporter {
    /// Optional custom PDF converter command
    converter: Option<String>,
}

impl PdfReporter {
    /// Create a new PDF reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { converter: None }
    }

    /// Create a PDF reporter with a custom converter
    #[must_use]
    pub fn with_converter(converter: &str) -> Self {
        Self {
            converter: Some(converter.to_owned()),
        }
    }

    /// Detect available Chrome/Chromium browser
    fn detect_chrome() -> Option<String> {
        let candidates = [
            "google-chrome",
            "chrome",
            "chromium",
            "chromium-browser",
            "google-chrome-stable",
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe",
            "C:\\Program Files (x86)\\Google\\Chrome\\Application\\chrome.exe",
        ];

        candidates.into_iter().find_map(|candidate| {
            Command::new(candidate)
                .arg("--version")
                .output()
                .ok()
                .filter(|output| output.status.success())
                .map(|_| candidate.to_owned())
        })
    }

    /// Print an HTML file to PDF with a Chrome-compatible browser
    fn html_to_pdf_chrome(
        chrome_cmd: &str,
        html_path: &Path,
        pdf_path: &Path,
    ) -> Result<(), Box<dyn Error>> {
        debug!("Converting {} with {chrome_cmd}", html_path.display());

        let status = Command::new(chrome_cmd)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--run-all-compositor-stages-before-draw")
            .arg("--no-pdf-header-footer")
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(format!("file://{}", html_path.canonicalize()?.display()))
            .stderr(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|e| format!("Failed to run PDF converter '{chrome_cmd}': {e}"))?;

        if !status.success() {
            return Err(format!("PDF conversion with '{chrome_cmd}' failed ({status})").into());
        }
        if !pdf_path.exists() {
            return Err(format!("PDF converter '{chrome_cmd}' did not produce a file").into());
        }

        Ok(())
    }

    /// Convert HTML report to PDF
    fn convert_html_to_pdf(&self, html_path: &Path, pdf_path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(converter) = &self.converter {
            return Self::html_to_pdf_chrome(converter, html_path, pdf_path);
        }

        if let Some(chrome) = Self::detect_chrome() {
            return Self::html_to_pdf_chrome(&chrome, html_path, pdf_path);
        }

        Err("PDF conversion failed: Chrome/Chromium not found.\n\
            \n\
            To generate PDF result slips, install Chrome or Chromium:\n\
            \n\
            • Ubuntu/Debian:  sudo apt install chromium-browser\n\
            • Fedora/RHEL:    sudo dnf install chromium\n\
            • macOS:          brew install --cask google-chrome\n\
            • Windows:        Download from https://www.google.com/chrome/\n\
            \n\
            Alternatively, point the planner at a browser:\n\
              cgpa config set report.pdf_converter /path/to/chrome\n\
            \n\
            or export the slip as HTML or Markdown with --format.\n\
            "
        .into())
    }
}

impl Default for PdfReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for PdfReporter {
    /// Render the HTML slip to a temporary file and convert it
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let html_path =
            std::env::temp_dir().join(format!("cgpa_result_slip_{}.html", std::process::id()));

        fs::write(&html_path, self.render(ctx)?)?;
        let result = self.convert_html_to_pdf(&html_path, output_path);
        let _ = fs::remove_file(&html_path);
        result
    }

    /// The HTML document that gets printed to PDF
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        HtmlReporter::new().render(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::GradeRecord;
    use tempfile::TempDir;

    #[test]
    fn test_render_returns_printable_html() {
        let records = vec![GradeRecord::new("CVE311", 3, 75.0).unwrap()];
        let ctx = ReportContext::new("Ada", "", &records);
        let output = PdfReporter::new().render(&ctx).unwrap();
        assert!(output.contains("<!DOCTYPE html>"));
        assert!(output.contains("CVE311"));
    }

    #[test]
    fn test_missing_converter_is_an_error() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("result_slip.pdf");
        let reporter = PdfReporter::with_converter("/nonexistent/cgpa-test-browser");
        let ctx = ReportContext::new("Ada", "", &[]);

        let err = reporter.generate(&ctx, &output).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/cgpa-test-browser"));
        assert!(!output.exists());
    }
}
