//! Chart generators for result slips
//!
//! Mermaid charts for Markdown, inline SVG for HTML and PDF.

pub mod mermaid;
pub mod svg;

pub use mermaid::MermaidGenerator;
pub use svg::SvgGenerator;
