//! Report generation

pub mod generator;

use crate::models::ConversionReport;
use anyhow::Result;

pub fn generate_report(report: &ConversionReport) -> Result<String> {
    generator::generate_markdown_report(report)
}
