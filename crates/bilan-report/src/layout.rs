//! Output locations and report settings.

use std::path::{Path, PathBuf};

/// Workbook file name.
pub const REPORT_FILE: &str = "financial_report.xlsx";

/// Margins chart file name.
pub const MARGINS_CHART_FILE: &str = "margins_by_period.png";

/// ROA/ROE chart file name.
pub const ROA_ROE_CHART_FILE: &str = "roa_roe_by_period.png";

/// Configuration for report output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Directory receiving all outputs; created if absent (default: ./out)
    pub outdir: PathBuf,

    /// Chart image size in pixels (default: 800x600)
    pub chart_size: (u32, u32),
}

impl ReportConfig {
    /// Creates a configuration writing into `outdir`.
    pub fn new(outdir: impl Into<PathBuf>) -> Self {
        Self {
            outdir: outdir.into(),
            ..Default::default()
        }
    }

    /// Returns the output paths under the configured directory.
    pub fn paths(&self) -> ReportPaths {
        ReportPaths::in_dir(&self.outdir)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            outdir: PathBuf::from("./out"),
            chart_size: (800, 600),
        }
    }
}

/// Paths of the three report artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// Excel workbook.
    pub workbook: PathBuf,
    /// Margins by period chart.
    pub margins_chart: PathBuf,
    /// ROA and ROE by period chart.
    pub roa_roe_chart: PathBuf,
}

impl ReportPaths {
    /// Lays out the standard file names under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            workbook: dir.join(REPORT_FILE),
            margins_chart: dir.join(MARGINS_CHART_FILE),
            roa_roe_chart: dir.join(ROA_ROE_CHART_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.outdir, PathBuf::from("./out"));
        assert_eq!(config.chart_size, (800, 600));
    }

    #[test]
    fn test_paths() {
        let paths = ReportConfig::new("/tmp/report").paths();
        assert_eq!(paths.workbook, PathBuf::from("/tmp/report/financial_report.xlsx"));
        assert_eq!(paths.margins_chart, PathBuf::from("/tmp/report/margins_by_period.png"));
        assert_eq!(paths.roa_roe_chart, PathBuf::from("/tmp/report/roa_roe_by_period.png"));
    }
}
