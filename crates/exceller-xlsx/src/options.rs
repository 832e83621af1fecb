//! XLSX writer options

/// Upper bound Excel accepts for a column width, in characters
const MAX_COLUMN_WIDTH: usize = 255;

/// How automatically sized columns are measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutofitPolicy {
    /// Minimum final width
    pub width_min: usize,
    /// Maximum final width
    pub width_max: usize,
    /// Padding added to the widest rendered line
    pub padding: usize,
}

impl Default for AutofitPolicy {
    fn default() -> Self {
        Self {
            width_min: 8,
            width_max: 60,
            padding: 2,
        }
    }
}

impl AutofitPolicy {
    /// Final width, in characters, for a column whose widest line is
    /// `content_width` characters
    pub fn fit(&self, content_width: usize) -> usize {
        let min = self.width_min.max(1);
        let max = MAX_COLUMN_WIDTH.min(self.width_max.max(min));
        (content_width + self.padding).clamp(min, max)
    }
}

/// Options for writing a workbook
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XlsxWriteOptions {
    /// Sizing of columns without an explicit width
    pub autofit: AutofitPolicy,
}

impl XlsxWriteOptions {
    /// Set the autofit policy
    pub fn with_autofit(mut self, autofit: AutofitPolicy) -> Self {
        self.autofit = autofit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_clamps() {
        let policy = AutofitPolicy::default();
        assert_eq!(policy.fit(0), 8);
        assert_eq!(policy.fit(10), 12);
        assert_eq!(policy.fit(500), 60);
    }

    #[test]
    fn test_fit_never_exceeds_excel_limit() {
        let policy = AutofitPolicy {
            width_min: 0,
            width_max: 1000,
            padding: 0,
        };
        assert_eq!(policy.fit(0), 1);
        assert_eq!(policy.fit(400), 255);
    }
}
