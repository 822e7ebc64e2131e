//! Human-readable reporting of symbol check results

use tracing::info;

use crate::symbols::checker::{Classification, SymbolCheck};

/// Create the report line for a check result
/// Returns None if nothing should be shown (Valid, or Unknown when hidden)
pub fn render_line(check: &SymbolCheck, hide_not_found: bool) -> Option<String> {
    match check.classification {
        Classification::Valid => None,
        Classification::TooNew { introduced } => Some(format!(
            "Symbol [{}] was introduced in GTK {}",
            check.symbol, introduced
        )),
        Classification::Deprecated { since } => Some(format!(
            "Symbol [{}] has been deprecated since GTK {}",
            check.symbol, since
        )),
        Classification::Unknown if hide_not_found => None,
        Classification::Unknown => Some(format!(
            "Symbol [{}] was not found in the API documents",
            check.symbol
        )),
    }
}

/// Report lines for `checks`, in order
pub fn render_report(checks: &[SymbolCheck], hide_not_found: bool) -> Vec<String> {
    checks
        .iter()
        .filter_map(|check| render_line(check, hide_not_found))
        .collect()
}

/// Number of checks per classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub valid: usize,
    pub too_new: usize,
    pub deprecated: usize,
    pub unknown: usize,
}

impl Summary {
    pub fn from_checks(checks: &[SymbolCheck]) -> Self {
        checks
            .iter()
            .fold(Self::default(), |mut summary, check| {
                match check.classification {
                    Classification::Valid => summary.valid += 1,
                    Classification::TooNew { .. } => summary.too_new += 1,
                    Classification::Deprecated { .. } => summary.deprecated += 1,
                    Classification::Unknown => summary.unknown += 1,
                }
                summary
            })
    }

    pub fn log(&self) {
        info!(
            valid = self.valid,
            too_new = self.too_new,
            deprecated = self.deprecated,
            unknown = self.unknown,
            "Symbol check finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::version::Version;
    use rstest::rstest;

    fn check(symbol: &str, classification: Classification) -> SymbolCheck {
        SymbolCheck {
            symbol: symbol.to_string(),
            classification,
        }
    }

    #[rstest]
    #[case(
        Classification::TooNew { introduced: Version::new(3, 4) },
        false,
        Some("Symbol [gtk_x] was introduced in GTK 3.4")
    )]
    #[case(
        Classification::Deprecated { since: Version::new(3, 10) },
        false,
        Some("Symbol [gtk_x] has been deprecated since GTK 3.10")
    )]
    #[case(
        Classification::Unknown,
        false,
        Some("Symbol [gtk_x] was not found in the API documents")
    )]
    #[case(Classification::Unknown, true, None)]
    #[case(Classification::Valid, false, None)]
    #[case(Classification::Valid, true, None)]
    fn render_line_returns_expected_message(
        #[case] classification: Classification,
        #[case] hide_not_found: bool,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            render_line(&check("gtk_x", classification), hide_not_found),
            expected.map(str::to_string)
        );
    }

    #[test]
    fn render_report_skips_silent_results() {
        let checks = vec![
            check("gtk_a", Classification::Valid),
            check(
                "gtk_b",
                Classification::Deprecated {
                    since: Version::new(3, 8),
                },
            ),
            check("gtk_c", Classification::Unknown),
        ];

        assert_eq!(
            render_report(&checks, true),
            vec!["Symbol [gtk_b] has been deprecated since GTK 3.8"]
        );
        assert_eq!(render_report(&checks, false).len(), 2);
    }

    #[test]
    fn summary_counts_each_classification() {
        let checks = vec![
            check("a", Classification::Valid),
            check("b", Classification::Valid),
            check(
                "c",
                Classification::TooNew {
                    introduced: Version::new(3, 2),
                },
            ),
            check("d", Classification::Unknown),
        ];

        assert_eq!(
            Summary::from_checks(&checks),
            Summary {
                valid: 2,
                too_new: 1,
                deprecated: 0,
                unknown: 1,
            }
        );
    }
}
