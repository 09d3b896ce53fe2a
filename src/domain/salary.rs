//! Salary string parsing.
//!
//! Catalog salaries are free text (`"$80k - $120k"`, `"$50k - $70k + Commission"`).
//! The parser takes the first two runs of ASCII digits and reads each as a
//! number of thousands. Anything with fewer than two numbers is
//! [`SalaryRange::Unparseable`], which the salary filter never excludes.

/// Multiplier applied to every extracted number; salaries are written in thousands.
const THOUSANDS: u64 = 1000;

/// Result of parsing a free-text salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryRange {
    /// Annual range in whole currency units.
    Parsed { min: u64, max: u64 },
    /// Fewer than two integers were found, or a value overflowed.
    Unparseable,
}

impl SalaryRange {
    /// Parses a salary label.
    ///
    /// ```
    /// use jobdeck::domain::SalaryRange;
    ///
    /// assert_eq!(
    ///     SalaryRange::parse("$80k - $120k"),
    ///     SalaryRange::Parsed { min: 80_000, max: 120_000 }
    /// );
    /// assert_eq!(SalaryRange::parse("Competitive"), SalaryRange::Unparseable);
    /// ```
    #[must_use]
    pub fn parse(salary: &str) -> Self {
        let mut numbers = digit_runs(salary).map(|run| {
            run.parse::<u64>()
                .ok()
                .and_then(|n| n.checked_mul(THOUSANDS))
        });

        match (numbers.next(), numbers.next()) {
            (Some(Some(min)), Some(Some(max))) => Self::Parsed { min, max },
            _ => Self::Unparseable,
        }
    }

    /// Returns `true` if this range overlaps the requested window.
    ///
    /// A `None` bound is open. Unparseable salaries always overlap.
    #[must_use]
    pub fn overlaps(self, min_wanted: Option<u64>, max_wanted: Option<u64>) -> bool {
        match self {
            Self::Unparseable => true,
            Self::Parsed { min, max } => {
                if min_wanted.is_some_and(|wanted| max < wanted) {
                    return false;
                }
                if max_wanted.is_some_and(|wanted| min > wanted) {
                    return false;
                }
                true
            }
        }
    }
}

/// Iterates over maximal runs of ASCII digits in `text`.
fn digit_runs(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
}
