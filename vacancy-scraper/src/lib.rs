pub mod api;
pub mod headhunter;
pub mod superjob;

use async_trait::async_trait;
use futures::stream::BoxStream;

pub use api::{Error, Result};

/// Salary bounds of a single vacancy, in the currency the source reported.
/// Zero and negative values mean "not specified" and are stored as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalaryRange {
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl SalaryRange {
    pub fn new(from: Option<f64>, to: Option<f64>) -> Self {
        Self {
            from: from.filter(|v| *v > 0.0),
            to: to.filter(|v| *v > 0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Vacancies that can report a salary in rubles.
pub trait RubSalary {
    /// Returns the bounds when the vacancy pays in rubles, `None` otherwise.
    fn rub_salary_range(&self) -> Option<SalaryRange>;
}

/// Result of a vacancy search: the total reported with the first page and a
/// stream that lazily pages through the rest.
///
/// `found` is a snapshot taken when the search starts, the upstream API may
/// change its result set while the remaining pages are fetched.
pub struct Search<S> {
    pub found: u64,
    pub vacancies: S,
}

pub type VacancyStream<'a, V> = BoxStream<'a, Result<V>>;

#[async_trait]
pub trait VacancySource: Sync {
    type Vacancy: RubSalary + Send + 'static;

    /// Human readable name used in report titles.
    fn name(&self) -> &str;

    /// Requests the first result page for `text` and returns a stream over
    /// all vacancies, fetching further pages on demand.
    /// The stream ends after the first failed request.
    async fn search<'a>(&'a self, text: &str) -> Result<Search<VacancyStream<'a, Self::Vacancy>>>;
}
