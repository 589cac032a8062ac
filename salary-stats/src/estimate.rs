use vacancy_scraper::RubSalary;

const LOWER_BOUND_FACTOR: f64 = 1.2;
const UPPER_BOUND_FACTOR: f64 = 0.8;

/// Point estimate of a salary range.
///
/// A lone lower bound is raised by 20%, a lone upper bound lowered by 20%,
/// and a complete range gives its midpoint. Zero counts as a missing bound.
pub fn predict_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    let from = from.filter(|v| *v > 0.0);
    let to = to.filter(|v| *v > 0.0);
    match (from, to) {
        (None, None) => None,
        (Some(from), None) => Some(from * LOWER_BOUND_FACTOR),
        (None, Some(to)) => Some(to * UPPER_BOUND_FACTOR),
        (Some(from), Some(to)) => Some((from + to) / 2.0),
    }
}

/// Estimated ruble salary of a vacancy, `None` when it has no ruble salary.
pub fn predict_rub_salary<V: RubSalary + ?Sized>(vacancy: &V) -> Option<f64> {
    let range = vacancy.rub_salary_range()?;
    predict_salary(range.from, range.to)
}
