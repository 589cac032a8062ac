use futures::{Stream, TryStreamExt};
use serde::{ser::SerializeMap, Serialize, Serializer};
use vacancy_scraper::{RubSalary, Result, Search, VacancySource};

use crate::estimate::predict_rub_salary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct LanguageSummary {
    /// total reported by the source with the first result page
    pub vacancies_found: u64,
    /// vacancies with a usable ruble salary
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

/// Language summaries in the order the languages were requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsTable {
    rows: Vec<(String, LanguageSummary)>,
}

impl StatisticsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, language: String, summary: LanguageSummary) {
        self.rows.push((language, summary));
    }

    pub fn get(&self, language: &str) -> Option<&LanguageSummary> {
        self.rows
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, summary)| summary)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageSummary)> {
        self.rows
            .iter()
            .map(|(name, summary)| (name.as_str(), summary))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Serialize for StatisticsTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (language, summary) in &self.rows {
            map.serialize_entry(language, summary)?;
        }
        map.end()
    }
}

/// Integer part of the mean, 0 for no salaries.
pub fn average_salary(salaries: &[f64]) -> u64 {
    if salaries.is_empty() {
        return 0;
    }
    let mean = salaries.iter().sum::<f64>() / salaries.len() as f64;
    mean as u64
}

/// Drains a search and summarizes the ruble salaries of its vacancies.
pub async fn summarize<S, V>(search: Search<S>) -> Result<LanguageSummary>
where
    S: Stream<Item = Result<V>>,
    V: RubSalary,
{
    let Search { found, vacancies } = search;
    tokio::pin!(vacancies);
    let mut salaries = Vec::new();
    while let Some(vacancy) = vacancies.try_next().await? {
        if let Some(salary) = predict_rub_salary(&vacancy) {
            salaries.push(salary);
        }
    }
    Ok(LanguageSummary {
        vacancies_found: found,
        vacancies_processed: salaries.len() as u64,
        average_salary: average_salary(&salaries),
    })
}

pub async fn language_summary<Src>(source: &Src, language: &str) -> Result<LanguageSummary>
where
    Src: VacancySource + ?Sized,
{
    let search = source.search(language).await?;
    let summary = summarize(search).await?;
    log::info!(
        "{}: {} found, {} processed, average salary {}",
        language,
        summary.vacancies_found,
        summary.vacancies_processed,
        summary.average_salary
    );
    Ok(summary)
}

/// Summarizes every language in order. The first failed request aborts the
/// whole collection.
pub async fn collect_statistics<Src>(source: &Src, languages: &[String]) -> Result<StatisticsTable>
where
    Src: VacancySource + ?Sized,
{
    let mut table = StatisticsTable::new();
    for language in languages {
        log::info!("collecting {} vacancies for {}", source.name(), language);
        let summary = language_summary(source, language).await?;
        table.insert(language.clone(), summary);
    }
    Ok(table)
}
