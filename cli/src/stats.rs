use salary_stats::{collect_statistics, StatisticsTable};
use vacancy_scraper::headhunter::HeadHunter;
use vacancy_scraper::superjob::SuperJob;
use vacancy_scraper::{Result, VacancySource};

use crate::config::Config;
use crate::Target;

/// Collects statistics of one site, returning the site name with its table.
/// `None` means the site was skipped.
pub async fn collect(target: Target, config: &Config) -> Result<Option<(String, StatisticsTable)>> {
    match target {
        Target::HeadHunter => {
            let Some(hh_config) = config.headhunter.clone() else {
                return Ok(None);
            };
            let hh = HeadHunter::new(hh_config)?;
            let table = collect_statistics(&hh, &config.languages).await?;
            Ok(Some((hh.name().to_owned(), table)))
        }
        Target::SuperJob => {
            let Some(sj_config) = config.superjob.clone() else {
                return Ok(None);
            };
            let sj = SuperJob::new(sj_config)?;
            let table = superjob_statistics(&sj, &config.languages).await?;
            Ok(table.map(|table| (sj.name().to_owned(), table)))
        }
    }
}

/// Runs the optional credential check first. A failed check only skips
/// SuperJob, errors during the searches abort the run.
pub async fn superjob_statistics(
    sj: &SuperJob,
    languages: &[String],
) -> Result<Option<StatisticsTable>> {
    if let Some(Err(e)) = sj.verify_configured_credentials().await {
        log::warn!(
            "Failed authorization on the SuperJob website: {}, skipping SuperJob statistics",
            e
        );
        return Ok(None);
    }
    collect_statistics(sj, languages).await.map(Some)
}
