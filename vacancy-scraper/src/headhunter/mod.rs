pub mod types;

use async_stream::try_stream;
use async_trait::async_trait;
use futures::Stream;
use reqwest::Client;

use crate::api::{ensure_success, Result};
use crate::{Search, VacancySource, VacancyStream};
use types::VacancyPage;
pub use types::{Salary, Vacancy};

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";
pub const DEFAULT_USER_AGENT: &str = "salary-stats/0.1 (vacancy salary statistics)";

/// Fixed query parameters of a HeadHunter vacancy search.
#[derive(Debug, Clone)]
pub struct HeadHunterConfig {
    pub base_url: String,
    /// hh.ru rejects requests without a user agent
    pub user_agent: String,
    /// "Программист, разработчик"
    pub professional_role: u32,
    /// Moscow
    pub area: u32,
    /// lookback in days
    pub period: u32,
    pub per_page: u32,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            professional_role: 96,
            area: 1,
            period: 30,
            per_page: 100,
        }
    }
}

pub struct HeadHunter {
    client: Client,
    config: HeadHunterConfig,
}

impl HeadHunter {
    pub fn new(config: HeadHunterConfig) -> Result<Self> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self { client, config })
    }

    fn vacancies_url(&self) -> String {
        format!("{}/vacancies", self.config.base_url.trim_end_matches('/'))
    }

    async fn fetch_page(&self, text: &str, page: u32) -> Result<VacancyPage> {
        log::debug!(
            "requesting vacancies from headhunter, page: {}, text: {}",
            page,
            text
        );
        let resp = self
            .client
            .get(self.vacancies_url())
            .query(&[
                ("professional_role", self.config.professional_role.to_string()),
                ("area", self.config.area.to_string()),
                ("period", self.config.period.to_string()),
                ("search_field", "name".to_owned()),
                ("text", text.to_owned()),
                ("per_page", self.config.per_page.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let vacancy_page: VacancyPage = resp.json().await?;
        log::debug!(
            "retrieved page {} of {} for text: {}",
            page,
            vacancy_page.pages,
            text
        );
        Ok(vacancy_page)
    }

    /// Yields the vacancies of `first` and of every following page until the
    /// page index reaches the reported page count.
    fn remaining_pages(
        &self,
        text: String,
        first: VacancyPage,
    ) -> impl Stream<Item = Result<Vacancy>> + Send + '_ {
        try_stream! {
            let mut page = first;
            let mut index = 0;
            loop {
                for vacancy in page.items {
                    yield vacancy;
                }
                index += 1;
                if index >= page.pages {
                    break;
                }
                page = self.fetch_page(&text, index).await?;
            }
        }
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    type Vacancy = Vacancy;

    fn name(&self) -> &str {
        "HeadHunter"
    }

    async fn search<'a>(&'a self, text: &str) -> Result<Search<VacancyStream<'a, Vacancy>>> {
        let first = self.fetch_page(text, 0).await?;
        let found = first.found;
        let vacancies = Box::pin(self.remaining_pages(text.to_owned(), first));
        Ok(Search { found, vacancies })
    }
}
