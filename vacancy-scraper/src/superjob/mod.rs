pub mod types;

use async_stream::try_stream;
use std::fmt;

use async_trait::async_trait;
use futures::Stream;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};

use crate::api::{ensure_success, Result};
use crate::{Search, VacancySource, VacancyStream};
use types::{AccessToken, VacancyPage};
pub use types::Vacancy;

pub const DEFAULT_BASE_URL: &str = "https://api.superjob.ru/2.0";
const APP_ID_HEADER: &str = "x-api-app-id";

/// Account credentials for the password grant, only needed for
/// [`SuperJob::verify_credentials`].
#[derive(Clone)]
pub struct SuperJobCredentials {
    pub login: String,
    pub password: String,
    pub client_id: String,
}

impl fmt::Debug for SuperJobCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuperJobCredentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("client_id", &self.client_id)
            .finish()
    }
}

#[derive(Clone)]
pub struct SuperJobConfig {
    pub base_url: String,
    /// secret key of the registered application, sent with every search
    pub app_key: String,
    /// Moscow
    pub town: u32,
    /// "Разработка, программирование"
    pub catalogues: u32,
    /// results per page, 100 is the API maximum
    pub count: u32,
    pub credentials: Option<SuperJobCredentials>,
}

impl fmt::Debug for SuperJobConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuperJobConfig")
            .field("base_url", &self.base_url)
            .field("app_key", &"<redacted>")
            .field("town", &self.town)
            .field("catalogues", &self.catalogues)
            .field("count", &self.count)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl SuperJobConfig {
    pub fn new(app_key: String) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            app_key,
            town: 4,
            catalogues: 48,
            count: 100,
            credentials: None,
        }
    }
}

pub struct SuperJob {
    client: Client,
    config: SuperJobConfig,
}

impl SuperJob {
    pub fn new(config: SuperJobConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(APP_ID_HEADER),
            HeaderValue::from_str(&config.app_key)?,
        );
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Exchanges login and password for an access token to check that the
    /// account credentials are valid. Searches do not use the token.
    ///
    /// Credentials travel in the query string, so the URL is stripped from
    /// any error returned here.
    pub async fn verify_credentials(&self, credentials: &SuperJobCredentials) -> Result<()> {
        log::debug!("verifying superjob credentials for login: {}", credentials.login);
        let resp = self
            .client
            .get(self.endpoint("oauth2/password/"))
            .query(&[
                ("login", credentials.login.as_str()),
                ("password", credentials.password.as_str()),
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", self.config.app_key.as_str()),
            ])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let resp = ensure_success(resp).await?;
        let token: AccessToken = resp.json().await.map_err(reqwest::Error::without_url)?;
        log::debug!(
            "received superjob access token ({} chars), ttl: {:?}",
            token.access_token.len(),
            token.ttl
        );
        Ok(())
    }

    /// Runs [`SuperJob::verify_credentials`] with the configured credentials,
    /// if there are any.
    pub async fn verify_configured_credentials(&self) -> Option<Result<()>> {
        let credentials = self.config.credentials.as_ref()?;
        Some(self.verify_credentials(credentials).await)
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<VacancyPage> {
        log::debug!(
            "requesting vacancies from superjob, page: {}, keyword: {}",
            page,
            keyword
        );
        let resp = self
            .client
            .get(self.endpoint("vacancies/"))
            .query(&[
                ("town", self.config.town.to_string()),
                ("catalogues", self.config.catalogues.to_string()),
                ("keyword", keyword.to_owned()),
                ("count", self.config.count.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let vacancy_page: VacancyPage = resp.json().await?;
        log::debug!(
            "retrieved page {} for keyword: {}, more: {}",
            page,
            keyword,
            vacancy_page.more
        );
        Ok(vacancy_page)
    }

    /// Yields the vacancies of `first` and keeps paging while the API reports
    /// more results.
    fn remaining_pages(
        &self,
        keyword: String,
        first: VacancyPage,
    ) -> impl Stream<Item = Result<Vacancy>> + Send + '_ {
        try_stream! {
            let mut page = first;
            let mut index = 0;
            loop {
                for vacancy in page.objects {
                    yield vacancy;
                }
                if !page.more {
                    break;
                }
                index += 1;
                page = self.fetch_page(&keyword, index).await?;
            }
        }
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    type Vacancy = Vacancy;

    fn name(&self) -> &str {
        "SuperJob"
    }

    async fn search<'a>(&'a self, text: &str) -> Result<Search<VacancyStream<'a, Vacancy>>> {
        let first = self.fetch_page(text, 0).await?;
        let found = first.total;
        let vacancies = Box::pin(self.remaining_pages(text.to_owned(), first));
        Ok(Search { found, vacancies })
    }
}
