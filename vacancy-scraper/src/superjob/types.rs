use serde::{Deserialize, Serialize};

use crate::{RubSalary, SalaryRange};

pub(crate) const RUB_CURRENCY: &str = "rub";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Vacancy {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub payment_from: Option<f64>,
    #[serde(default)]
    pub payment_to: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl RubSalary for Vacancy {
    fn rub_salary_range(&self) -> Option<SalaryRange> {
        if self.currency.as_deref() != Some(RUB_CURRENCY) {
            return None;
        }
        let range = SalaryRange::new(self.payment_from, self.payment_to);
        if range.is_empty() {
            return None;
        }
        Some(range)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct VacancyPage {
    pub total: u64,
    pub more: bool,
    pub objects: Vec<Vacancy>,
}

/// Body of a successful password grant. The token itself is not used for
/// vacancy searches, those authenticate with the application key.
#[derive(Deserialize, Debug)]
pub(crate) struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub ttl: Option<u64>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_vacancy_page() {
        let page_json = r#"{
            "total": 2,
            "more": false,
            "objects": [
                {
                    "id": 46473722,
                    "profession": "Программист Python",
                    "payment_from": 120000,
                    "payment_to": 0,
                    "currency": "rub",
                    "town": {"id": 4, "title": "Москва"}
                },
                {
                    "id": 46473723,
                    "profession": "Go developer",
                    "payment_from": 0,
                    "payment_to": 0,
                    "currency": "rub"
                }
            ]
        }"#;
        let page: VacancyPage = serde_json::from_str(page_json).unwrap();
        assert_eq!(page.total, 2);
        assert!(!page.more);
        assert_eq!(
            page.objects[0].rub_salary_range(),
            Some(SalaryRange::new(Some(120000.0), None))
        );
        assert_eq!(page.objects[1].rub_salary_range(), None);
    }

    #[test]
    fn test_foreign_currency_has_no_rub_salary() {
        let vacancy: Vacancy = serde_json::from_str(
            r#"{"currency": "usd", "payment_from": 500, "payment_to": 0}"#,
        )
        .unwrap();
        assert_eq!(vacancy.rub_salary_range(), None);
    }

    #[test]
    fn test_null_currency_does_not_break_page() {
        let page: VacancyPage = serde_json::from_str(
            r#"{
                "total": 2,
                "more": false,
                "objects": [
                    {"currency": "rub", "payment_from": 100000, "payment_to": 0},
                    {"currency": null, "payment_from": 0, "payment_to": 0}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(page.objects.len(), 2);
        assert_eq!(page.objects[1].currency, None);
        assert_eq!(page.objects[1].rub_salary_range(), None);
        assert_eq!(
            page.objects[0].rub_salary_range(),
            Some(SalaryRange::new(Some(100000.0), None))
        );
    }

    #[test]
    fn test_null_payment_fields() {
        let vacancy: Vacancy = serde_json::from_str(
            r#"{"currency": "rub", "payment_from": null, "payment_to": 90000}"#,
        )
        .unwrap();
        assert_eq!(
            vacancy.rub_salary_range(),
            Some(SalaryRange::new(None, Some(90000.0)))
        );
    }
}
