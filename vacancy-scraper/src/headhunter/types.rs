use serde::{Deserialize, Serialize};

use crate::{RubSalary, SalaryRange};

pub(crate) const RUB_CURRENCY: &str = "RUR";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Salary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Vacancy {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<Salary>,
}

impl RubSalary for Vacancy {
    fn rub_salary_range(&self) -> Option<SalaryRange> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(RUB_CURRENCY) {
            return None;
        }
        Some(SalaryRange::new(salary.from, salary.to))
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct VacancyPage {
    pub found: u64,
    pub pages: u32,
    pub items: Vec<Vacancy>,
}
