use crate::{Employee, coerce::coerce_number};

/// A salary filter value must be strictly above this to apply.
const MIN_FILTER_SALARY: f64 = 0.0;
/// A year filter value must be strictly above this to apply.
const MIN_FILTER_YEAR: f64 = 1900.0;

/// Salary/year query over the collection.
///
/// Construction never fails: absent, empty, non-numeric or below-threshold
/// inputs simply leave that field unfiltered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EmployeeFilter {
    min_salary: Option<f64>,
    joining_year: Option<f64>,
}

impl EmployeeFilter {
    pub fn from_query(salary: Option<&str>, year: Option<&str>) -> Self {
        Self {
            min_salary: salary
                .and_then(coerce_number)
                .filter(|value| *value > MIN_FILTER_SALARY),
            joining_year: year
                .and_then(coerce_number)
                .filter(|value| *value > MIN_FILTER_YEAR),
        }
    }

    pub fn min_salary(&self) -> Option<f64> {
        self.min_salary
    }

    pub fn joining_year(&self) -> Option<f64> {
        self.joining_year
    }

    /// Salary is an inclusive lower bound; year must match exactly.
    pub fn matches(&self, employee: &Employee) -> bool {
        let salary_ok = self
            .min_salary
            .is_none_or(|min| employee.salary as f64 >= min);
        let year_ok = self.joining_year.is_none_or(|year| {
            employee
                .joining_year
                .is_some_and(|joined| joined as f64 == year)
        });
        salary_ok && year_ok
    }
}
