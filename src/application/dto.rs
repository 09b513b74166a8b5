use serde::{Deserialize, Serialize};

use crate::domain::{
    dog::Dog,
    errors::DomainError,
    query::{DogQuery, DogSortKey, PageWindow, SortDirection},
};

#[derive(Debug, Deserialize)]
pub struct CreateDogRequest {
    pub name: String,
    pub color: String,
    pub tail_length: i64,
    pub weight: i64,
}

impl CreateDogRequest {
    pub fn into_dog(self) -> Dog {
        Dog {
            name: self.name,
            color: self.color,
            tail_length: self.tail_length,
            weight: self.weight,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DogResponse {
    pub name: String,
    pub color: String,
    pub tail_length: i64,
    pub weight: i64,
}

impl From<Dog> for DogResponse {
    fn from(value: Dog) -> Self {
        Self {
            name: value.name,
            color: value.color,
            tail_length: value.tail_length,
            weight: value.weight,
        }
    }
}

/// Query-string shape of the list operation. A page window is built when the
/// caller supplies either pagination parameter; the missing half falls back
/// to page 1 / an unbounded page size.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDogsRequest {
    #[serde(default)]
    pub page_number: Option<i64>,
    #[serde(default)]
    pub page_size: Option<i64>,
    #[serde(default)]
    pub attribute: Option<String>,
    #[serde(default)]
    pub order: SortDirectionRequest,
}

impl ListDogsRequest {
    pub fn into_query(self) -> Result<DogQuery, DomainError> {
        let attribute = self.attribute.unwrap_or_else(|| "name".to_string());
        let key = DogSortKey::resolve(&attribute)?;

        let mut query = DogQuery::new().with_sort(key, self.order.into_domain());

        if self.page_number.is_some() || self.page_size.is_some() {
            query = query.with_page(PageWindow::new(
                self.page_number.unwrap_or(1),
                self.page_size.unwrap_or(i64::MAX),
            ));
        }

        Ok(query)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirectionRequest {
    #[default]
    Asc,
    Desc,
}

impl SortDirectionRequest {
    fn into_domain(self) -> SortDirection {
        match self {
            Self::Asc => SortDirection::Asc,
            Self::Desc => SortDirection::Desc,
        }
    }
}
