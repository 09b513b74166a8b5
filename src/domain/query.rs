use std::cmp::Ordering;
use std::fmt;

use crate::domain::{dog::Dog, errors::DomainError};

pub type DogPredicate = Box<dyn Fn(&Dog) -> bool + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Closed set of sortable attributes. Resolution from the caller-supplied
/// string happens here and nowhere else, so untyped input never reaches the
/// query path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DogSortKey {
    Name,
    Color,
    TailLength,
    Weight,
}

impl DogSortKey {
    /// Case-sensitive exact match over the four sortable field names.
    pub fn resolve(attribute: &str) -> Result<Self, DomainError> {
        match attribute {
            "name" => Ok(Self::Name),
            "color" => Ok(Self::Color),
            "tail_length" => Ok(Self::TailLength),
            "weight" => Ok(Self::Weight),
            _ => Err(DomainError::validation("Invalid attribute parameter")),
        }
    }

    pub fn compare(self, left: &Dog, right: &Dog) -> Ordering {
        match self {
            Self::Name => left.name.cmp(&right.name),
            Self::Color => left.color.cmp(&right.color),
            Self::TailLength => left.tail_length.cmp(&right.tail_length),
            Self::Weight => left.weight.cmp(&right.weight),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: DogSortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn compare(&self, left: &Dog, right: &Dog) -> Ordering {
        let ordering = self.key.compare(left, right);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// One-indexed page window. Absence means "no pagination".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_number: i64,
    pub page_size: i64,
}

impl PageWindow {
    pub fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.page_number > 0 && self.page_size > 0
    }

    pub fn offset(&self) -> usize {
        let page_number = usize::try_from(self.page_number.saturating_sub(1)).unwrap_or(usize::MAX);
        let page_size = usize::try_from(self.page_size).unwrap_or(usize::MAX);
        page_number.saturating_mul(page_size)
    }

    pub fn limit(&self) -> usize {
        usize::try_from(self.page_size).unwrap_or(usize::MAX)
    }
}

/// Immutable bundle of filter, sort and page parameters for one list
/// operation. Constructed per request, used once, discarded.
#[derive(Default)]
pub struct DogQuery {
    pub predicate: Option<DogPredicate>,
    pub sort: Option<SortSpec>,
    pub page: Option<PageWindow>,
}

impl DogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_predicate(
        mut self,
        predicate: impl Fn(&Dog) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    pub fn with_sort(mut self, key: DogSortKey, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec { key, direction });
        self
    }

    pub fn with_page(mut self, page: PageWindow) -> Self {
        self.page = Some(page);
        self
    }

    /// Pure check, no side effects. Attribute resolution failures are raised
    /// by [`DogSortKey::resolve`] before a query ever carries a [`SortSpec`].
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(page) = &self.page
            && !page.is_valid()
        {
            return Err(DomainError::validation("Invalid pagination parameter"));
        }
        Ok(())
    }
}

impl fmt::Debug for DogQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DogQuery")
            .field("predicate", &self.predicate.as_ref().map(|_| "<closure>"))
            .field("sort", &self.sort)
            .field("page", &self.page)
            .finish()
    }
}
