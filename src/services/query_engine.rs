//! Filtering, ordering and paging of user records.
//!
//! Everything here is a pure function of the records handed in and the
//! requested [`UserQuery`]; the store decides where the records come from.

use std::cmp::Ordering;

use crate::models::user::User;

type Comparator = fn(&User, &User) -> Ordering;

/// Columns a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    FirstName,
    LastName,
    Email,
    Company,
    Department,
    Salary,
    Phone,
}

impl SortField {
    /// Resolves a column name. Unknown names yield `None`, which leaves the
    /// store order untouched.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "id" => Some(Self::Id),
            "first_name" => Some(Self::FirstName),
            "last_name" => Some(Self::LastName),
            "email" => Some(Self::Email),
            "company" => Some(Self::Company),
            "department" => Some(Self::Department),
            "salary" => Some(Self::Salary),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Department => "department",
            Self::Salary => "salary",
            Self::Phone => "phone",
        }
    }

    fn comparator(self) -> Comparator {
        match self {
            Self::Id => by_id,
            Self::FirstName => by_first_name,
            Self::LastName => by_last_name,
            Self::Email => by_email,
            Self::Company => by_company,
            Self::Department => by_department,
            Self::Salary => by_salary,
            Self::Phone => by_phone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only the exact string `desc` selects descending order.
    pub fn parse(value: &str) -> Self {
        if value == "desc" {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserQuery {
    pub search: Option<String>,
    pub sort_by: Option<SortField>,
    pub sort_order: SortOrder,
    pub page: u64,
    pub size: u64,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            search: None,
            sort_by: Some(SortField::Id),
            sort_order: SortOrder::Asc,
            page: 1,
            size: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
    pub total_pages: u64,
}

/// Runs `query` over `records`, which must be in store order.
///
/// Pages past the end come back empty rather than failing; `size` is assumed
/// to have been range-checked by the caller.
pub fn execute(records: Vec<User>, query: &UserQuery) -> UserPage {
    let mut filtered: Vec<User> = match query.search.as_deref() {
        Some(term) if !term.is_empty() => {
            let needle = term.to_lowercase();
            records
                .into_iter()
                .filter(|user| matches_search(user, &needle))
                .collect()
        }
        _ => records,
    };

    if let Some(field) = query.sort_by {
        let compare = field.comparator();
        match query.sort_order {
            SortOrder::Asc => filtered.sort_by(compare),
            SortOrder::Desc => filtered.sort_by(|a, b| compare(b, a)),
        }
    }

    let total = filtered.len() as u64;
    let offset = query.page.saturating_sub(1).saturating_mul(query.size);
    let users = filtered
        .into_iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(usize::try_from(query.size).unwrap_or(usize::MAX))
        .collect();

    UserPage {
        users,
        total,
        page: query.page,
        size: query.size,
        total_pages: total_pages(total, query.size),
    }
}

/// `ceil(total / size)`; zero when there is nothing to page through.
pub fn total_pages(total: u64, size: u64) -> u64 {
    if size == 0 {
        return 0;
    }
    total.div_ceil(size)
}

fn matches_search(user: &User, needle: &str) -> bool {
    [
        &user.first_name,
        &user.last_name,
        &user.email,
        &user.company,
        &user.department,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

fn by_id(a: &User, b: &User) -> Ordering {
    a.id.cmp(&b.id)
}

fn by_first_name(a: &User, b: &User) -> Ordering {
    a.first_name.cmp(&b.first_name)
}

fn by_last_name(a: &User, b: &User) -> Ordering {
    a.last_name.cmp(&b.last_name)
}

fn by_email(a: &User, b: &User) -> Ordering {
    a.email.cmp(&b.email)
}

fn by_company(a: &User, b: &User) -> Ordering {
    a.company.cmp(&b.company)
}

fn by_department(a: &User, b: &User) -> Ordering {
    a.department.cmp(&b.department)
}

fn by_salary(a: &User, b: &User) -> Ordering {
    a.salary.total_cmp(&b.salary)
}

fn by_phone(a: &User, b: &User) -> Ordering {
    a.phone.cmp(&b.phone)
}
