use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::user::User;
use crate::services::query_engine::{SortField, SortOrder, UserPage, UserQuery};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct UserListQuery {
    /// Page number, starting at 1
    #[validate(range(min = 1))]
    pub page: i64,
    /// Items per page
    #[validate(range(min = 1, max = 100))]
    pub size: i64,
    /// Case-insensitive match against name, email, company and department
    pub search: Option<String>,
    /// Column to order by; unknown columns keep the default order
    #[serde(alias = "sortBy")]
    pub sort_by: String,
    /// `desc` for descending, anything else ascending
    #[serde(alias = "sortOrder")]
    pub sort_order: String,
}

impl Default for UserListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            search: None,
            sort_by: SortField::Id.as_str().to_string(),
            sort_order: "asc".to_string(),
        }
    }
}

impl UserListQuery {
    /// Builds the query from raw `key=value` pairs. A repeated key keeps its
    /// last value, and `sortBy`/`sortOrder` share a slot with their
    /// snake_case spelling. Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => query.page = parse_int("page", &value)?,
                "size" => query.size = parse_int("size", &value)?,
                "search" => query.search = Some(value),
                "sort_by" | "sortBy" => query.sort_by = value,
                "sort_order" | "sortOrder" => query.sort_order = value,
                _ => {}
            }
        }
        Ok(query)
    }
}

fn parse_int(name: &str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::BadRequest(format!("{} must be an integer, got {:?}", name, value)))
}

impl TryFrom<UserListQuery> for UserQuery {
    type Error = Error;

    fn try_from(value: UserListQuery) -> Result<Self> {
        let page = u64::try_from(value.page)
            .map_err(|_| Error::BadRequest(format!("page must be positive, got {}", value.page)))?;
        let size = u64::try_from(value.size)
            .map_err(|_| Error::BadRequest(format!("size must be positive, got {}", value.size)))?;

        Ok(Self {
            search: value.search,
            sort_by: SortField::parse(&value.sort_by),
            sort_order: SortOrder::parse(&value.sort_order),
            page,
            size,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub department: String,
    pub salary: f64,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            company: value.company,
            department: value.department,
            salary: value.salary,
            phone: value.phone,
        }
    }
}

impl From<UserPage> for UserListResponse {
    fn from(value: UserPage) -> Self {
        Self {
            users: value.users.into_iter().map(Into::into).collect(),
            total: value.total,
            page: value.page,
            size: value.size,
            total_pages: value.total_pages,
        }
    }
}
