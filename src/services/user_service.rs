use crate::error::Result;
use crate::models::user::{NewUser, User};
use crate::services::query_engine::{self, UserPage, UserQuery};
use sqlx::{SqliteConnection, SqlitePool};

#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn insert(&self, user: &NewUser) -> Result<User> {
        let mut conn = self.pool.acquire().await?;
        insert_user(&mut conn, user).await
    }

    /// Inserts every record in one transaction: afterwards either all of them
    /// are stored or none are.
    pub async fn insert_batch(&self, users: &[NewUser]) -> Result<Vec<User>> {
        let mut tx = self.pool.begin().await?;
        let mut stored = Vec::with_capacity(users.len());
        for user in users {
            stored.push(insert_user(&mut tx, user).await?);
        }
        tx.commit().await?;
        Ok(stored)
    }

    pub async fn fetch_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email, company, department, salary, phone
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    pub async fn query(&self, query: &UserQuery) -> Result<UserPage> {
        let records = self.fetch_all().await?;
        Ok(query_engine::execute(records, query))
    }
}

async fn insert_user(conn: &mut SqliteConnection, user: &NewUser) -> Result<User> {
    let stored = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (first_name, last_name, email, company, department, salary, phone)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, first_name, last_name, email, company, department, salary, phone
        "#,
    )
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.email)
    .bind(&user.company)
    .bind(&user.department)
    .bind(user.salary)
    .bind(&user.phone)
    .fetch_one(conn)
    .await?;
    Ok(stored)
}
