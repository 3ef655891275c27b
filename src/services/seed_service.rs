//! Synthetic user generation and one-time seeding of an empty store.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::user::NewUser;
use crate::services::user_service::UserService;

/// Number of records written into an empty store.
pub const SEED_USER_COUNT: usize = 100;

pub const DEPARTMENTS: [&str; 6] = ["Engineering", "Marketing", "Sales", "HR", "Finance", "IT"];

/// Salary bounds in whole cents, inclusive.
const MIN_SALARY_CENTS: u64 = 3_000_000;
const MAX_SALARY_CENTS: u64 = 12_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Applied { inserted: usize },
    AlreadySeeded { existing: i64 },
}

#[derive(Clone)]
pub struct SeedService {
    users: UserService,
    rng_seed: Option<u64>,
    guard: Arc<Mutex<()>>,
    /// Row count last seen in a populated store; 0 until then. Records are
    /// never deleted, so once set the store stays populated.
    known_count: Arc<AtomicI64>,
}

impl SeedService {
    pub fn new(users: UserService, rng_seed: Option<u64>) -> Self {
        Self {
            users,
            rng_seed,
            guard: Arc::new(Mutex::new(())),
            known_count: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Fills the store with [`SEED_USER_COUNT`] generated users if it is empty.
    ///
    /// Calls are serialized until the store is known to be populated, so
    /// concurrent first requests seed once. After that the lock and the count
    /// query are skipped. A store that already holds records is left untouched.
    pub async fn ensure_seeded(&self) -> Result<SeedOutcome> {
        if let Some(existing) = self.cached_count() {
            return Ok(SeedOutcome::AlreadySeeded { existing });
        }

        let _guard = self.guard.lock().await;
        if let Some(existing) = self.cached_count() {
            return Ok(SeedOutcome::AlreadySeeded { existing });
        }

        let existing = self.users.count().await?;
        if existing > 0 {
            tracing::debug!(existing, "user store already populated; skipping seed");
            self.known_count.store(existing, Ordering::Release);
            return Ok(SeedOutcome::AlreadySeeded { existing });
        }

        let mut rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let batch = generate_users(&mut rng, SEED_USER_COUNT)?;
        let stored = self.users.insert_batch(&batch).await?;

        info!(inserted = stored.len(), "seeded user store");
        self.known_count
            .store(i64::try_from(stored.len()).unwrap_or(i64::MAX), Ordering::Release);
        Ok(SeedOutcome::Applied {
            inserted: stored.len(),
        })
    }

    fn cached_count(&self) -> Option<i64> {
        match self.known_count.load(Ordering::Acquire) {
            0 => None,
            existing => Some(existing),
        }
    }
}

/// Generates `count` plausible users from `rng`.
///
/// The same seeded RNG always yields the same users.
pub fn generate_users<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Vec<NewUser>> {
    (0..count).map(|_| generate_user(rng)).collect()
}

fn generate_user<R: Rng + ?Sized>(rng: &mut R) -> Result<NewUser> {
    let department = DEPARTMENTS
        .choose(rng)
        .ok_or_else(|| Error::Internal("department list is empty".to_string()))?;
    let cents = rng.gen_range(MIN_SALARY_CENTS..=MAX_SALARY_CENTS);

    Ok(NewUser {
        first_name: FirstName().fake_with_rng(rng),
        last_name: LastName().fake_with_rng(rng),
        email: SafeEmail().fake_with_rng(rng),
        company: CompanyName().fake_with_rng(rng),
        department: (*department).to_string(),
        salary: cents as f64 / 100.0,
        phone: PhoneNumber().fake_with_rng(rng),
    })
}
