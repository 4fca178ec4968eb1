// Password hashing using Argon2id
// Decision: Use Argon2id as it's the recommended algorithm for password hashing
// Decision: The work factor is the Argon2 time cost; memory and lanes stay at crate defaults
//
// Digests are PHC strings carrying their own parameters, so hashes made under
// an older work factor keep verifying after HASH_WORK_FACTOR changes.

use anyhow::{anyhow, Context, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

/// Salted, tunable one-way password hasher
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Hasher with the given time cost and the default memory cost
    pub fn new(work_factor: u32) -> Result<Self> {
        Self::with_memory_cost(work_factor, Params::DEFAULT_M_COST)
    }

    /// Hasher with explicit time and memory (KiB) costs
    pub fn with_memory_cost(work_factor: u32, memory_kib: u32) -> Result<Self> {
        let params = Params::new(memory_kib, work_factor, Params::DEFAULT_P_COST, None)
            .map_err(|e| anyhow!("Invalid password hashing parameters: {}", e))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Time cost used for new hashes
    pub fn work_factor(&self) -> u32 {
        self.params.t_cost()
    }

    /// Hash a password with a fresh random salt
    pub fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow!("Failed to hash password: {}", e))?;

        Ok(hash.to_string())
    }

    /// Verify a password against a digest.
    ///
    /// The output comparison is constant-time. A digest that does not parse
    /// is a failed verification, not an error.
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };

        // Parameters come from the digest itself
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    /// `hash` on tokio's blocking pool
    pub async fn hash_blocking(&self, password: String) -> Result<String> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .context("Password hashing task failed")?
    }

    /// `verify` on tokio's blocking pool
    pub async fn verify_blocking(&self, password: String, digest: String) -> Result<bool> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .context("Password verification task failed")
    }
}
