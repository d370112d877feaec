/// Argon2 password hashing
///
/// Hashes are stored in PHC string format so the salt and parameters travel
/// with the hash. Argon2 is CPU-bound: async callers go through the
/// `*_blocking` wrappers, which run on tokio's blocking pool.

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::sync::OnceLock;

/// Hash a plaintext password with a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC hash
///
/// A malformed stored hash never verifies.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password hash is malformed: {}", e);
            false
        }
    }
}

/// [`hash_password`] on the blocking pool
pub async fn hash_password_blocking(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| anyhow::anyhow!("Password hashing task failed: {}", e))?
}

/// Verify against `stored_hash`, or against [`dummy_hash`] when there is
/// none; the latter always fails
pub fn verify_password_or_dummy(password: &str, stored_hash: Option<&str>) -> bool {
    match stored_hash {
        Some(hash) => verify_password(password, hash),
        None => {
            let _ = verify_password(password, dummy_hash());
            false
        }
    }
}

/// [`verify_password_or_dummy`] on the blocking pool
pub async fn verify_password_blocking(password: String, stored_hash: Option<String>) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify_password_or_dummy(&password, stored_hash.as_deref()))
        .await
        .map_err(|e| anyhow::anyhow!("Password verification task failed: {}", e))
}

/// Hash with the same parameters as real accounts, checked against when the
/// username does not exist so both failures cost one Argon2 verification
pub fn dummy_hash() -> &'static str {
    static DUMMY: OnceLock<String> = OnceLock::new();
    DUMMY.get_or_init(|| hash_password("no-such-account").unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    #[test]
    fn hash_verifies_only_the_original_password() {
        let hash = hash_password("hunter2").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn same_password_hashes_differently() {
        assert_ne!(hash_password("pw").unwrap(), hash_password("pw").unwrap());
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!verify_password("pw", "plaintext-pw"));
    }

    #[test]
    fn dummy_hash_is_a_real_argon2_hash() {
        let hash = dummy_hash();

        assert!(hash.starts_with("$argon2"));
        assert!(PasswordHash::new(hash).is_ok());
        assert!(std::ptr::eq(hash, dummy_hash()));
        assert!(!verify_password("", hash));
    }

    #[test]
    fn missing_hash_never_verifies() {
        let hash = hash_password("hunter2").unwrap();

        assert!(verify_password_or_dummy("hunter2", Some(&hash)));
        assert!(!verify_password_or_dummy("hunter2", None));
        assert!(!verify_password_or_dummy("", None));
    }

    #[tokio::test]
    async fn blocking_wrappers_match_sync_results() {
        let hash = hash_password_blocking("hunter2".into()).await.unwrap();

        assert!(verify_password_blocking("hunter2".into(), Some(hash.clone())).await.unwrap());
        assert!(!verify_password_blocking("hunter3".into(), Some(hash)).await.unwrap());
        assert!(!verify_password_blocking("hunter2".into(), None).await.unwrap());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn hashing_yields_the_runtime_to_other_tasks() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        tokio::spawn(async move { flag.store(true, Ordering::SeqCst) });

        // The only worker thread must be free while Argon2 runs.
        let hash = hash_password_blocking("hunter2".into()).await.unwrap();
        assert!(ran.load(Ordering::SeqCst));

        ran.store(false, Ordering::SeqCst);
        let flag = Arc::clone(&ran);
        tokio::spawn(async move { flag.store(true, Ordering::SeqCst) });

        assert!(verify_password_blocking("hunter2".into(), Some(hash)).await.unwrap());
        assert!(ran.load(Ordering::SeqCst));
    }
}
