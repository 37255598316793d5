use argon2::{
    Argon2, PasswordHash,
    password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;
use storage::error::Result;
use storage::repository::admin::AdminRepository;

/// Hashes a password into an argon2id PHC string for storage.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))?;

    Ok(hash.to_string())
}

/// Verifies a password against the stored PHC hash. The argon2 verifier
/// compares digests in constant time.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Looks up the admin and checks the password. A uniform `false` covers
/// both an unknown email and a wrong password.
pub async fn check_credentials(pool: &PgPool, email: &str, password: &str) -> Result<bool> {
    let admin = AdminRepository::new(pool).find_by_email(email).await?;

    Ok(match admin {
        Some(admin) => verify_password(password, &admin.password_hash),
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_passwords_verify() {
        let hash = hash_password("hunter2hunter2").unwrap();
        assert!(verify_password("hunter2hunter2", &hash));
    }

    #[test]
    fn wrong_password_fails() {
        let hash = hash_password("hunter2hunter2").unwrap();
        assert!(!verify_password("hunter3hunter3", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("hunter2hunter2").unwrap();
        let b = hash_password("hunter2hunter2").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_stored_hash_fails_closed() {
        assert!(!verify_password("anything", "admin123"));
    }
}
