use anyhow::Context;
use tracing::error;

/// A bcrypt hash. Construction checks the fixed 60-character length.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    pub const LEN: usize = 60;

    pub fn parse(hash: impl Into<String>) -> anyhow::Result<Self> {
        let hash = hash.into();
        if hash.len() != Self::LEN {
            anyhow::bail!(
                "hashed password must be exactly {} characters, got {}",
                Self::LEN,
                hash.len()
            );
        }
        Ok(Self(hash))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HashedPassword(..)")
    }
}

pub fn hash_password(plain: &str, cost: u32) -> anyhow::Result<HashedPassword> {
    let hash = bcrypt::hash(plain, cost).context("hash password")?;
    HashedPassword::parse(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    bcrypt::verify(plain, hash).map_err(|e| {
        error!(error = %e, "stored hash is not a bcrypt hash");
        anyhow::Error::new(e).context("verify password")
    })
}

/// Runs bcrypt on the blocking pool; hashing at production cost takes
/// hundreds of milliseconds.
pub async fn hash_password_blocking(plain: String, cost: u32) -> anyhow::Result<HashedPassword> {
    tokio::task::spawn_blocking(move || hash_password(&plain, cost))
        .await
        .context("join hashing task")?
}

pub async fn verify_password_blocking(plain: String, hash: String) -> anyhow::Result<bool> {
    tokio::task::spawn_blocking(move || verify_password(&plain, &hash))
        .await
        .context("join verify task")?
}
