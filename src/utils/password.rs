use bcrypt::{BcryptError, DEFAULT_COST, hash, verify};

/// Bcrypt-backed password hashing collaborator.
///
/// Owned by the authentication facade and the registration strategies; the
/// cost factor is fixed at construction so tests can dial it down.
#[derive(Clone, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, plaintext: &str) -> Result<String, BcryptError> {
        hash(plaintext, self.cost)
    }

    pub fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, BcryptError> {
        verify(plaintext, hashed)
    }
}
