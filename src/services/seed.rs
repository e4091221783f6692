use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Maps a user and a calendar day to the seed driving that day's outfit pick
pub trait SeedStrategy: Send + Sync {
    fn seed(&self, user_id: &str, date: NaiveDate) -> u64;

    /// Random stream for one user and day; ChaCha8 output is stable across releases
    fn rng(&self, user_id: &str, date: NaiveDate) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed(user_id, date))
    }
}

/// Seeds from the first 8 bytes of `SHA-256("{user_id}:{date}")`
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Seed;

impl SeedStrategy for Sha256Seed {
    fn seed(&self, user_id: &str, date: NaiveDate) -> u64 {
        let mut hasher = Sha256::new();
        hasher.update(user_id.as_bytes());
        hasher.update(b":");
        hasher.update(date.format("%Y-%m-%d").to_string().as_bytes());
        let digest = hasher.finalize();

        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(bytes)
    }
}

/// Same seed for every user and day
#[derive(Debug, Clone, Copy)]
pub struct FixedSeed(pub u64);

impl SeedStrategy for FixedSeed {
    fn seed(&self, _user_id: &str, _date: NaiveDate) -> u64 {
        self.0
    }
}
