//! Redis implementation of the OtpRepository trait.
//!
//! Layout: `{prefix}:{mobile}` is a sorted set. Members are JSON-encoded
//! records, scores are `expires_at` in epoch milliseconds, and the key itself
//! expires with its newest member. Verification runs as one Lua script so the
//! match and the removal cannot interleave with another verification.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::Script;
use tracing::{debug, error, warn};

use kyc_core::domain::entities::OtpRecord;
use kyc_core::errors::DomainError;
use kyc_core::repositories::OtpRepository;
use kyc_shared::phone::mask_mobile;

use super::redis_client::RedisClient;
use crate::InfrastructureError;

// KEYS[1] ledger key, ARGV[1] now in ms, ARGV[2] code.
// Drops expired members, then pops the first live member with that code.
// Members are ordered by expiry, so the first match is the oldest issuance.
const TAKE_VALID_SCRIPT: &str = r#"
redis.call('ZREMRANGEBYSCORE', KEYS[1], '-inf', ARGV[1])
local members = redis.call('ZRANGE', KEYS[1], 0, -1)
for _, member in ipairs(members) do
    local record = cjson.decode(member)
    if record['code'] == ARGV[2] then
        redis.call('ZREM', KEYS[1], member)
        return member
    end
end
return false
"#;

/// Redis-backed OTP ledger
pub struct RedisOtpRepository {
    client: RedisClient,
    take_script: Script,
}

impl RedisOtpRepository {
    pub fn new(client: RedisClient) -> Self {
        Self {
            client,
            take_script: Script::new(TAKE_VALID_SCRIPT),
        }
    }

    fn key(&self, mobile: &str) -> String {
        format!("{}:{}", self.client.key_prefix(), mobile)
    }
}

fn cache_error(context: &str, error: redis::RedisError) -> DomainError {
    error!(error = %error, "{}", context);
    InfrastructureError::Cache(error).into()
}

#[async_trait]
impl OtpRepository for RedisOtpRepository {
    async fn insert(&self, record: &OtpRecord) -> Result<(), DomainError> {
        let key = self.key(&record.mobile);
        let member = serde_json::to_string(record).map_err(InfrastructureError::from)?;
        let expires_ms = record.expires_at.timestamp_millis();

        let mut conn = self.client.connection();
        redis::pipe()
            .atomic()
            .cmd("ZADD")
            .arg(&key)
            .arg(expires_ms)
            .arg(&member)
            .ignore()
            .cmd("PEXPIREAT")
            .arg(&key)
            .arg(expires_ms)
            .ignore()
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e| cache_error("Failed to store OTP record in Redis", e))?;

        debug!(mobile = %mask_mobile(&record.mobile), "Stored OTP record in Redis");
        Ok(())
    }

    async fn take_valid(
        &self,
        mobile: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OtpRecord>, DomainError> {
        let mut conn = self.client.connection();
        let taken: Option<String> = self
            .take_script
            .key(self.key(mobile))
            .arg(now.timestamp_millis())
            .arg(code)
            .invoke_async(&mut conn)
            .await
            .map_err(|e| cache_error("Failed to verify OTP in Redis", e))?;

        let Some(member) = taken else {
            return Ok(None);
        };

        let record: OtpRecord =
            serde_json::from_str(&member).map_err(InfrastructureError::from)?;

        // The script compares plain strings; keep the constant-time check authoritative
        if record.matches(mobile, code) && !record.is_expired_at(now) {
            Ok(Some(record))
        } else {
            Ok(None)
        }
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut conn = self.client.connection();
        let pattern = format!("{}:*", self.client.key_prefix());

        let mut keys: Vec<String> = Vec::new();
        let mut cursor: u64 = 0;
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(100)
                .query_async(&mut conn)
                .await
                .map_err(|e| cache_error("Failed to scan OTP keys", e))?;
            keys.extend(batch);
            if next == 0 {
                break;
            }
            cursor = next;
        }

        let mut purged = 0u64;
        for key in keys {
            let removed: Result<u64, redis::RedisError> = redis::cmd("ZREMRANGEBYSCORE")
                .arg(&key)
                .arg("-inf")
                .arg(now.timestamp_millis())
                .query_async(&mut conn)
                .await;

            match removed {
                Ok(removed) => purged += removed,
                // Another writer's key under our prefix; not part of the ledger
                Err(e) if e.code() == Some("WRONGTYPE") => {
                    warn!(key = %key, "Skipping non-ledger key during OTP purge");
                }
                Err(e) => return Err(cache_error("Failed to purge OTP records", e)),
            }
        }

        Ok(purged)
    }

    async fn count_live(&self, mobile: &str, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut conn = self.client.connection();
        let live: u64 = redis::cmd("ZCOUNT")
            .arg(self.key(mobile))
            .arg(format!("({}", now.timestamp_millis()))
            .arg("+inf")
            .query_async(&mut conn)
            .await
            .map_err(|e| cache_error("Failed to count OTP records", e))?;

        Ok(live)
    }
}
