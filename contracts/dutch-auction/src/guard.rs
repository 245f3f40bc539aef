//! Per-auction settlement lock.
//!
//! The lock lives in temporary storage under `DataKey::SettlementLock` and is
//! held from the moment a settlement passes its checks until every external
//! transfer has returned. A second settlement of the same auction that starts
//! while the lock is held is rejected, even when it arrives through a callback
//! from the asset or token contract.

use crate::errors::Error;
use crate::types::DataKey;
use soroban_sdk::Env;

pub fn is_locked(env: &Env, auction_id: u64) -> bool {
    env.storage()
        .temporary()
        .has(&DataKey::SettlementLock(auction_id))
}

pub fn acquire(env: &Env, auction_id: u64) -> Result<(), Error> {
    if is_locked(env, auction_id) {
        return Err(Error::ReentrancyDetected);
    }
    env.storage()
        .temporary()
        .set(&DataKey::SettlementLock(auction_id), &true);
    Ok(())
}

pub fn release(env: &Env, auction_id: u64) {
    env.storage()
        .temporary()
        .remove(&DataKey::SettlementLock(auction_id));
}
