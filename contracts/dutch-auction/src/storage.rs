use crate::types::{
    Auction, AuctionConfig, DataKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{Address, Env, Vec};

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// CONFIG STORAGE
// ============================================================================

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<AuctionConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &AuctionConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ============================================================================
// AUCTION COUNTER STORAGE
// ============================================================================

/// Number of auctions ever created, which is also the next auction id.
pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::AuctionCounter)
        .unwrap_or(0)
}

/// Advances the counter and returns the id it handed out.
pub fn increment_auction_counter(env: &Env) -> u64 {
    let auction_id = get_auction_counter(env);
    env.storage()
        .instance()
        .set(&DataKey::AuctionCounter, &(auction_id + 1));
    auction_id
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(auction_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.auction_id);
    env.storage().persistent().set(&key, auction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// SELLER AUCTIONS STORAGE
// ============================================================================

/// Get all auction ids created by a seller, oldest first
pub fn get_seller_auctions(env: &Env, seller: &Address) -> Vec<u64> {
    let key = DataKey::SellerAuctions(seller.clone());
    let auctions = env
        .storage()
        .persistent()
        .get::<_, Vec<u64>>(&key)
        .unwrap_or(Vec::new(env));
    if !auctions.is_empty() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auctions
}

pub fn add_seller_auction(env: &Env, seller: &Address, auction_id: u64) {
    let key = DataKey::SellerAuctions(seller.clone());
    let mut auctions = get_seller_auctions(env, seller);
    auctions.push_back(auction_id);
    env.storage().persistent().set(&key, &auctions);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
