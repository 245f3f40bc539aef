use soroban_sdk::{contracttype, Address};

/// Lifecycle of a single auction. `Sold` and `Cancelled` are terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuctionStatus {
    /// Asset is in custody and can be bought or cancelled
    Active = 0,
    /// Asset went to a buyer, payment went to the seller
    Sold = 1,
    /// Asset went back to the seller
    Cancelled = 2,
}

/// A descending-price sale of one non-fungible asset.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    /// Sequential identifier, starting at 0
    pub auction_id: u64,
    /// Address that created the auction and receives the payment
    pub seller: Address,
    /// Contract holding the asset's ownership records
    pub nft: Address,
    /// Asset identifier within `nft`
    pub token_id: u128,
    /// Token the price is denominated and paid in
    pub payment_token: Address,
    /// Price at `start_time`
    pub start_price: i128,
    /// Floor price, reached at `end_time`
    pub end_price: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub status: AuctionStatus,
    /// Set once the auction is sold
    pub buyer: Option<Address>,
    /// Set once the auction is sold
    pub final_price: Option<i128>,
}

impl Auction {
    pub fn is_active(&self) -> bool {
        self.status == AuctionStatus::Active
    }
}

/// Contract-wide configuration written by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    /// May change the payment token for future auctions
    pub admin: Address,
    /// Payment token snapshotted into every new auction
    pub payment_token: Address,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    AuctionCounter,
    Auction(u64),
    SellerAuctions(Address),
    SettlementLock(u64),
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
