use soroban_sdk::{contractevent, Address};

/// Event emitted when the contract is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub payment_token: Address,
}

/// Event emitted when the admin switches the payment token
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentTokenUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub payment_token: Address,
}

/// Event emitted when an asset enters custody and its auction opens
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub seller: Address,
    pub nft: Address,
    pub token_id: u128,
    pub start_price: i128,
    pub end_price: i128,
    pub start_time: u64,
    pub end_time: u64,
}

/// Event emitted when an auction is bought
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionFinalizedEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub buyer: Address,
    pub final_price: i128,
}

/// Event emitted when the seller withdraws an auction
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelledEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub seller: Address,
}
