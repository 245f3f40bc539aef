use soroban_sdk::contracterror;

/// Error codes for the Dutch auction contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Start price must be above the end price, and neither may be negative
    InvalidPriceRange = 3,
    /// Duration is zero or the end time does not fit in a timestamp
    InvalidDuration = 4,
    /// Seller does not own the asset
    NotOwner = 5,
    /// Contract has no transfer approval for the asset
    NotApproved = 6,
    /// No auction with this id
    AuctionNotFound = 7,
    /// Auction was already sold or cancelled
    AuctionNotActive = 8,
    /// Purchase attempted after the end time
    PastDeadline = 9,
    /// Attached payment is below the current price
    InsufficientPayment = 10,
    /// Only the seller may cancel
    NotSeller = 11,
    /// A settlement of this auction is already running
    ReentrancyDetected = 12,
    /// Attached payment is negative
    InvalidPayment = 13,
    /// Price arithmetic overflowed
    ArithmeticOverflow = 14,
    /// Caller is not the admin
    Unauthorized = 15,
}
