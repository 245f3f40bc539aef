#![no_std]

//! # Dutch Auction Contract
//!
//! Sells one non-fungible asset per auction at a price that falls linearly
//! from a start price to a floor over a fixed window. The first buyer paying
//! the current price gets the asset and the seller gets the payment.
//!
//! The asset sits in the contract's custody while the auction is `Active`.
//! Each auction leaves `Active` exactly once, through [`DutchAuctionContract::buy`]
//! or [`DutchAuctionContract::cancel_auction`]. Both write the terminal status
//! before calling any other contract and hold a per-auction settlement lock
//! (see the `guard` module) until their transfers return. A failed call traps or returns
//! an error, and Soroban rolls back every write it made.
//!
//! An auction that reaches its end time unsold stays `Active` and can no longer
//! be bought. Only its seller can close it, by cancelling.

mod admin;
mod custody;
mod errors;
mod events;
mod guard;
mod pricing;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

pub use custody::NonFungibleClient;
pub use errors::Error;
use events::*;
pub use types::{Auction, AuctionConfig, AuctionStatus};

#[contract]
pub struct DutchAuctionContract;

#[contractimpl]
impl DutchAuctionContract {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the contract.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to change the payment token
    /// * `payment_token` - Token contract every new auction is priced and paid in
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(env: Env, admin: Address, payment_token: Address) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        let config = AuctionConfig {
            admin: admin.clone(),
            payment_token: payment_token.clone(),
            created_at: env.ledger().timestamp(),
        };
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        InitializedEventData {
            admin,
            payment_token,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<AuctionConfig, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    /// Change the payment token used by auctions created from now on (admin only).
    ///
    /// Auctions already open keep the token they were created with.
    pub fn set_payment_token(env: Env, admin: Address, payment_token: Address) -> Result<(), Error> {
        admin::require_admin(&env, &admin)?;

        let mut config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        config.payment_token = payment_token.clone();
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        PaymentTokenUpdatedEventData {
            admin,
            payment_token,
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // AUCTION REGISTRY
    // ========================================================================

    /// Open an auction for `token_id` of the `nft` contract.
    ///
    /// The asset moves from `seller` into the contract, so the contract must
    /// be approved for it beforehand, either for this asset or as an operator
    /// for all of the seller's assets.
    ///
    /// # Arguments
    /// * `seller` - Current owner of the asset; receives the payment
    /// * `nft` - Contract holding the asset's ownership records
    /// * `token_id` - Asset to sell
    /// * `start_price` - Price when the auction opens
    /// * `end_price` - Floor price, reached after `duration` seconds
    /// * `duration` - Length of the price decay in seconds
    ///
    /// # Returns
    /// * The new auction id. Ids start at 0 and are never reused
    ///
    /// # Errors
    /// * `Error::InvalidPriceRange` - `start_price <= end_price` or a negative floor
    /// * `Error::InvalidDuration` - Zero duration, or the end time overflows
    /// * `Error::NotOwner` - `seller` does not own the asset
    /// * `Error::NotApproved` - The contract may not move the asset
    pub fn create_auction(
        env: Env,
        seller: Address,
        nft: Address,
        token_id: u128,
        start_price: i128,
        end_price: i128,
        duration: u64,
    ) -> Result<u64, Error> {
        seller.require_auth();

        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        if end_price < 0 || start_price <= end_price {
            return Err(Error::InvalidPriceRange);
        }
        if duration == 0 {
            return Err(Error::InvalidDuration);
        }

        let start_time = env.ledger().timestamp();
        let end_time = start_time
            .checked_add(duration)
            .ok_or(Error::InvalidDuration)?;

        let nft_client = NonFungibleClient::new(&env, &nft);
        if nft_client.owner_of(&token_id) != seller {
            return Err(Error::NotOwner);
        }
        let custodian = env.current_contract_address();
        if !custody::is_transfer_approved(&nft_client, &seller, &custodian, token_id) {
            return Err(Error::NotApproved);
        }

        let auction = Auction {
            auction_id: storage::get_auction_counter(&env),
            seller: seller.clone(),
            nft: nft.clone(),
            token_id,
            payment_token: config.payment_token,
            start_price,
            end_price,
            start_time,
            end_time,
            status: AuctionStatus::Active,
            buyer: None,
            final_price: None,
        };

        // Nothing is written until the asset is in custody.
        custody::take_custody(&env, &nft, &seller, token_id);

        let auction_id = storage::increment_auction_counter(&env);
        storage::save_auction(&env, &auction);
        storage::add_seller_auction(&env, &seller, auction_id);
        storage::extend_instance_ttl(&env);

        log!(&env, "auction opened", auction_id, seller.clone());

        AuctionCreatedEventData {
            auction_id,
            seller,
            nft,
            token_id,
            start_price,
            end_price,
            start_time,
            end_time,
        }
        .publish(&env);

        Ok(auction_id)
    }

    // ========================================================================
    // PRICING
    // ========================================================================

    /// Price to pay for an auction at the current ledger time.
    ///
    /// Keeps reporting `end_price` after the end time, even though the
    /// auction can no longer be bought then.
    pub fn current_price(env: Env, auction_id: u64) -> Result<i128, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        pricing::current_price(&auction, env.ledger().timestamp())
    }

    // ========================================================================
    // SETTLEMENT
    // ========================================================================

    /// Buy an auction at its current price.
    ///
    /// `payment` is debited from `buyer` in full; whatever exceeds the price
    /// is refunded in the same call.
    ///
    /// # Returns
    /// * The price paid to the seller
    ///
    /// # Errors
    /// * `Error::InvalidPayment` - `payment` is negative
    /// * `Error::AuctionNotFound` - Unknown auction id
    /// * `Error::AuctionNotActive` - Already sold or cancelled
    /// * `Error::ReentrancyDetected` - A settlement of this auction is in progress
    /// * `Error::PastDeadline` - The ledger time is past the end time
    /// * `Error::InsufficientPayment` - `payment` is below the current price
    pub fn buy(env: Env, auction_id: u64, buyer: Address, payment: i128) -> Result<i128, Error> {
        buyer.require_auth();

        if payment < 0 {
            return Err(Error::InvalidPayment);
        }

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if !auction.is_active() {
            return Err(Error::AuctionNotActive);
        }
        if guard::is_locked(&env, auction_id) {
            return Err(Error::ReentrancyDetected);
        }

        let now = env.ledger().timestamp();
        if now > auction.end_time {
            return Err(Error::PastDeadline);
        }

        let price = pricing::current_price(&auction, now)?;
        if payment < price {
            return Err(Error::InsufficientPayment);
        }
        let refund = payment - price;

        guard::acquire(&env, auction_id)?;

        auction.status = AuctionStatus::Sold;
        auction.buyer = Some(buyer.clone());
        auction.final_price = Some(price);
        storage::save_auction(&env, &auction);

        let token_client = token::TokenClient::new(&env, &auction.payment_token);
        let contract_address = env.current_contract_address();

        collect_payment(&token_client, &buyer, &contract_address, payment);
        custody::release_custody(&env, &auction.nft, &buyer, auction.token_id);
        pay_out(&token_client, &contract_address, &buyer, refund);
        pay_out(&token_client, &contract_address, &auction.seller, price);

        guard::release(&env, auction_id);
        storage::extend_instance_ttl(&env);

        log!(&env, "auction sold", auction_id, price, refund);

        AuctionFinalizedEventData {
            auction_id,
            buyer,
            final_price: price,
        }
        .publish(&env);

        Ok(price)
    }

    /// Withdraw an auction and return the asset to its seller.
    ///
    /// Allowed at any time while the auction is active, including after its
    /// end time.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - Unknown auction id
    /// * `Error::NotSeller` - `caller` did not create the auction
    /// * `Error::AuctionNotActive` - Already sold or cancelled
    /// * `Error::ReentrancyDetected` - A settlement of this auction is in progress
    pub fn cancel_auction(env: Env, auction_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if auction.seller != caller {
            return Err(Error::NotSeller);
        }
        if !auction.is_active() {
            return Err(Error::AuctionNotActive);
        }

        guard::acquire(&env, auction_id)?;

        auction.status = AuctionStatus::Cancelled;
        storage::save_auction(&env, &auction);

        custody::release_custody(&env, &auction.nft, &auction.seller, auction.token_id);

        guard::release(&env, auction_id);
        storage::extend_instance_ttl(&env);

        log!(&env, "auction cancelled", auction_id);

        AuctionCancelledEventData {
            auction_id,
            seller: caller,
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)
    }

    /// Number of auctions ever created.
    pub fn auction_count(env: Env) -> u64 {
        storage::get_auction_counter(&env)
    }

    /// Every auction in creation order, whatever its status.
    pub fn list_all(env: Env) -> Vec<Auction> {
        let mut auctions = Vec::new(&env);
        for auction_id in 0..storage::get_auction_counter(&env) {
            if let Some(auction) = storage::get_auction(&env, auction_id) {
                auctions.push_back(auction);
            }
        }
        auctions
    }

    /// Auctions still open, in creation order. Includes auctions past their
    /// end time that were never cancelled.
    pub fn list_active(env: Env) -> Vec<Auction> {
        let mut auctions = Vec::new(&env);
        for auction in Self::list_all(env.clone()).iter() {
            if auction.is_active() {
                auctions.push_back(auction);
            }
        }
        auctions
    }

    /// Ids of the auctions a seller has created, oldest first.
    pub fn list_by_seller(env: Env, seller: Address) -> Vec<u64> {
        storage::get_seller_auctions(&env, &seller)
    }
}

fn collect_payment(token_client: &token::TokenClient, buyer: &Address, contract: &Address, amount: i128) {
    if amount > 0 {
        token_client.transfer(buyer, contract, &amount);
    }
}

fn pay_out(token_client: &token::TokenClient, contract: &Address, to: &Address, amount: i128) {
    if amount > 0 {
        token_client.transfer(contract, to, &amount);
    }
}

#[cfg(test)]
mod test;
