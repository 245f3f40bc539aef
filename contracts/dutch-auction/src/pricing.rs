use crate::errors::Error;
use crate::types::Auction;

/// Price a buyer has to pay for `auction` at ledger time `now`.
///
/// The price falls on a straight line from `start_price` at `start_time` to
/// `end_price` at `end_time` and stays at `end_price` afterwards. The discount
/// is truncated toward zero, so a fractional price rounds up to the next unit.
///
/// # Errors
/// * `Error::AuctionNotActive` - The auction was sold or cancelled
/// * `Error::ArithmeticOverflow` - The price spread times the elapsed time does not fit in an `i128`
pub fn current_price(auction: &Auction, now: u64) -> Result<i128, Error> {
    if !auction.is_active() {
        return Err(Error::AuctionNotActive);
    }

    if now >= auction.end_time {
        return Ok(auction.end_price);
    }
    if now <= auction.start_time {
        return Ok(auction.start_price);
    }

    let elapsed = (now - auction.start_time) as i128;
    let duration = (auction.end_time - auction.start_time) as i128;

    let discount = auction
        .start_price
        .checked_sub(auction.end_price)
        .ok_or(Error::ArithmeticOverflow)?
        .checked_mul(elapsed)
        .ok_or(Error::ArithmeticOverflow)?
        .checked_div(duration)
        .ok_or(Error::ArithmeticOverflow)?;

    auction
        .start_price
        .checked_sub(discount)
        .ok_or(Error::ArithmeticOverflow)
}
