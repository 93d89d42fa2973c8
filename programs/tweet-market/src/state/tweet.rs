use anchor_lang::prelude::*;

/// One listing per tweet id, created on first purchase and never destroyed.
/// A zeroed account (owner = None) is the unclaimed state; after the first
/// sale owner and price are always set together.
#[account]
pub struct TweetListing {
    pub tweet_id: String,
    pub owner: Option<Pubkey>,
    pub price: Option<u64>,
}

impl TweetListing {
    /// Fixed part of the account: discriminator + string length prefix +
    /// Option<Pubkey> + Option<u64>
    pub const BASE_SIZE: usize = 8 + 4 + 33 + 9;

    /// Size for account allocation, given the id being listed
    pub fn space(tweet_id: &str) -> usize {
        Self::BASE_SIZE + tweet_id.len()
    }

    /// Owner and last sale price, or None while unclaimed
    pub fn sale_state(&self) -> Option<(Pubkey, u64)> {
        match (self.owner, self.price) {
            (Some(owner), Some(price)) => Some((owner, price)),
            _ => None,
        }
    }

    /// Record a completed sale
    pub fn record_sale(&mut self, buyer: Pubkey, price: u64) {
        self.owner = Some(buyer);
        self.price = Some(price);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_grows_with_id() {
        assert_eq!(TweetListing::space(""), TweetListing::BASE_SIZE);
        assert_eq!(TweetListing::space("123"), TweetListing::BASE_SIZE + 3);
        assert_eq!(
            TweetListing::space("1234567890123456789"),
            TweetListing::BASE_SIZE + 19
        );
    }

    #[test]
    fn test_sale_state_unclaimed() {
        let listing = TweetListing {
            tweet_id: String::new(),
            owner: None,
            price: None,
        };
        assert_eq!(listing.sale_state(), None);
    }

    #[test]
    fn test_record_sale_sets_both_fields() {
        let mut listing = TweetListing {
            tweet_id: "123".to_string(),
            owner: None,
            price: None,
        };
        let buyer = Pubkey::new_unique();
        listing.record_sale(buyer, 1_000_000);
        assert_eq!(listing.sale_state(), Some((buyer, 1_000_000)));
    }
}
