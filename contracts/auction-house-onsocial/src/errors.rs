use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum MarketplaceError {
    NotOwner(String),
    AlreadyActive(String),
    NoActiveAuction(String),
    NoActiveListing(String),
    BidTooLow(String),
    AuctionExpired(String),
    AuctionNotEnded(String),
    ListingExpired(String),
    ListingNotStarted(String),
    CapabilityExpired(String),
    CapabilityAlreadyConsumed(String),
    InsufficientFunds(String),
    Unauthorized(String),
    InvalidInput(String),
    NotFound(String),
    InvalidState(String),
    InsufficientDeposit(String),
    InternalError(String),
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOwner(msg) => write!(f, "Not owner: {}", msg),
            Self::AlreadyActive(msg) => write!(f, "Already active: {}", msg),
            Self::NoActiveAuction(msg) => write!(f, "No active auction: {}", msg),
            Self::NoActiveListing(msg) => write!(f, "No active listing: {}", msg),
            Self::BidTooLow(msg) => write!(f, "Bid too low: {}", msg),
            Self::AuctionExpired(msg) => write!(f, "Auction expired: {}", msg),
            Self::AuctionNotEnded(msg) => write!(f, "Auction not ended: {}", msg),
            Self::ListingExpired(msg) => write!(f, "Listing expired: {}", msg),
            Self::ListingNotStarted(msg) => write!(f, "Listing not started: {}", msg),
            Self::CapabilityExpired(msg) => write!(f, "Capability expired: {}", msg),
            Self::CapabilityAlreadyConsumed(msg) => {
                write!(f, "Capability already consumed: {}", msg)
            }
            Self::InsufficientFunds(msg) => write!(f, "Insufficient funds: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl MarketplaceError {
    pub fn no_active_auction() -> Self {
        Self::NoActiveAuction("No auction entry for this seller, coin and item".into())
    }
    pub fn no_active_listing() -> Self {
        Self::NoActiveListing("No listing entry for this seller, coin and item".into())
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn insufficient_funds(required: u128, available: u128) -> Self {
        Self::InsufficientFunds(format!(
            "Requires {} but only {} is available",
            required, available
        ))
    }
    pub fn overflow(context: &str) -> Self {
        Self::InternalError(format!("Arithmetic overflow in {}", context))
    }
}
