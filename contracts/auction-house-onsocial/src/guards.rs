use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), MarketplaceError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(MarketplaceError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub(crate) fn check_at_least_one_yocto() -> Result<(), MarketplaceError> {
    if env::attached_deposit().as_yoctonear() < ONE_YOCTO.as_yoctonear() {
        return Err(MarketplaceError::InsufficientDeposit(
            "Requires attached deposit of at least 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(
        &self,
        actor_id: &AccountId,
    ) -> Result<(), MarketplaceError> {
        if actor_id != &self.owner_id {
            return Err(MarketplaceError::only_owner("contract owner"));
        }
        Ok(())
    }

    pub(crate) fn check_coin_accepted(&self, coin: &CoinId) -> Result<(), MarketplaceError> {
        match coin {
            CoinId::Near => Ok(()),
            CoinId::Ft(contract_id) if self.accepted_fts.contains(contract_id) => Ok(()),
            CoinId::Ft(contract_id) => Err(MarketplaceError::InvalidInput(format!(
                "Fungible token {} is not accepted",
                contract_id
            ))),
        }
    }
}

pub(crate) fn check_not_self_trade(
    actor_id: &AccountId,
    seller_id: &AccountId,
    what: &str,
) -> Result<(), MarketplaceError> {
    if actor_id == seller_id {
        return Err(MarketplaceError::InvalidInput(format!(
            "Seller cannot {} their own item",
            what
        )));
    }
    Ok(())
}
