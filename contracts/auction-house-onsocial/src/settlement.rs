//! Payment-plus-item settlement. Every leg is validated before any leg is applied.

use crate::*;

pub(crate) enum PaymentSource {
    /// The account executing this call; may spend NEAR attached to the call.
    Caller(AccountId),
    /// Funds already held in the coin's bid escrow.
    Escrow,
}

pub(crate) struct Payment {
    pub coin: CoinId,
    pub source: PaymentSource,
    pub payee: AccountId,
    pub amount: u128,
}

pub(crate) struct Settlement {
    pub capability: ItemCapability,
    pub item_recipient: AccountId,
    pub payment: Option<Payment>,
}

#[derive(Debug)]
pub(crate) struct SettlementReceipt {
    pub item: ItemId,
    pub units: u64,
    pub item_recipient: AccountId,
    pub paid: u128,
}

impl Contract {
    pub(crate) fn check_settlement(
        &self,
        capability: &ItemCapability,
        item_recipient: &AccountId,
        payment: Option<&Payment>,
    ) -> Result<(), MarketplaceError> {
        self.check_redeemable(capability)?;
        self.item_balance(item_recipient, capability.item())
            .checked_add(capability.amount())
            .ok_or_else(|| MarketplaceError::overflow("item balance"))?;

        if let Some(payment) = payment {
            match &payment.source {
                PaymentSource::Caller(payer) => {
                    self.check_caller_funds(payer, &payment.coin, payment.amount)?
                }
                PaymentSource::Escrow => self.check_escrow_release(&payment.coin, payment.amount)?,
            }
            self.coin_balance(&payment.payee, &payment.coin)
                .checked_add(payment.amount)
                .ok_or_else(|| MarketplaceError::overflow("coin balance"))?;
        }
        Ok(())
    }

    pub(crate) fn settle(
        &mut self,
        settlement: Settlement,
    ) -> Result<SettlementReceipt, MarketplaceError> {
        let Settlement {
            capability,
            item_recipient,
            payment,
        } = settlement;
        self.check_settlement(&capability, &item_recipient, payment.as_ref())?;

        let paid = match payment {
            Some(Payment {
                coin,
                source,
                payee,
                amount,
            }) => {
                match source {
                    PaymentSource::Caller(payer) => {
                        self.draw_caller_funds(&payer, &coin, amount)?;
                        self.credit_coin(&payee, &coin, amount)?;
                    }
                    PaymentSource::Escrow => {
                        self.release_escrow(&payee, &coin, amount)?;
                    }
                }
                events::emit_payment_settled(&payee, &coin, amount);
                amount
            }
            None => 0,
        };

        let redeemed = self.escrow_redeem(capability, &item_recipient)?;
        Ok(SettlementReceipt {
            item: redeemed.item,
            units: redeemed.amount,
            item_recipient: redeemed.recipient,
            paid,
        })
    }
}
