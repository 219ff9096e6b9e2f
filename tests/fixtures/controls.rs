// Controls for the integration tests: an account read model fed by a deposit event.

use chrono::{DateTime, Utc};
use entity_projection::core::transforms;
use entity_projection::{Entity, Message, Projection, impl_attributes};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    pub id: Option<String>,
    pub balance: i64,
    pub sequence: Option<u64>,
    pub updated_time: Option<DateTime<Utc>>,
}
impl Entity for Account {
    fn entity_type(&self) -> &str {
        "Account"
    }
}
impl_attributes!(Account {
    id,
    balance,
    sequence,
    updated_time,
});

#[derive(Debug, Clone, PartialEq)]
pub struct Deposited {
    pub account_id: String,
    pub amount: i64,
    pub sequence: u64,
    pub time: String,
}
impl Message for Deposited {
    fn message_type(&self) -> &str {
        "Deposited"
    }
}
impl_attributes!(Deposited {
    account_id,
    amount,
    sequence,
    time,
});

pub fn make_account() -> Account {
    Account {
        id: Some("acc-fixed-0001".to_string()),
        balance: 100,
        sequence: Some(4),
        updated_time: None,
    }
}

pub fn make_deposited_event() -> Deposited {
    Deposited {
        account_id: "acc-fixed-0001".to_string(),
        amount: 11,
        sequence: 5,
        time: "2024-03-01T12:30:00Z".to_string(),
    }
}

pub struct AccountProjection;

impl Projection<Account, Deposited> for AccountProjection {
    fn apply(&self, entity: &mut Account, event: &Deposited) -> anyhow::Result<()> {
        entity.balance += event.amount;
        entity.sequence = Some(event.sequence);
        entity.updated_time = Some(transforms::time(event.time.clone())?);
        Ok(())
    }

    fn projection_name(&self) -> &str {
        "accounts::AccountProjection"
    }
}
