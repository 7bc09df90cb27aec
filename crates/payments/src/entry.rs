use core::str::FromStr;

use serde::{Deserialize, Serialize};

use payflex_core::{DocumentId, DomainError, Entity};

use crate::recalc::Recalculate;

/// Payment entry identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentEntryId(pub DocumentId);

impl PaymentEntryId {
    pub fn new(id: DocumentId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for PaymentEntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Counter-entity kinds a payment entry can be made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyType {
    Employee,
    Supplier,
    Customer,
}

impl PartyType {
    pub fn as_str(self) -> &'static str {
        match self {
            PartyType::Employee => "Employee",
            PartyType::Supplier => "Supplier",
            PartyType::Customer => "Customer",
        }
    }
}

impl FromStr for PartyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Employee" => Ok(PartyType::Employee),
            "Supplier" => Ok(PartyType::Supplier),
            "Customer" => Ok(PartyType::Customer),
            other => Err(DomainError::validation(format!("unknown party type '{other}'"))),
        }
    }
}

/// Direction of money relative to the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    /// Money leaves through `paid_from`.
    Pay,
    /// Money arrives in `paid_to`.
    Receive,
}

impl PaymentType {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentType::Pay => "Pay",
            PaymentType::Receive => "Receive",
        }
    }
}

impl FromStr for PaymentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pay" => Ok(PaymentType::Pay),
            "Receive" => Ok(PaymentType::Receive),
            other => Err(DomainError::validation(format!("unknown payment type '{other}'"))),
        }
    }
}

/// A payment entry as handed over by the document lifecycle.
///
/// Fields are kept raw (strings, optional amounts) because hooks run before
/// the document has been validated. Amounts are in the smallest currency
/// unit (e.g. cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    pub id: PaymentEntryId,
    #[serde(default)]
    pub party_type: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    pub payment_type: String,
    #[serde(default)]
    pub paid_from: Option<String>,
    #[serde(default)]
    pub paid_to: Option<String>,
    #[serde(default)]
    pub paid_amount: Option<i64>,
    #[serde(default)]
    pub received_amount: Option<i64>,
}

impl PaymentEntry {
    /// Blank entry of the given payment type.
    pub fn new(id: PaymentEntryId, payment_type: impl Into<String>) -> Self {
        Self {
            id,
            party_type: None,
            party: None,
            payment_type: payment_type.into(),
            paid_from: None,
            paid_to: None,
            paid_amount: None,
            received_amount: None,
        }
    }

    pub fn with_party(mut self, party_type: impl Into<String>, party: impl Into<String>) -> Self {
        self.party_type = Some(party_type.into());
        self.party = Some(party.into());
        self
    }

    pub fn with_paid_from(mut self, account: impl Into<String>) -> Self {
        self.paid_from = Some(account.into());
        self
    }

    pub fn with_paid_to(mut self, account: impl Into<String>) -> Self {
        self.paid_to = Some(account.into());
        self
    }

    pub fn with_amounts(mut self, paid_amount: Option<i64>, received_amount: Option<i64>) -> Self {
        self.paid_amount = paid_amount;
        self.received_amount = received_amount;
        self
    }

    /// Typed party type; `Ok(None)` when unset.
    pub fn party_type(&self) -> Result<Option<PartyType>, DomainError> {
        self.party_type.as_deref().map(str::parse).transpose()
    }

    pub fn payment_type(&self) -> Result<PaymentType, DomainError> {
        self.payment_type.parse()
    }

    /// Drop the party association.
    pub fn clear_party(&mut self) {
        self.party_type = None;
        self.party = None;
    }
}

impl Entity for PaymentEntry {
    type Id = PaymentEntryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A plain entry exposes no recalculation steps.
impl Recalculate for PaymentEntry {}

/// A document that carries payment entry fields and may recalculate itself.
///
/// Hosts wrap their own document type and expose the payment fields through
/// `entry`/`entry_mut`; recalculation steps come from [`Recalculate`].
pub trait PaymentDocument: Recalculate {
    fn entry(&self) -> &PaymentEntry;
    fn entry_mut(&mut self) -> &mut PaymentEntry;
}

impl PaymentDocument for PaymentEntry {
    fn entry(&self) -> &PaymentEntry {
        self
    }

    fn entry_mut(&mut self) -> &mut PaymentEntry {
        self
    }
}
