use serde::{Deserialize, Serialize};

/// Transaction kind. Stored as "income" / "expense" in Mongo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

impl TransactionKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeCategory {
    Salary,
    Bonus,
    Freelance,
    Investments,
    Gifts,
    #[serde(rename = "Rental Income")]
    RentalIncome,
    #[serde(rename = "Other Income")]
    OtherIncome,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 7] = [
        Self::Salary,
        Self::Bonus,
        Self::Freelance,
        Self::Investments,
        Self::Gifts,
        Self::RentalIncome,
        Self::OtherIncome,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Bonus => "Bonus",
            Self::Freelance => "Freelance",
            Self::Investments => "Investments",
            Self::Gifts => "Gifts",
            Self::RentalIncome => "Rental Income",
            Self::OtherIncome => "Other Income",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Shopping,
    Health,
    Housing,
    Education,
    Subscriptions,
    #[serde(rename = "Other Expense")]
    OtherExpense,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 10] = [
        Self::Food,
        Self::Transport,
        Self::Entertainment,
        Self::Utilities,
        Self::Shopping,
        Self::Health,
        Self::Housing,
        Self::Education,
        Self::Subscriptions,
        Self::OtherExpense,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Housing => "Housing",
            Self::Education => "Education",
            Self::Subscriptions => "Subscriptions",
            Self::OtherExpense => "Other Expense",
        }
    }
}

/// A category valid for exactly one transaction kind. Serializes to the
/// display name ("Rental Income", "Food", ...) so documents stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Income(IncomeCategory),
    Expense(ExpenseCategory),
}

impl Category {
    /// Parses a category name against the given kind. Names from the other
    /// kind's set are rejected, so an "income" transaction can never land in
    /// "Food".
    pub fn parse_for_kind(kind: TransactionKind, s: &str) -> Option<Self> {
        match kind {
            TransactionKind::Income => IncomeCategory::parse(s).map(Self::Income),
            TransactionKind::Expense => ExpenseCategory::parse(s).map(Self::Expense),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income(c) => c.as_str(),
            Self::Expense(c) => c.as_str(),
        }
    }
}
