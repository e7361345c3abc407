//! Category labels. The set is open: custom rules may introduce new labels,
//! but these are the ones the built-in rule table produces.

pub const INCOME: &str = "Income";
pub const FOOD_AND_DINING: &str = "Food & Dining";
pub const GROCERIES: &str = "Groceries";
pub const SHOPPING: &str = "Shopping";
pub const TRANSPORTATION: &str = "Transportation";
pub const TRAVEL: &str = "Travel";
pub const ENTERTAINMENT: &str = "Entertainment";
pub const BILLS_AND_UTILITIES: &str = "Bills & Utilities";
pub const HEALTH_AND_MEDICAL: &str = "Health & Medical";
pub const EDUCATION: &str = "Education";
pub const PERSONAL_CARE: &str = "Personal Care";
pub const INVESTMENTS: &str = "Investments";
pub const INSURANCE: &str = "Insurance";
pub const RENT: &str = "Rent";
pub const EMI_AND_LOANS: &str = "EMI & Loans";
pub const GIFTS_AND_DONATIONS: &str = "Gifts & Donations";
pub const TAXES_AND_FEES: &str = "Taxes & Fees";
pub const CASH: &str = "Cash";
pub const TRANSFER: &str = "Transfer";

/// Catch-all bucket for empty or unmatched descriptions.
pub const OTHERS: &str = "Others";
