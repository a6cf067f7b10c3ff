pub mod ledger;
pub mod risk;
