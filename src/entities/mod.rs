// Entity Models
//
// Each entity has:
// - Sequential id assigned by its store on first save
// - Customer: ordered list of owned account numbers
// - Account: opaque immutable number + owner id

pub mod account;
pub mod customer;

pub use account::{Account, AccountId, Currency};
pub use customer::{Customer, CustomerId, CustomerPatch};
