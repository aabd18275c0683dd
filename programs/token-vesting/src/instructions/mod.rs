pub mod claim_token;
pub mod create_employee_account;
pub mod create_vesting_account;
pub mod fund_treasury;
pub mod lock;
pub mod unlock;

pub use claim_token::*;
pub use create_employee_account::*;
pub use create_vesting_account::*;
pub use fund_treasury::*;
pub use lock::*;
pub use unlock::*;
