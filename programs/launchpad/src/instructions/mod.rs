pub mod activate_launch;
pub mod approve_bid;
pub mod claim_tokens;
pub mod close_bid;
pub mod init_protocol;
pub mod launch_product;
pub mod reject_bid;
pub mod user_bid_product;
pub mod withdraw_pending_bid;
pub mod withdraw_proceeds;

pub use activate_launch::*;
pub use approve_bid::*;
pub use claim_tokens::*;
pub use close_bid::*;
pub use init_protocol::*;
pub use launch_product::*;
pub use reject_bid::*;
pub use user_bid_product::*;
pub use withdraw_pending_bid::*;
pub use withdraw_proceeds::*;
