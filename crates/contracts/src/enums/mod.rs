pub mod deal_size;
pub mod order_status;

pub use deal_size::DealSize;
pub use order_status::OrderStatus;
