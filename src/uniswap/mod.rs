pub mod pool;
pub mod swap;

pub use pool::{fetch_pool_info, PoolInfo};
pub use swap::{build_swap_params, execute_swap};
