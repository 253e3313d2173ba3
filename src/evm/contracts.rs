//! Contract bindings for the two external protocols and the ERC-20 standard.
//!
//! Generated from human-readable ABI fragments; only the functions the
//! pipeline actually calls are bound.

use ethers::prelude::abigen;

abigen!(
    Erc20,
    r#"[
        function approve(address spender, uint256 amount) external returns (bool)
    ]"#
);

abigen!(
    UniswapV3Pool,
    r#"[
        function token0() external view returns (address)
        function token1() external view returns (address)
        function fee() external view returns (uint24)
    ]"#
);

abigen!(
    SwapRouter,
    r#"[
        struct ExactInputSingleParams { address tokenIn; address tokenOut; uint24 fee; address recipient; uint256 amountIn; uint256 amountOutMinimum; uint160 sqrtPriceLimitX96 }
        function exactInputSingle(ExactInputSingleParams params) external payable returns (uint256 amountOut)
    ]"#
);

abigen!(
    AavePool,
    r#"[
        function supply(address asset, uint256 amount, address onBehalfOf, uint16 referralCode) external
    ]"#
);

// The factory and the Aave addresses provider both expose a `getPool`
// function, so their generated call/return types would collide at module
// scope. Keep each binding in its own module and surface the contract type.
pub use factory::UniswapV3Factory;
pub use pool_provider::AavePoolAddressesProvider;

mod factory {
    use ethers::prelude::abigen;

    abigen!(
        UniswapV3Factory,
        r#"[
            function getPool(address tokenA, address tokenB, uint24 fee) external view returns (address pool)
        ]"#
    );
}

mod pool_provider {
    use ethers::prelude::abigen;

    abigen!(
        AavePoolAddressesProvider,
        r#"[
            function getPool() external view returns (address)
        ]"#
    );
}
