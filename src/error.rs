// Error type for the application
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Token approval failed")]
    ApprovalFailed,

    #[error("No pool exists for the requested token pair and fee tier")]
    PoolNotFound,

    #[error("Ethereum client error: {0}")]
    EthereumClient(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Transaction dropped before confirmation")]
    TransactionDropped,
}
