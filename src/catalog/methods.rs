//! Category tables, transcribed from the protocol documentation listed below.
//!
//! Sources:
//! - Ethereum EIPs: <https://eips.ethereum.org/>
//! - Uniswap: <https://docs.uniswap.org/>
//! - MakerDAO: <https://docs.makerdao.com/>
//! - Aave: <https://docs.aave.com/>
//! - Compound: <https://compound.finance/docs>
//! - WETH: <https://weth.io/>
//! - Lido: <https://docs.lido.fi/>
//! - StakeWise: <https://docs.stakewise.io/>
//! - OpenZeppelin Contracts: <https://docs.openzeppelin.com/contracts/>
//! - Curve Finance: <https://curve.readthedocs.io/>
//!
//! Selectors are copied as published. Several of them are shared by
//! unrelated entries (`0x2e1a7d4d`, `0x60806040`, ...) and are kept as-is.

use super::{Category, MethodEntry};
use crate::flow::FlowType;

pub const TRANSFER_TYPES: Category = Category::new(
    "transfer_types",
    "TRANSFER TYPES",
    &[
        MethodEntry::unsigned(
            "NATIVE_TRANSFER",
            "Direct transfer of native chain token (ETH, BNB, etc.)",
            FlowType::Bothflow,
        ),
        MethodEntry::bothflow("ERC20_TRANSFER", "0xa9059cbb", "Standard ERC20 token transfer"),
        MethodEntry::bothflow(
            "ERC20_TRANSFER_FROM",
            "0x23b872dd",
            "ERC20 transfer on behalf of another address (requires approval)",
        ),
    ],
);

pub const TOKEN_CREATION_METHODS: Category = Category::new(
    "token_creation",
    "TOKEN CREATION METHODS",
    &[
        MethodEntry::outflow("CREATE_ERC20", "0x60806040", "Deploy new ERC20 token contract"),
        MethodEntry::outflow("CREATE_ERC721", "0x60806040", "Deploy new ERC721 (NFT) contract"),
        MethodEntry::outflow(
            "CREATE_ERC1155",
            "0x60806040",
            "Deploy new ERC1155 (Multi-token) contract",
        ),
        MethodEntry::outflow("MINT_TOKEN", "0x40c10f19", "Mint new tokens (if contract allows)"),
        MethodEntry::inflow("BURN_TOKEN", "0x42966c68", "Burn/destroy existing tokens"),
        MethodEntry::outflow("PAUSE_TOKEN", "0x8456cb59", "Pause token transfers (if supported)"),
        MethodEntry::outflow("UNPAUSE_TOKEN", "0x3f4ba83a", "Unpause token transfers"),
    ],
);

pub const WRAPPED_TOKEN_METHODS: Category = Category::new(
    "wrapped_token",
    "WRAPPED TOKEN METHODS",
    &[
        MethodEntry::outflow(
            "DEPOSIT",
            "0xd0e30db0",
            "Deposit native token (e.g., ETH) to receive wrapped version (e.g., WETH)",
        ),
        MethodEntry::outflow(
            "DEPOSIT_TO",
            "0xb760faf9",
            "Deposit native token and send wrapped tokens to a specific address",
        ),
        MethodEntry::inflow(
            "WITHDRAW",
            "0x2e1a7d4d",
            "Withdraw native token by burning wrapped token",
        ),
        MethodEntry::inflow(
            "WITHDRAW_TO",
            "0x205c2878",
            "Withdraw native token to a specific address",
        ),
    ],
);

pub const UNISWAP_V2_METHODS: Category = Category::new(
    "uniswap_v2",
    "UNISWAP V2 METHODS",
    &[
        MethodEntry::bothflow(
            "SWAP_EXACT_TOKENS_FOR_TOKENS",
            "0x38ed1739",
            "Swap exact amount of input tokens for output tokens",
        ),
        MethodEntry::bothflow(
            "SWAP_TOKENS_FOR_EXACT_TOKENS",
            "0x8803dbee",
            "Swap tokens for exact amount of output tokens",
        ),
        MethodEntry::bothflow(
            "SWAP_EXACT_ETH_FOR_TOKENS",
            "0x7ff36ab5",
            "Swap exact amount of ETH for tokens",
        ),
        MethodEntry::bothflow(
            "SWAP_TOKENS_FOR_EXACT_ETH",
            "0x4a25d94a",
            "Swap tokens for exact amount of ETH",
        ),
        MethodEntry::outflow("ADD_LIQUIDITY", "0xe8e33700", "Add liquidity to token-token pair"),
        MethodEntry::outflow("ADD_LIQUIDITY_ETH", "0xf305d719", "Add liquidity to ETH-token pair"),
        MethodEntry::inflow(
            "REMOVE_LIQUIDITY",
            "0xbaa2abde",
            "Remove liquidity from token-token pair",
        ),
        MethodEntry::inflow(
            "REMOVE_LIQUIDITY_ETH",
            "0x02751cec",
            "Remove liquidity from ETH-token pair",
        ),
    ],
);

pub const UNISWAP_V3_METHODS: Category = Category::new(
    "uniswap_v3",
    "UNISWAP V3 METHODS",
    &[
        MethodEntry::outflow(
            "MINT",
            "0x88316456",
            "Create new position and mint NFT position token",
        ),
        MethodEntry::outflow(
            "INCREASE_LIQUIDITY",
            "0x219f5d17",
            "Add liquidity to existing position",
        ),
        MethodEntry::inflow(
            "DECREASE_LIQUIDITY",
            "0x0c49ccbe",
            "Remove liquidity from existing position",
        ),
        MethodEntry::inflow("COLLECT_FEES", "0x4f1eb3d8", "Collect accumulated fees"),
        MethodEntry::bothflow(
            "SWAP_EXACT_INPUT",
            "0xc04b8d59",
            "Swap exact amount of input tokens",
        ),
        MethodEntry::bothflow(
            "SWAP_EXACT_OUTPUT",
            "0x09b81346",
            "Swap for exact amount of output tokens",
        ),
    ],
);

pub const UNISWAP_V4_METHODS: Category = Category::new(
    "uniswap_v4",
    "UNISWAP V4 METHODS",
    &[
        MethodEntry::outflow(
            "LOCK_LIQUIDITY",
            "0x6b5c432c",
            "Lock liquidity in a concentrated position",
        ),
        MethodEntry::inflow("UNLOCK_LIQUIDITY", "0x2f4f5723", "Unlock previously locked liquidity"),
        MethodEntry::bothflow("SWAP_WITH_HOOKS", "0x7c025200", "Swap tokens with custom hooks"),
        MethodEntry::bothflow("FLASH", "0x490e6cbc", "Execute flash swap with hooks"),
    ],
);

pub const ERC721_METHODS: Category = Category::new(
    "erc721",
    "ERC721 METHODS",
    &[
        MethodEntry::bothflow("TRANSFER", "0x23b872dd", "Transfer NFT from one address to another"),
        MethodEntry::bothflow(
            "SAFE_TRANSFER",
            "0x42842e0e",
            "Safely transfer NFT with additional checks",
        ),
        MethodEntry::outflow("MINT", "0x40c10f19", "Mint new NFT"),
        MethodEntry::inflow("BURN", "0x42966c68", "Burn/destroy NFT"),
    ],
);

pub const ERC1155_METHODS: Category = Category::new(
    "erc1155",
    "ERC1155 METHODS",
    &[
        MethodEntry::bothflow("TRANSFER_SINGLE", "0xf242432a", "Transfer single token type"),
        MethodEntry::bothflow("TRANSFER_BATCH", "0x2eb2c2d6", "Transfer multiple token types"),
        MethodEntry::outflow("MINT", "0x731133e9", "Mint new tokens"),
        MethodEntry::inflow("BURN", "0xf5298aca", "Burn tokens"),
    ],
);

pub const APPROVAL_METHODS: Category = Category::new(
    "approval",
    "APPROVAL METHODS",
    &[
        MethodEntry::outflow("ERC20_APPROVE", "0x095ea7b3", "Approve spender for ERC20 tokens"),
        MethodEntry::outflow("ERC721_APPROVE", "0x095ea7b3", "Approve operator for single NFT"),
        MethodEntry::outflow("ERC721_APPROVE_ALL", "0xa22cb465", "Approve operator for all NFTs"),
        MethodEntry::outflow(
            "ERC1155_APPROVE_ALL",
            "0xa22cb465",
            "Approve operator for all token types",
        ),
    ],
);

pub const GOVERNANCE_METHODS: Category = Category::new(
    "governance",
    "GOVERNANCE METHODS",
    &[
        MethodEntry::outflow("PROPOSE", "0x7d5e81e2", "Create new governance proposal"),
        MethodEntry::outflow("CAST_VOTE", "0x56781388", "Vote on governance proposal"),
        MethodEntry::outflow("EXECUTE", "0xfe0d94c1", "Execute approved governance proposal"),
        MethodEntry::outflow("CANCEL", "0x40e58ee5", "Cancel governance proposal"),
        MethodEntry::outflow("DELEGATE", "0x5c19a95c", "Delegate voting power"),
    ],
);

pub const BRIDGE_METHODS: Category = Category::new(
    "bridge",
    "BRIDGE METHODS",
    &[
        MethodEntry::outflow("BRIDGE_TOKENS", "0x8b9e4f93", "Bridge tokens to another chain"),
        MethodEntry::inflow(
            "CLAIM_BRIDGED_TOKENS",
            "0x2e1a7d4d",
            "Claim tokens bridged from another chain",
        ),
        MethodEntry::bothflow("REVERSE_BRIDGE", "0x9dc29fac", "Return tokens to original chain"),
    ],
);

pub const MAKER_METHODS: Category = Category::new(
    "maker",
    "MAKER METHODS",
    &[
        MethodEntry::outflow("CREATE_VAULT", "0x610b5925", "Create new CDP/Vault"),
        MethodEntry::outflow("DEPOSIT_COLLATERAL", "0x6e2bdb95", "Add collateral to vault"),
        MethodEntry::inflow("WITHDRAW_COLLATERAL", "0x9f678cca", "Remove collateral from vault"),
        MethodEntry::inflow("GENERATE_DAI", "0x7f8661a1", "Borrow DAI against collateral"),
        MethodEntry::outflow("PAYBACK_DAI", "0x3b4da69f", "Repay borrowed DAI"),
    ],
);

pub const STAKING_METHODS: Category = Category::new(
    "staking",
    "STAKING METHODS",
    &[
        MethodEntry::outflow("STAKE", "0xa694fc3a", "Stake tokens in protocol"),
        MethodEntry::inflow("UNSTAKE", "0x2e1a7d4d", "Withdraw staked tokens"),
        MethodEntry::inflow("CLAIM_REWARDS", "0x2e7ba6ef", "Claim accumulated staking rewards"),
        MethodEntry::inflow("EXIT", "0xe9fad8ee", "Withdraw all tokens and claim rewards"),
        // Liquid staking
        MethodEntry::outflow("SUBMIT", "0x4f498c73", "Submit ETH for liquid staking derivatives"),
        MethodEntry::outflow(
            "REQUEST_WITHDRAWALS",
            "0x19aa6257",
            "Request withdrawal of staked tokens",
        ),
        MethodEntry::inflow("CLAIM_WITHDRAWAL", "0x0962ef79", "Claim completed withdrawal"),
    ],
);

pub const FLASH_LOAN_METHODS: Category = Category::new(
    "flash_loan",
    "FLASH LOAN METHODS",
    &[
        MethodEntry::bothflow("FLASH_LOAN", "0x5cffe9de", "Execute flash loan"),
        MethodEntry::bothflow(
            "FLASH_LOAN_MULTIPLE",
            "0x94da7864",
            "Execute flash loan with multiple assets",
        ),
    ],
);

pub const CURVE_METHODS: Category = Category::new(
    "curve",
    "CURVE METHODS",
    &[
        MethodEntry::bothflow("EXCHANGE", "0x3df02124", "Swap tokens in Curve pool"),
        MethodEntry::outflow("ADD_LIQUIDITY", "0x0b4c7e4d", "Add liquidity to Curve pool"),
        MethodEntry::inflow("REMOVE_LIQUIDITY", "0x5b36389c", "Remove liquidity from Curve pool"),
        MethodEntry::inflow("CLAIM_FEES", "0xd294f093", "Claim accumulated trading fees"),
    ],
);

pub const COMPOUND_METHODS: Category = Category::new(
    "compound",
    "COMPOUND METHODS",
    &[
        MethodEntry::outflow("SUPPLY", "0x1249c58b", "Supply assets to Compound"),
        MethodEntry::inflow("WITHDRAW", "0x852a12e3", "Withdraw supplied assets"),
        MethodEntry::inflow("BORROW", "0xc5ebeaec", "Borrow assets from Compound"),
        MethodEntry::outflow("REPAY_BORROW", "0x0e752702", "Repay borrowed assets"),
    ],
);
