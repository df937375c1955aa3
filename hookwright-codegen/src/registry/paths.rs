//! Import references for the contract libraries generated hooks build on.

use crate::generation::ImportRef;

// uniswap-hooks
pub const BASE_HOOK: ImportRef =
    ImportRef::new("BaseHook", "@openzeppelin/uniswap-hooks/src/base/BaseHook.sol");
pub const BASE_ASYNC_SWAP: ImportRef = ImportRef::new(
    "BaseAsyncSwap",
    "@openzeppelin/uniswap-hooks/src/base/BaseAsyncSwap.sol",
);
pub const BASE_CUSTOM_ACCOUNTING: ImportRef = ImportRef::new(
    "BaseCustomAccounting",
    "@openzeppelin/uniswap-hooks/src/base/BaseCustomAccounting.sol",
);
pub const BASE_CUSTOM_CURVE: ImportRef = ImportRef::new(
    "BaseCustomCurve",
    "@openzeppelin/uniswap-hooks/src/base/BaseCustomCurve.sol",
);
pub const BASE_DYNAMIC_FEE: ImportRef = ImportRef::new(
    "BaseDynamicFee",
    "@openzeppelin/uniswap-hooks/src/fee/BaseDynamicFee.sol",
);
pub const BASE_OVERRIDE_FEE: ImportRef = ImportRef::new(
    "BaseOverrideFee",
    "@openzeppelin/uniswap-hooks/src/fee/BaseOverrideFee.sol",
);
pub const BASE_DYNAMIC_AFTER_FEE: ImportRef = ImportRef::new(
    "BaseDynamicAfterFee",
    "@openzeppelin/uniswap-hooks/src/fee/BaseDynamicAfterFee.sol",
);
pub const BASE_HOOK_FEE: ImportRef = ImportRef::new(
    "BaseHookFee",
    "@openzeppelin/uniswap-hooks/src/fee/BaseHookFee.sol",
);
pub const ANTI_SANDWICH_HOOK: ImportRef = ImportRef::new(
    "AntiSandwichHook",
    "@openzeppelin/uniswap-hooks/src/general/AntiSandwichHook.sol",
);
pub const LIMIT_ORDER_HOOK: ImportRef = ImportRef::new(
    "LimitOrderHook",
    "@openzeppelin/uniswap-hooks/src/general/LimitOrderHook.sol",
);
pub const LIQUIDITY_PENALTY_HOOK: ImportRef = ImportRef::new(
    "LiquidityPenaltyHook",
    "@openzeppelin/uniswap-hooks/src/general/LiquidityPenaltyHook.sol",
);
pub const RE_HYPOTHECATION_HOOK: ImportRef = ImportRef::new(
    "ReHypothecationHook",
    "@openzeppelin/uniswap-hooks/src/general/ReHypothecationHook.sol",
);
pub const CURRENCY_SETTLER: ImportRef = ImportRef::new(
    "CurrencySettler",
    "@openzeppelin/uniswap-hooks/src/utils/CurrencySettler.sol",
);

// v4-core
pub const I_POOL_MANAGER: ImportRef = ImportRef::new(
    "IPoolManager",
    "@uniswap/v4-core/src/interfaces/IPoolManager.sol",
);
pub const HOOKS: ImportRef = ImportRef::new("Hooks", "@uniswap/v4-core/src/libraries/Hooks.sol");
pub const POOL_KEY: ImportRef = ImportRef::new("PoolKey", "@uniswap/v4-core/src/types/PoolKey.sol");
pub const CURRENCY: ImportRef =
    ImportRef::new("Currency", "@uniswap/v4-core/src/types/Currency.sol");
pub const BALANCE_DELTA: ImportRef =
    ImportRef::new("BalanceDelta", "@uniswap/v4-core/src/types/BalanceDelta.sol");
pub const BALANCE_DELTA_LIBRARY: ImportRef = ImportRef::new(
    "BalanceDeltaLibrary",
    "@uniswap/v4-core/src/types/BalanceDelta.sol",
);
pub const TO_BALANCE_DELTA: ImportRef =
    ImportRef::new("toBalanceDelta", "@uniswap/v4-core/src/types/BalanceDelta.sol");
pub const BEFORE_SWAP_DELTA: ImportRef = ImportRef::new(
    "BeforeSwapDelta",
    "@uniswap/v4-core/src/types/BeforeSwapDelta.sol",
);
pub const BEFORE_SWAP_DELTA_LIBRARY: ImportRef = ImportRef::new(
    "BeforeSwapDeltaLibrary",
    "@uniswap/v4-core/src/types/BeforeSwapDelta.sol",
);
pub const TO_BEFORE_SWAP_DELTA: ImportRef = ImportRef::new(
    "toBeforeSwapDelta",
    "@uniswap/v4-core/src/types/BeforeSwapDelta.sol",
);
pub const SWAP_PARAMS: ImportRef =
    ImportRef::new("SwapParams", "@uniswap/v4-core/src/types/PoolOperation.sol");
pub const MODIFY_LIQUIDITY_PARAMS: ImportRef = ImportRef::new(
    "ModifyLiquidityParams",
    "@uniswap/v4-core/src/types/PoolOperation.sol",
);

// openzeppelin-contracts
pub const OWNABLE: ImportRef =
    ImportRef::new("Ownable", "@openzeppelin/contracts/access/Ownable.sol");
pub const ACCESS_CONTROL: ImportRef =
    ImportRef::new("AccessControl", "@openzeppelin/contracts/access/AccessControl.sol");
pub const ACCESS_MANAGED: ImportRef = ImportRef::new(
    "AccessManaged",
    "@openzeppelin/contracts/access/manager/AccessManaged.sol",
);
pub const PAUSABLE: ImportRef =
    ImportRef::new("Pausable", "@openzeppelin/contracts/utils/Pausable.sol");
pub const ERC20: ImportRef =
    ImportRef::new("ERC20", "@openzeppelin/contracts/token/ERC20/ERC20.sol");
pub const ERC6909: ImportRef = ImportRef::new(
    "ERC6909",
    "@openzeppelin/contracts/token/ERC6909/draft-ERC6909.sol",
);
pub const ERC1155: ImportRef =
    ImportRef::new("ERC1155", "@openzeppelin/contracts/token/ERC1155/ERC1155.sol");
pub const SAFE_CAST: ImportRef =
    ImportRef::new("SafeCast", "@openzeppelin/contracts/utils/math/SafeCast.sol");
pub const TRANSIENT_SLOT: ImportRef =
    ImportRef::new("TransientSlot", "@openzeppelin/contracts/utils/TransientSlot.sol");
