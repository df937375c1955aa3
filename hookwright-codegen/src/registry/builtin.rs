//! The built-in component registry: hook bases, access modules, pausable,
//! shares tokens and utility libraries.

use hookwright_options::{AccessKind, HookKind, Permission, SharesKind};

use super::{
    component::{Component, ComponentId, FunctionTemplate, InterfaceMethod, SharesPolicy, Utility},
    paths::*,
};
use crate::generation::ImportRef;

/// Binding key for the statement minting shares inside `_mint`.
pub const MINT_SHARES: &str = "mintShares";
/// Binding key for the statement burning shares inside `_burn`.
pub const BURN_SHARES: &str = "burnShares";

const POOL_MANAGER_TYPE: &str = "IPoolManager";
const POOL_MANAGER: &str = "_poolManager";

/// Every built-in component, in declaration order.
pub fn components() -> Vec<Component> {
    let mut components = hooks();
    components.extend(access());
    components.push(pausable());
    components.extend(shares());
    components.extend(utilities());
    components
}

fn hook(kind: HookKind, import: ImportRef) -> Component {
    let mut component = Component::contract(ComponentId::Hook(kind), kind.as_str())
        .imports(&[import, I_POOL_MANAGER])
        .ctor_param(POOL_MANAGER_TYPE, POOL_MANAGER)
        .ctor_init(format!("{}({})", kind.as_str(), POOL_MANAGER));
    if kind != HookKind::BaseHook {
        component = component.parent(ComponentId::Hook(HookKind::BaseHook));
    }
    component
}

fn hooks() -> Vec<Component> {
    use Permission::*;

    let custom_accounting_permissions = [BeforeInitialize, BeforeAddLiquidity, BeforeRemoveLiquidity];
    let dynamic_after_fee_permissions = [BeforeSwap, AfterSwap, AfterSwapReturnDelta];

    vec![
        hook(HookKind::BaseHook, BASE_HOOK),
        hook(HookKind::BaseAsyncSwap, BASE_ASYNC_SWAP)
            .permissions([BeforeSwap, BeforeSwapReturnDelta]),
        hook(HookKind::BaseCustomAccounting, BASE_CUSTOM_ACCOUNTING)
            .permissions(custom_accounting_permissions)
            .shares_policy(SharesPolicy::Required(SharesKind::Erc6909))
            .requires(
                FunctionTemplate::new("_getAddLiquidity")
                    .params(["uint160 sqrtPriceX96", "AddLiquidityParams memory params"])
                    .attributes([
                        "internal",
                        "override",
                        "returns (bytes memory modify, uint256 shares)",
                    ])
                    .body([
                        "// Compute the liquidity modification and the shares to mint",
                        "return (\"\", 0);",
                    ]),
            )
            .requires(
                FunctionTemplate::new("_getRemoveLiquidity")
                    .params(["RemoveLiquidityParams memory params"])
                    .attributes([
                        "internal",
                        "override",
                        "returns (bytes memory modify, uint256 shares)",
                    ])
                    .body([
                        "// Compute the liquidity modification and the shares to burn",
                        "return (\"\", 0);",
                    ]),
            )
            .requires(
                FunctionTemplate::new("_mint")
                    .params([
                        "AddLiquidityParams memory params",
                        "BalanceDelta",
                        "BalanceDelta",
                        "uint256 shares",
                    ])
                    .attributes(["internal", "override"])
                    .body(["${mintShares}"])
                    .imports(&[BALANCE_DELTA]),
            )
            .requires(
                FunctionTemplate::new("_burn")
                    .params([
                        "RemoveLiquidityParams memory",
                        "BalanceDelta",
                        "BalanceDelta",
                        "uint256 shares",
                    ])
                    .attributes(["internal", "override"])
                    .body(["${burnShares}"])
                    .imports(&[BALANCE_DELTA]),
            ),
        hook(HookKind::BaseCustomCurve, BASE_CUSTOM_CURVE)
            .parent(ComponentId::Hook(HookKind::BaseCustomAccounting))
            .permissions(custom_accounting_permissions)
            .permissions([BeforeSwap, BeforeSwapReturnDelta])
            .shares_policy(SharesPolicy::Required(SharesKind::Erc6909))
            .provides("_getAddLiquidity")
            .provides("_getRemoveLiquidity")
            .requires(
                FunctionTemplate::new("_getUnspecifiedAmount")
                    .params(["SwapParams calldata params"])
                    .attributes([
                        "internal",
                        "override",
                        "returns (uint256 unspecifiedAmount)",
                    ])
                    .body(["// Price the swap along the custom curve", "return 0;"])
                    .imports(&[SWAP_PARAMS]),
            )
            .requires(
                FunctionTemplate::new("_getAmountIn")
                    .params(["AddLiquidityParams memory params"])
                    .attributes([
                        "internal",
                        "override",
                        "returns (uint256 amount0, uint256 amount1, uint256 shares)",
                    ])
                    .body(["return (0, 0, 0);"]),
            )
            .requires(
                FunctionTemplate::new("_getAmountOut")
                    .params(["RemoveLiquidityParams memory params"])
                    .attributes([
                        "internal",
                        "override",
                        "returns (uint256 amount0, uint256 amount1, uint256 shares)",
                    ])
                    .body(["return (0, 0, 0);"]),
            ),
        hook(HookKind::BaseDynamicFee, BASE_DYNAMIC_FEE)
            .permissions([AfterInitialize])
            .requires(
                FunctionTemplate::new("_getFee")
                    .params(["PoolKey calldata key"])
                    .attributes(["internal", "override", "returns (uint24)"])
                    .body(["// Compute the LP fee for the pool", "return 0;"])
                    .imports(&[POOL_KEY]),
            ),
        hook(HookKind::BaseOverrideFee, BASE_OVERRIDE_FEE)
            .permissions([AfterInitialize, BeforeSwap])
            .requires(
                FunctionTemplate::new("_getFee")
                    .params([
                        "address sender",
                        "PoolKey calldata key",
                        "SwapParams calldata params",
                        "bytes calldata hookData",
                    ])
                    .attributes(["internal", "override", "returns (uint24)"])
                    .body(["// Compute the LP fee applied to this swap", "return 0;"])
                    .imports(&[POOL_KEY, SWAP_PARAMS]),
            ),
        hook(HookKind::BaseDynamicAfterFee, BASE_DYNAMIC_AFTER_FEE)
            .permissions(dynamic_after_fee_permissions)
            .requires(
                FunctionTemplate::new("_getTargetUnspecified")
                    .params([
                        "address sender",
                        "PoolKey calldata key",
                        "SwapParams calldata params",
                        "bytes calldata hookData",
                    ])
                    .attributes([
                        "internal",
                        "override",
                        "returns (uint256 targetUnspecifiedAmount, bool applyTarget)",
                    ])
                    .body(["return (0, false);"])
                    .imports(&[POOL_KEY, SWAP_PARAMS]),
            )
            .requires(
                FunctionTemplate::new("_afterSwapHandler")
                    .params([
                        "PoolKey calldata key",
                        "SwapParams calldata params",
                        "BalanceDelta delta",
                        "uint256 targetUnspecifiedAmount",
                        "uint256 feeAmount",
                    ])
                    .attributes(["internal", "override"])
                    .body(["// Handle the fee taken from the unspecified currency"])
                    .imports(&[POOL_KEY, SWAP_PARAMS, BALANCE_DELTA]),
            ),
        hook(HookKind::BaseHookFee, BASE_HOOK_FEE)
            .permissions([AfterSwap, AfterSwapReturnDelta])
            .requires(
                FunctionTemplate::new("_getHookFee")
                    .params([
                        "address sender",
                        "PoolKey calldata key",
                        "SwapParams calldata params",
                        "BalanceDelta delta",
                        "bytes calldata hookData",
                    ])
                    .attributes(["internal", "override", "returns (uint24)"])
                    .body(["// Compute the hook fee charged on this swap", "return 0;"])
                    .imports(&[POOL_KEY, SWAP_PARAMS, BALANCE_DELTA]),
            )
            .requires(
                FunctionTemplate::new("handleHookFees")
                    .params(["Currency[] memory currencies"])
                    .attributes(["public", "override", "${restricted}"])
                    .body(["// Withdraw or redistribute the accrued hook fees"])
                    .role("FEE_MANAGER")
                    .imports(&[CURRENCY]),
            ),
        hook(HookKind::AntiSandwichHook, ANTI_SANDWICH_HOOK)
            .parent(ComponentId::Hook(HookKind::BaseDynamicAfterFee))
            .permissions(dynamic_after_fee_permissions)
            .provides("_getTargetUnspecified"),
        hook(HookKind::LimitOrderHook, LIMIT_ORDER_HOOK).permissions([AfterInitialize, AfterSwap]),
        Component::contract(
            ComponentId::Hook(HookKind::LiquidityPenaltyHook),
            HookKind::LiquidityPenaltyHook.as_str(),
        )
        .parent(ComponentId::Hook(HookKind::BaseHook))
        .imports(&[LIQUIDITY_PENALTY_HOOK, I_POOL_MANAGER])
        .ctor_param(POOL_MANAGER_TYPE, POOL_MANAGER)
        .ctor_init("LiquidityPenaltyHook(_poolManager, ${blockNumberOffset})")
        .permissions([
            AfterAddLiquidity,
            AfterRemoveLiquidity,
            AfterAddLiquidityReturnDelta,
            AfterRemoveLiquidityReturnDelta,
        ]),
        hook(HookKind::ReHypothecationHook, RE_HYPOTHECATION_HOOK)
            .permissions([
                BeforeInitialize,
                BeforeAddLiquidity,
                BeforeRemoveLiquidity,
                BeforeSwap,
                BeforeSwapReturnDelta,
            ])
            .shares_policy(SharesPolicy::Forbidden)
            .requires(
                FunctionTemplate::new("getCurrencyYieldSource")
                    .params(["Currency currency"])
                    .attributes(["public", "view", "override", "returns (address yieldSource)"])
                    .body(["// Return the yield source holding this currency", "return address(0);"])
                    .imports(&[CURRENCY]),
            )
            .requires(
                FunctionTemplate::new("_depositToYieldSource")
                    .params(["Currency currency", "uint256 amount"])
                    .attributes(["internal", "override"])
                    .body(["// Deposit into the yield source"])
                    .imports(&[CURRENCY]),
            )
            .requires(
                FunctionTemplate::new("_withdrawFromYieldSource")
                    .params(["Currency currency", "uint256 amount"])
                    .attributes(["internal", "override"])
                    .body(["// Withdraw from the yield source"])
                    .imports(&[CURRENCY]),
            )
            .requires(
                FunctionTemplate::new("_getAmountInYieldSource")
                    .params(["Currency currency"])
                    .attributes(["internal", "view", "override", "returns (uint256 amount)"])
                    .body(["return 0;"])
                    .imports(&[CURRENCY]),
            ),
    ]
}

fn access() -> Vec<Component> {
    vec![
        Component::contract(ComponentId::Access(AccessKind::Ownable), "Ownable")
            .imports(&[OWNABLE])
            .ctor_param("address", "initialOwner")
            .ctor_init("Ownable(initialOwner)")
            .gate("onlyOwner", false),
        Component::contract(ComponentId::Access(AccessKind::Roles), "AccessControl")
            .imports(&[ACCESS_CONTROL])
            .ctor_param("address", "defaultAdmin")
            .ctor_statement("_grantRole(DEFAULT_ADMIN_ROLE, defaultAdmin);")
            .gate("onlyRole(${role})", true)
            .interface(InterfaceMethod::supports_interface()),
        Component::contract(ComponentId::Access(AccessKind::Managed), "AccessManaged")
            .imports(&[ACCESS_MANAGED])
            .ctor_param("address", "initialAuthority")
            .ctor_init("AccessManaged(initialAuthority)")
            .gate("restricted", false),
    ]
}

fn pausable() -> Component {
    let mut component = Component::contract(ComponentId::Pausable, "Pausable")
        .imports(&[PAUSABLE])
        .function(
            FunctionTemplate::new("pause")
                .attributes(["public", "${restricted}"])
                .body(["_pause();"])
                .role("PAUSER"),
        )
        .function(
            FunctionTemplate::new("unpause")
                .attributes(["public", "${restricted}"])
                .body(["_unpause();"])
                .role("PAUSER"),
        );

    for permission in [
        Permission::BeforeSwap,
        Permission::BeforeAddLiquidity,
        Permission::BeforeRemoveLiquidity,
        Permission::BeforeDonate,
    ] {
        component = component
            .permissions([permission])
            .hook_statement(permission, "_requireNotPaused();");
    }
    component
}

fn shares() -> Vec<Component> {
    vec![
        Component::contract(ComponentId::Shares(SharesKind::Erc20), "ERC20")
            .imports(&[ERC20])
            .ctor_init("ERC20(\"${sharesName}\", \"${sharesSymbol}\")")
            .binding(MINT_SHARES, "_mint(params.to, shares);")
            .binding(BURN_SHARES, "_burn(msg.sender, shares);"),
        Component::contract(ComponentId::Shares(SharesKind::Erc6909), "ERC6909")
            .imports(&[ERC6909])
            .interface(InterfaceMethod::supports_interface())
            .binding(MINT_SHARES, "_mint(params.to, 0, shares);")
            .binding(BURN_SHARES, "_burn(msg.sender, 0, shares);"),
        Component::contract(ComponentId::Shares(SharesKind::Erc1155), "ERC1155")
            .imports(&[ERC1155])
            .ctor_init("ERC1155(\"${sharesUri}\")")
            .interface(InterfaceMethod::supports_interface())
            .binding(MINT_SHARES, "_mint(params.to, 0, shares, \"\");")
            .binding(BURN_SHARES, "_burn(msg.sender, 0, shares);"),
    ]
}

fn utilities() -> Vec<Component> {
    vec![
        Component::library(
            ComponentId::Utility(Utility::CurrencySettler),
            "CurrencySettler",
        )
        .imports(&[CURRENCY_SETTLER, CURRENCY])
        .using("CurrencySettler for Currency"),
        Component::library(ComponentId::Utility(Utility::SafeCast), "SafeCast")
            .imports(&[SAFE_CAST])
            .using("SafeCast for uint256")
            .using("SafeCast for int256"),
        Component::library(
            ComponentId::Utility(Utility::TransientStorage),
            "TransientSlot",
        )
        .imports(&[TRANSIENT_SLOT])
        .using("TransientSlot for *"),
    ]
}
