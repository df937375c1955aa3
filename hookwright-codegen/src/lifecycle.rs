//! Solidity shape of the 10 primary lifecycle hooks.
//!
//! Each primary permission maps to one internal override in the generated
//! contract (`_beforeSwap`, `_afterAddLiquidity`, ...). This module knows the
//! parameter list, return tuple and neutral return value of each.

use hookwright_options::Permission;

use crate::{
    generation::ImportRef,
    registry::paths::{
        BALANCE_DELTA, BALANCE_DELTA_LIBRARY, BEFORE_SWAP_DELTA, BEFORE_SWAP_DELTA_LIBRARY,
        MODIFY_LIQUIDITY_PARAMS, POOL_KEY, SWAP_PARAMS, TO_BALANCE_DELTA, TO_BEFORE_SWAP_DELTA,
    },
};

/// Name of the local holding the hook's delta when a return-delta flag is set.
pub const HOOK_DELTA: &str = "hookDelta";

/// Declaration and imports of the delta returned when a return-delta flag is set.
#[derive(Debug, Clone, Copy)]
pub struct DeltaReturn {
    pub declaration: &'static str,
    pub imports: &'static [ImportRef],
}

/// Signature and return conventions for one primary lifecycle hook.
#[derive(Debug, Clone, Copy)]
pub struct Lifecycle {
    pub permission: Permission,
    params: &'static [(&'static str, &'static str)],
    returns: &'static str,
    imports: &'static [ImportRef],
    /// Values after the selector in the neutral return tuple.
    neutral: &'static [&'static str],
    neutral_imports: &'static [ImportRef],
    delta: Option<DeltaReturn>,
}

const INITIALIZE: &[(&str, &str)] = &[
    ("address", "sender"),
    ("PoolKey calldata", "key"),
    ("uint160", "sqrtPriceX96"),
];
const AFTER_INITIALIZE: &[(&str, &str)] = &[
    ("address", "sender"),
    ("PoolKey calldata", "key"),
    ("uint160", "sqrtPriceX96"),
    ("int24", "tick"),
];
const BEFORE_MODIFY: &[(&str, &str)] = &[
    ("address", "sender"),
    ("PoolKey calldata", "key"),
    ("ModifyLiquidityParams calldata", "params"),
    ("bytes calldata", "hookData"),
];
const AFTER_MODIFY: &[(&str, &str)] = &[
    ("address", "sender"),
    ("PoolKey calldata", "key"),
    ("ModifyLiquidityParams calldata", "params"),
    ("BalanceDelta", "delta"),
    ("BalanceDelta", "feesAccrued"),
    ("bytes calldata", "hookData"),
];
const BEFORE_SWAP: &[(&str, &str)] = &[
    ("address", "sender"),
    ("PoolKey calldata", "key"),
    ("SwapParams calldata", "params"),
    ("bytes calldata", "hookData"),
];
const AFTER_SWAP: &[(&str, &str)] = &[
    ("address", "sender"),
    ("PoolKey calldata", "key"),
    ("SwapParams calldata", "params"),
    ("BalanceDelta", "delta"),
    ("bytes calldata", "hookData"),
];
const DONATE: &[(&str, &str)] = &[
    ("address", "sender"),
    ("PoolKey calldata", "key"),
    ("uint256", "amount0"),
    ("uint256", "amount1"),
    ("bytes calldata", "hookData"),
];

const MODIFY_IMPORTS: &[ImportRef] = &[POOL_KEY, MODIFY_LIQUIDITY_PARAMS];
const AFTER_MODIFY_IMPORTS: &[ImportRef] = &[POOL_KEY, MODIFY_LIQUIDITY_PARAMS, BALANCE_DELTA];
const BALANCE_DELTA_RETURN: DeltaReturn = DeltaReturn {
    declaration: "BalanceDelta hookDelta = toBalanceDelta(0, 0);",
    imports: &[TO_BALANCE_DELTA],
};

impl Lifecycle {
    /// The lifecycle shape of a primary permission; `None` for return-delta flags.
    pub fn of(permission: Permission) -> Option<Lifecycle> {
        let simple = |params| Lifecycle {
            permission,
            params,
            returns: "bytes4",
            imports: &[POOL_KEY],
            neutral: &[],
            neutral_imports: &[],
            delta: None,
        };

        let lifecycle = match permission {
            Permission::BeforeInitialize => simple(INITIALIZE),
            Permission::AfterInitialize => simple(AFTER_INITIALIZE),
            Permission::BeforeDonate | Permission::AfterDonate => simple(DONATE),
            Permission::BeforeAddLiquidity | Permission::BeforeRemoveLiquidity => Lifecycle {
                imports: MODIFY_IMPORTS,
                ..simple(BEFORE_MODIFY)
            },
            Permission::AfterAddLiquidity | Permission::AfterRemoveLiquidity => Lifecycle {
                returns: "bytes4, BalanceDelta",
                imports: AFTER_MODIFY_IMPORTS,
                neutral: &["BalanceDeltaLibrary.ZERO_DELTA"],
                neutral_imports: &[BALANCE_DELTA_LIBRARY],
                delta: Some(BALANCE_DELTA_RETURN),
                ..simple(AFTER_MODIFY)
            },
            Permission::BeforeSwap => Lifecycle {
                returns: "bytes4, BeforeSwapDelta, uint24",
                imports: &[POOL_KEY, SWAP_PARAMS, BEFORE_SWAP_DELTA],
                neutral: &["BeforeSwapDeltaLibrary.ZERO_DELTA", "0"],
                neutral_imports: &[BEFORE_SWAP_DELTA_LIBRARY],
                delta: Some(DeltaReturn {
                    declaration: "BeforeSwapDelta hookDelta = toBeforeSwapDelta(0, 0);",
                    imports: &[TO_BEFORE_SWAP_DELTA],
                }),
                ..simple(BEFORE_SWAP)
            },
            Permission::AfterSwap => Lifecycle {
                returns: "bytes4, int128",
                imports: &[POOL_KEY, SWAP_PARAMS, BALANCE_DELTA],
                neutral: &["0"],
                delta: Some(DeltaReturn {
                    declaration: "int128 hookDelta = 0;",
                    imports: &[],
                }),
                ..simple(AFTER_SWAP)
            },
            _ => return None,
        };
        Some(lifecycle)
    }

    /// All primary lifecycles, in bitmap order.
    pub fn all() -> impl Iterator<Item = Lifecycle> {
        Permission::PRIMARY.into_iter().filter_map(Lifecycle::of)
    }

    /// Internal override name, e.g. `_beforeSwap`.
    pub fn function_name(&self) -> String {
        format!("_{}", self.permission.as_str())
    }

    /// Typed parameters, e.g. `PoolKey calldata key`.
    pub fn params(&self) -> Vec<String> {
        self.params
            .iter()
            .map(|(ty, name)| format!("{} {}", ty, name))
            .collect()
    }

    /// `_beforeSwap(address sender, PoolKey calldata key, ...)`.
    pub fn signature(&self) -> String {
        format!("{}({})", self.function_name(), self.params().join(", "))
    }

    /// Attribute list following the signature.
    pub fn attributes(&self) -> Vec<String> {
        vec![
            "internal".to_string(),
            "override".to_string(),
            format!("returns ({})", self.returns),
        ]
    }

    /// Types the signature mentions.
    pub fn imports(&self) -> &'static [ImportRef] {
        self.imports
    }

    /// `return super._beforeSwap(sender, key, params, hookData);`
    pub fn super_return(&self) -> String {
        let args: Vec<&str> = self.params.iter().map(|(_, name)| *name).collect();
        format!(
            "return super.{}({});",
            self.function_name(),
            args.join(", ")
        )
    }

    /// Closing statements when no base implements the hook: an optional
    /// delta declaration followed by the return, plus the imports they need.
    pub fn own_return(&self, with_delta: bool) -> (Vec<String>, Vec<ImportRef>) {
        let selector = format!("this.{}.selector", self.permission.as_str());

        let delta = self.delta.filter(|_| with_delta);
        let mut statements = Vec::new();
        let mut imports = Vec::new();

        let mut values: Vec<&str> = self.neutral.to_vec();
        match delta {
            Some(delta) => {
                statements.push(delta.declaration.to_string());
                imports.extend_from_slice(delta.imports);
                values[0] = HOOK_DELTA;
            }
            None => imports.extend_from_slice(self.neutral_imports),
        }

        if values.is_empty() {
            statements.push(format!("return {};", selector));
        } else {
            statements.push(format!("return ({}, {});", selector, values.join(", ")));
        }
        (statements, imports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_primary_permissions_have_lifecycles() {
        assert_eq!(Lifecycle::all().count(), 10);
        for permission in Permission::RETURN_DELTA {
            assert!(Lifecycle::of(permission).is_none());
        }
    }

    #[test]
    fn test_signature_and_super_call() {
        let swap = Lifecycle::of(Permission::BeforeSwap).unwrap();
        assert_eq!(
            swap.signature(),
            "_beforeSwap(address sender, PoolKey calldata key, SwapParams calldata params, bytes calldata hookData)"
        );
        assert_eq!(
            swap.super_return(),
            "return super._beforeSwap(sender, key, params, hookData);"
        );
        assert_eq!(swap.attributes()[2], "returns (bytes4, BeforeSwapDelta, uint24)");
    }

    #[test]
    fn test_neutral_returns() {
        let (statements, imports) = Lifecycle::of(Permission::BeforeInitialize)
            .unwrap()
            .own_return(false);
        assert_eq!(statements, vec!["return this.beforeInitialize.selector;"]);
        assert!(imports.is_empty());

        let (statements, imports) = Lifecycle::of(Permission::BeforeSwap)
            .unwrap()
            .own_return(false);
        assert_eq!(
            statements,
            vec!["return (this.beforeSwap.selector, BeforeSwapDeltaLibrary.ZERO_DELTA, 0);"]
        );
        assert_eq!(imports, vec![BEFORE_SWAP_DELTA_LIBRARY]);
    }

    #[test]
    fn test_delta_returns() {
        let (statements, _) = Lifecycle::of(Permission::AfterSwap).unwrap().own_return(true);
        assert_eq!(
            statements,
            vec![
                "int128 hookDelta = 0;",
                "return (this.afterSwap.selector, hookDelta);"
            ]
        );

        let (statements, imports) = Lifecycle::of(Permission::AfterRemoveLiquidity)
            .unwrap()
            .own_return(true);
        assert_eq!(
            statements,
            vec![
                "BalanceDelta hookDelta = toBalanceDelta(0, 0);",
                "return (this.afterRemoveLiquidity.selector, hookDelta);"
            ]
        );
        assert_eq!(imports, vec![TO_BALANCE_DELTA]);
    }

    #[test]
    fn test_delta_ignored_for_hooks_without_one() {
        let (statements, _) = Lifecycle::of(Permission::BeforeDonate)
            .unwrap()
            .own_return(true);
        assert_eq!(statements, vec!["return this.beforeDonate.selector;"]);
    }
}
