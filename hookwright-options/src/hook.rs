//! Hook kinds supported by the generator.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The base behavior a generated hook builds on.
///
/// Each kind maps to exactly one mandatory component in the registry and
/// brings its own baseline permission set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize, Serialize)]
pub enum HookKind {
    /// Minimal hook with no behavior of its own.
    #[default]
    BaseHook,
    /// Takes full custody of swaps and settles them asynchronously.
    BaseAsyncSwap,
    /// Owns liquidity accounting and issues shares for positions.
    BaseCustomAccounting,
    /// Replaces the concentrated-liquidity curve with custom pricing.
    BaseCustomCurve,
    /// Sets a dynamic LP fee through the pool manager.
    BaseDynamicFee,
    /// Overrides the LP fee on every swap.
    BaseOverrideFee,
    /// Applies a fee after the swap based on a target output.
    BaseDynamicAfterFee,
    /// Charges a hook fee on swaps and accrues it to the hook.
    BaseHookFee,
    /// Penalizes same-block sandwich swaps.
    AntiSandwichHook,
    /// Fills limit orders placed as out-of-range liquidity.
    LimitOrderHook,
    /// Penalizes just-in-time liquidity provision.
    LiquidityPenaltyHook,
    /// Rehypothecates idle liquidity into yield sources.
    ReHypothecationHook,
}

impl HookKind {
    /// All hook kinds in declaration order.
    pub const ALL: [HookKind; 12] = [
        HookKind::BaseHook,
        HookKind::BaseAsyncSwap,
        HookKind::BaseCustomAccounting,
        HookKind::BaseCustomCurve,
        HookKind::BaseDynamicFee,
        HookKind::BaseOverrideFee,
        HookKind::BaseDynamicAfterFee,
        HookKind::BaseHookFee,
        HookKind::AntiSandwichHook,
        HookKind::LimitOrderHook,
        HookKind::LiquidityPenaltyHook,
        HookKind::ReHypothecationHook,
    ];

    /// Returns the kind name, which is also the Solidity contract name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HookKind::BaseHook => "BaseHook",
            HookKind::BaseAsyncSwap => "BaseAsyncSwap",
            HookKind::BaseCustomAccounting => "BaseCustomAccounting",
            HookKind::BaseCustomCurve => "BaseCustomCurve",
            HookKind::BaseDynamicFee => "BaseDynamicFee",
            HookKind::BaseOverrideFee => "BaseOverrideFee",
            HookKind::BaseDynamicAfterFee => "BaseDynamicAfterFee",
            HookKind::BaseHookFee => "BaseHookFee",
            HookKind::AntiSandwichHook => "AntiSandwichHook",
            HookKind::LimitOrderHook => "LimitOrderHook",
            HookKind::LiquidityPenaltyHook => "LiquidityPenaltyHook",
            HookKind::ReHypothecationHook => "ReHypothecationHook",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown hook '{}'", s))
    }
}
