//! The 14-flag hook permission bitmap.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! permissions {
    ($($variant:ident => $field:ident : $key:literal,)*) => {
        /// A single lifecycle permission.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Permission {
            $($variant,)*
        }

        impl Permission {
            /// All permissions, in the order the pool manager's bitmap declares them.
            pub const ALL: [Permission; 14] = [$(Permission::$variant,)*];

            /// The camelCase flag name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Permission::$variant => $key,)*
                }
            }
        }

        /// Which lifecycle points a hook implements.
        ///
        /// Missing flags deserialize as `false`.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct PermissionSet {
            $(pub $field: bool,)*
        }

        impl PermissionSet {
            /// Whether the given flag is set.
            pub fn contains(&self, permission: Permission) -> bool {
                match permission {
                    $(Permission::$variant => self.$field,)*
                }
            }

            /// Set or clear a flag.
            pub fn set(&mut self, permission: Permission, enabled: bool) {
                match permission {
                    $(Permission::$variant => self.$field = enabled,)*
                }
            }
        }
    };
}

permissions! {
    BeforeInitialize => before_initialize: "beforeInitialize",
    AfterInitialize => after_initialize: "afterInitialize",
    BeforeAddLiquidity => before_add_liquidity: "beforeAddLiquidity",
    AfterAddLiquidity => after_add_liquidity: "afterAddLiquidity",
    BeforeRemoveLiquidity => before_remove_liquidity: "beforeRemoveLiquidity",
    AfterRemoveLiquidity => after_remove_liquidity: "afterRemoveLiquidity",
    BeforeSwap => before_swap: "beforeSwap",
    AfterSwap => after_swap: "afterSwap",
    BeforeDonate => before_donate: "beforeDonate",
    AfterDonate => after_donate: "afterDonate",
    BeforeSwapReturnDelta => before_swap_return_delta: "beforeSwapReturnDelta",
    AfterSwapReturnDelta => after_swap_return_delta: "afterSwapReturnDelta",
    AfterAddLiquidityReturnDelta => after_add_liquidity_return_delta: "afterAddLiquidityReturnDelta",
    AfterRemoveLiquidityReturnDelta => after_remove_liquidity_return_delta: "afterRemoveLiquidityReturnDelta",
}

impl Permission {
    /// The 10 primary lifecycle hooks, each of which maps to one function.
    pub const PRIMARY: [Permission; 10] = [
        Permission::BeforeInitialize,
        Permission::AfterInitialize,
        Permission::BeforeAddLiquidity,
        Permission::AfterAddLiquidity,
        Permission::BeforeRemoveLiquidity,
        Permission::AfterRemoveLiquidity,
        Permission::BeforeSwap,
        Permission::AfterSwap,
        Permission::BeforeDonate,
        Permission::AfterDonate,
    ];

    /// The 4 return-delta flags.
    pub const RETURN_DELTA: [Permission; 4] = [
        Permission::BeforeSwapReturnDelta,
        Permission::AfterSwapReturnDelta,
        Permission::AfterAddLiquidityReturnDelta,
        Permission::AfterRemoveLiquidityReturnDelta,
    ];

    /// Whether this is a return-delta flag.
    pub fn is_return_delta(&self) -> bool {
        self.base().is_some()
    }

    /// For a return-delta flag, the primary flag it depends on.
    pub fn base(&self) -> Option<Permission> {
        match self {
            Permission::BeforeSwapReturnDelta => Some(Permission::BeforeSwap),
            Permission::AfterSwapReturnDelta => Some(Permission::AfterSwap),
            Permission::AfterAddLiquidityReturnDelta => Some(Permission::AfterAddLiquidity),
            Permission::AfterRemoveLiquidityReturnDelta => Some(Permission::AfterRemoveLiquidity),
            _ => None,
        }
    }

    /// For a primary flag, the return-delta flag that modifies it.
    pub fn return_delta(&self) -> Option<Permission> {
        Permission::RETURN_DELTA
            .into_iter()
            .find(|delta| delta.base() == Some(*self))
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|permission| permission.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown permission '{}'", s))
    }
}

impl PermissionSet {
    /// An empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from a list of enabled flags.
    pub fn from_permissions(permissions: impl IntoIterator<Item = Permission>) -> Self {
        let mut set = Self::empty();
        for permission in permissions {
            set.insert(permission);
        }
        set
    }

    /// Enable a flag; returns true if it was previously disabled.
    pub fn insert(&mut self, permission: Permission) -> bool {
        let was_set = self.contains(permission);
        self.set(permission, true);
        !was_set
    }

    /// Union another set into this one.
    pub fn union_with(&mut self, other: &PermissionSet) {
        for permission in other.iter() {
            self.insert(permission);
        }
    }

    /// Iterate over enabled flags in bitmap order.
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        Permission::ALL.into_iter().filter(|p| self.contains(*p))
    }

    /// Whether `self` has every flag `other` has.
    pub fn is_superset(&self, other: &PermissionSet) -> bool {
        other.iter().all(|p| self.contains(p))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_name() {
        assert_eq!(
            Permission::from_str("beforeSwapReturnDelta").unwrap(),
            Permission::BeforeSwapReturnDelta
        );
        assert_eq!(Permission::from_str("AFTERDONATE").unwrap(), Permission::AfterDonate);
        assert!(Permission::from_str("before_swap").is_err());
    }

    #[test]
    fn test_partition() {
        assert_eq!(Permission::PRIMARY.len() + Permission::RETURN_DELTA.len(), 14);
        for p in Permission::PRIMARY {
            assert!(!p.is_return_delta());
        }
        for p in Permission::RETURN_DELTA {
            assert!(p.is_return_delta());
            assert_eq!(p.base().unwrap().return_delta(), Some(p));
        }
    }

    #[test]
    fn test_set_and_contains() {
        let mut set = PermissionSet::empty();
        assert!(set.insert(Permission::AfterSwap));
        assert!(!set.insert(Permission::AfterSwap));
        assert!(set.after_swap);
        assert_eq!(set.len(), 1);

        set.set(Permission::AfterSwap, false);
        assert!(set.is_empty());
    }

    #[test]
    fn test_deserialize_partial() {
        let set: PermissionSet =
            serde_json::from_str(r#"{"beforeSwap": true, "afterSwapReturnDelta": true}"#).unwrap();
        assert!(set.before_swap);
        assert!(set.after_swap_return_delta);
        assert!(!set.after_swap);
    }

    #[test]
    fn test_iter_order() {
        let set = PermissionSet::from_permissions([Permission::AfterDonate, Permission::BeforeSwap]);
        let names: Vec<_> = set.iter().map(|p| p.as_str()).collect();
        assert_eq!(names, vec!["beforeSwap", "afterDonate"]);
    }
}
