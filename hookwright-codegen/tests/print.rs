//! End-to-end tests for contract generation.

use hookwright_codegen::{
    Error, Registry, Severity, defaults, generate, is_access_control_required, print,
    registry::ComponentId,
};
use hookwright_options::{
    AccessKind, HookKind, Metadata, PartialOptions, PartialShares, Permission, PermissionSet,
    SharesConfig, SharesKind,
};

fn print_ok(options: PartialOptions) -> String {
    print(&options).expect("generation should succeed")
}

fn enabled_primary(permissions: &PermissionSet) -> Vec<String> {
    Permission::PRIMARY
        .into_iter()
        .filter(|p| permissions.contains(*p))
        .map(|p| format!("_{}", p.as_str()))
        .collect()
}

#[test]
fn test_default_contract() {
    insta::assert_snapshot!(print_ok(PartialOptions::default()), @r#"
    // SPDX-License-Identifier: MIT
    pragma solidity ^0.8.26;

    import {BaseHook} from "@openzeppelin/uniswap-hooks/src/base/BaseHook.sol";
    import {IPoolManager} from "@uniswap/v4-core/src/interfaces/IPoolManager.sol";
    import {Hooks} from "@uniswap/v4-core/src/libraries/Hooks.sol";

    contract MyHook is BaseHook {
        constructor(IPoolManager _poolManager) BaseHook(_poolManager) {}

        function getHookPermissions() public pure override returns (Hooks.Permissions memory) {
            return Hooks.Permissions({
                beforeInitialize: false,
                afterInitialize: false,
                beforeAddLiquidity: false,
                afterAddLiquidity: false,
                beforeRemoveLiquidity: false,
                afterRemoveLiquidity: false,
                beforeSwap: false,
                afterSwap: false,
                beforeDonate: false,
                afterDonate: false,
                beforeSwapReturnDelta: false,
                afterSwapReturnDelta: false,
                afterAddLiquidityReturnDelta: false,
                afterRemoveLiquidityReturnDelta: false
            });
        }
    }
    "#);
}

#[test]
fn test_deterministic() {
    let options = PartialOptions {
        hook: Some(HookKind::BaseCustomCurve),
        pausable: Some(true),
        safe_cast: Some(true),
        ..PartialOptions::default()
    };
    assert_eq!(print_ok(options.clone()), print_ok(options));
}

#[test]
fn test_print_defaults_matches_print_nothing() {
    let spread = PartialOptions::from(defaults());
    assert_eq!(print_ok(PartialOptions::default()), print_ok(spread));
}

#[test]
fn test_respread_with_name_only_changes_name() {
    let renamed = PartialOptions {
        name: Some("Renamed".into()),
        ..PartialOptions::from(defaults())
    };
    let expected = print_ok(PartialOptions::default()).replace("contract MyHook ", "contract Renamed ");
    assert_eq!(print_ok(renamed), expected);
}

#[test]
fn test_dynamic_fee_scenario() {
    let source = print_ok(PartialOptions {
        name: Some("MyDynamicFeeHook".into()),
        hook: Some(HookKind::BaseDynamicFee),
        ..PartialOptions::default()
    });

    assert!(source.contains("contract MyDynamicFeeHook is BaseDynamicFee {"));
    assert!(source.contains(
        "import {BaseDynamicFee} from \"@openzeppelin/uniswap-hooks/src/fee/BaseDynamicFee.sol\";"
    ));
    assert!(source.contains("constructor(IPoolManager _poolManager) BaseDynamicFee(_poolManager) {}"));
    assert!(source.contains("function _getFee(PoolKey calldata key) internal override returns (uint24) {"));
    assert!(source.contains(
        "    function _afterInitialize(
        address sender,
        PoolKey calldata key,
        uint160 sqrtPriceX96,
        int24 tick
    ) internal override returns (bytes4) {
        return super._afterInitialize(sender, key, sqrtPriceX96, tick);
    }"
    ));
    assert!(source.contains("afterInitialize: true,"));
    assert!(!source.contains("Pausable"));
    assert!(!source.contains("Ownable"));
    assert!(!source.contains("import {BaseHook}"));
}

#[test]
fn test_pausable_without_access_gets_ownable() {
    let options = PartialOptions {
        pausable: Some(true),
        access: Some(None),
        ..PartialOptions::default()
    };
    assert!(is_access_control_required(&options));

    let source = print_ok(options);
    assert!(source.contains("contract MyHook is BaseHook, Ownable, Pausable {"));
    assert!(source.contains(
        "    constructor(IPoolManager _poolManager, address initialOwner)
        BaseHook(_poolManager)
        Ownable(initialOwner)
    {}"
    ));
    assert!(source.contains(
        "    function pause() public onlyOwner {
        _pause();
    }"
    ));
    assert!(source.contains("function unpause() public onlyOwner {"));
    assert!(source.contains("        _requireNotPaused();\n        return (this.beforeSwap.selector, BeforeSwapDeltaLibrary.ZERO_DELTA, 0);"));
    assert!(source.contains("beforeDonate: true,"));
}

#[test]
fn test_roles_contract() {
    let source = print_ok(PartialOptions {
        pausable: Some(true),
        access: Some(Some(AccessKind::Roles)),
        ..PartialOptions::default()
    });

    assert!(source.contains("contract MyHook is BaseHook, AccessControl, Pausable {"));
    assert!(source.contains("    bytes32 public constant PAUSER_ROLE = keccak256(\"PAUSER_ROLE\");\n"));
    assert!(source.contains(
        "    constructor(IPoolManager _poolManager, address defaultAdmin, address pauser)
        BaseHook(_poolManager)
    {
        _grantRole(DEFAULT_ADMIN_ROLE, defaultAdmin);
        _grantRole(PAUSER_ROLE, pauser);
    }"
    ));
    assert!(source.contains("function pause() public onlyRole(PAUSER_ROLE) {"));
}

#[test]
fn test_managed_access_contract() {
    let source = print_ok(PartialOptions {
        pausable: Some(true),
        access: Some(Some(AccessKind::Managed)),
        ..PartialOptions::default()
    });

    assert!(source.contains("contract MyHook is BaseHook, AccessManaged, Pausable {"));
    assert!(source.contains(
        "    constructor(IPoolManager _poolManager, address initialAuthority)
        BaseHook(_poolManager)
        AccessManaged(initialAuthority)
    {}"
    ));
    assert!(source.contains("function pause() public restricted {"));
}

#[test]
fn test_erc20_shares_require_name_and_symbol() {
    let err = print(&PartialOptions {
        shares: Some(PartialShares {
            options: Some(Some(SharesKind::Erc20)),
            ..PartialShares::default()
        }),
        ..PartialOptions::default()
    })
    .unwrap_err();
    assert!(err.is_user_error());
    assert!(matches!(err, Error::Configuration(_)));
    assert!(err.to_string().contains("'shares.name'"));

    let source = print_ok(PartialOptions {
        shares: Some(SharesConfig::erc20("X", "X").into()),
        ..PartialOptions::default()
    });
    assert!(source.contains("contract MyHook is BaseHook, ERC20 {"));
    assert!(source.contains("BaseHook(_poolManager) ERC20(\"X\", \"X\") {}"));
    assert!(source.contains("import {ERC20} from \"@openzeppelin/contracts/token/ERC20/ERC20.sol\";"));
}

#[test]
fn test_rehypothecation_rejects_shares() {
    let err = print(&PartialOptions {
        hook: Some(HookKind::ReHypothecationHook),
        shares: Some(SharesConfig::erc6909().into()),
        ..PartialOptions::default()
    })
    .unwrap_err();
    assert!(err.to_string().starts_with("invalid option 'shares.options'"));
}

#[test]
fn test_custom_accounting_defaults_shares() {
    let generated = generate(
        &PartialOptions {
            hook: Some(HookKind::BaseCustomAccounting),
            ..PartialOptions::default()
        },
        Registry::builtin(),
    )
    .unwrap();

    let source = &generated.source;
    assert!(source.contains("contract MyHook is BaseCustomAccounting, ERC6909 {"));
    assert!(source.contains("        _mint(params.to, 0, shares);\n"));
    assert!(source.contains("        _burn(msg.sender, 0, shares);\n"));
    assert!(source.contains("return super._beforeInitialize(sender, key, sqrtPriceX96);"));
    assert!(!source.contains("supportsInterface"));

    let info: Vec<_> = generated
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Info)
        .collect();
    assert_eq!(info.len(), 1);
    assert_eq!(info[0].location.as_deref(), Some("shares.options"));
}

#[test]
fn test_interface_override_rendered() {
    let source = print_ok(PartialOptions {
        access: Some(Some(AccessKind::Roles)),
        shares: Some(SharesConfig::erc1155("https://example.com/{id}.json").into()),
        ..PartialOptions::default()
    });
    assert!(source.ends_with(
        "    function supportsInterface(bytes4 interfaceId)
        public
        view
        override(AccessControl, ERC1155)
        returns (bool)
    {
        return super.supportsInterface(interfaceId);
    }
}
"
    ));
}

#[test]
fn test_metadata_rendered() {
    let source = print_ok(PartialOptions {
        info: Some(Metadata {
            security_contact: Some("security@example.com".into()),
            license: "GPL-3.0-or-later".into(),
        }),
        ..PartialOptions::default()
    });
    assert!(source.starts_with("// SPDX-License-Identifier: GPL-3.0-or-later\n"));
    assert!(source.contains(
        "/// @custom:security-contact security@example.com\ncontract MyHook is BaseHook {"
    ));
}

#[test]
fn test_metadata_line_breaks_rejected() {
    let err = print(&PartialOptions {
        info: Some(Metadata {
            security_contact: None,
            license: "MIT\npragma solidity ^0.4.0;".into(),
        }),
        ..PartialOptions::default()
    })
    .unwrap_err();
    assert!(err.is_user_error());
    assert!(err.to_string().starts_with("invalid option 'info.license'"));

    let err = print(&PartialOptions {
        info: Some(Metadata {
            security_contact: Some("a@b.c\ncontract Injected {}".into()),
            license: "MIT".into(),
        }),
        ..PartialOptions::default()
    })
    .unwrap_err();
    assert!(err.to_string().starts_with("invalid option 'info.securityContact'"));
}

#[test]
fn test_utilities_rendered_as_using() {
    let source = print_ok(PartialOptions {
        currency_settler: Some(true),
        safe_cast: Some(true),
        transient_storage: Some(true),
        ..PartialOptions::default()
    });
    assert!(source.contains(
        "contract MyHook is BaseHook {
    using CurrencySettler for Currency;
    using SafeCast for uint256;
    using SafeCast for int256;
    using TransientSlot for *;

    constructor"
    ));
}

#[test]
fn test_hook_functions_match_permissions() {
    for hook in HookKind::ALL {
        for permission in Permission::ALL {
            for pausable in [false, true] {
                let options = PartialOptions {
                    hook: Some(hook),
                    pausable: Some(pausable),
                    permissions: Some(PermissionSet::from_permissions([permission])),
                    ..PartialOptions::default()
                };
                let generated = generate(&options, Registry::builtin()).unwrap();
                let model = &generated.model;
                let emitted: Vec<String> = model.hook_names().map(str::to_string).collect();
                assert_eq!(emitted, enabled_primary(&model.permissions), "{hook} {permission}");
                assert!(model.permissions.contains(permission));
                for name in &emitted {
                    assert!(generated.source.contains(&format!("function {name}(")));
                }
            }
        }
    }
}

#[test]
fn test_access_defaulting() {
    for hook in HookKind::ALL {
        for pausable in [false, true] {
            let options = PartialOptions {
                hook: Some(hook),
                pausable: Some(pausable),
                ..PartialOptions::default()
            };
            let model = generate(&options, Registry::builtin()).unwrap().model;
            let has_access = AccessKind::ALL
                .into_iter()
                .any(|kind| model.has_component(ComponentId::Access(kind)));
            assert_eq!(has_access, is_access_control_required(&options), "{hook}");
        }
    }
}

#[test]
fn test_parent_order_independent_of_option_order() {
    let layers = [
        PartialOptions {
            pausable: Some(true),
            ..PartialOptions::default()
        },
        PartialOptions {
            access: Some(Some(AccessKind::Managed)),
            ..PartialOptions::default()
        },
        PartialOptions {
            shares: Some(SharesConfig::erc6909().into()),
            ..PartialOptions::default()
        },
        PartialOptions {
            hook: Some(HookKind::LimitOrderHook),
            transient_storage: Some(true),
            ..PartialOptions::default()
        },
    ];

    let merge = |order: &[usize]| {
        order
            .iter()
            .fold(PartialOptions::default(), |acc, &i| acc.merge(layers[i].clone()))
    };
    let expected = print_ok(merge(&[0, 1, 2, 3]));
    assert!(expected.contains("contract MyHook is LimitOrderHook, AccessManaged, Pausable, ERC6909 {"));
    for order in [[3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1]] {
        assert_eq!(print_ok(merge(&order)), expected);
    }
}

#[test]
fn test_return_delta_declares_delta() {
    let source = print_ok(PartialOptions {
        permissions: Some(PermissionSet::from_permissions([
            Permission::BeforeSwapReturnDelta,
        ])),
        ..PartialOptions::default()
    });
    assert!(source.contains(
        "        BeforeSwapDelta hookDelta = toBeforeSwapDelta(0, 0);
        return (this.beforeSwap.selector, hookDelta, 0);"
    ));
    assert!(source.contains("import {BeforeSwapDelta, toBeforeSwapDelta} from"));
    assert!(source.contains("beforeSwap: true,"));
    assert!(source.contains("beforeSwapReturnDelta: true,"));
}

#[test]
fn test_liquidity_penalty_offset() {
    let source = print_ok(PartialOptions {
        hook: Some(HookKind::LiquidityPenaltyHook),
        inputs: Some([("blockNumberOffset".to_string(), 42.into())].into()),
        ..PartialOptions::default()
    });
    assert!(source.contains("LiquidityPenaltyHook(_poolManager, 42) {}"));

    let err = print(&PartialOptions {
        inputs: Some([("blockNumberOffset".to_string(), "soon".into())].into()),
        ..PartialOptions::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("'inputs.blockNumberOffset'"));
}
