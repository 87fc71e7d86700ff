//! End-to-end rename planning tests.
//!
//! Every test builds a symbol set the way a decompiler would hand it over,
//! runs a complete [`RenamePass`] and checks the resulting plan.

use symscope::prelude::*;

fn obfuscated_app() -> SymbolSet {
    SymbolSet::builder()
        .class(
            ClassSymbol::new("com.shop.a")
                .extends("android.app.Activity")
                .with_field(FieldSymbol::new("a", Some(TypeRef::Int)))
                .with_field(FieldSymbol::new("b", Some(TypeRef::object("java.util.ArrayList"))))
                .with_method(MethodSymbol::new("<init>"))
                .with_method(MethodSymbol::new("a").returns(Some(TypeRef::object("java.lang.String"))))
                .with_method(MethodSymbol::new("onCreate").overriding()),
        )
        .class(
            ClassSymbol::new("com.shop.b")
                .with_flags(AccessFlags::INTERFACE | AccessFlags::ABSTRACT)
                .implements("android.view.View$OnClickListener"),
        )
        .class(ClassSymbol::new("com.shop.lib.c"))
        .build()
}

fn is_identifier_safe(alias: &str) -> bool {
    !alias.is_empty()
        && alias
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[test]
fn enhanced_mode_plans_semantic_names() -> symscope::Result<()> {
    let set = obfuscated_app();
    let plan = RenamePass::with_config(&set, "enhanced".parse()?, DeobfuscationConfig::default())?
        .run();

    assert_eq!(plan.mode, DeobfuscationMode::Enhanced);
    assert_eq!(plan.alias_of("com.shop.a"), Some("ActivityC0000a"));
    assert_eq!(
        plan.alias_of("com.shop.b"),
        Some("IViewOnClickListenerC0001b")
    );
    assert_eq!(plan.alias_of("com.shop.a.a"), Some("i0a"));
    assert_eq!(plan.alias_of("com.shop.a.b"), Some("list1b"));
    assert_eq!(plan.alias_of("com.shop.a.a()"), Some("get0Stra"));
    assert_eq!(plan.alias_of("com.shop.a.<init>()"), None);
    assert_eq!(plan.alias_of("com.shop.a.onCreate()"), None);
    assert_eq!(plan.alias_of("com"), None);

    for entry in &plan.entries {
        assert!(is_identifier_safe(&entry.alias), "{entry}");
    }
    Ok(())
}

#[test]
fn default_mode_plans_index_names() {
    let set = obfuscated_app();
    let plan = RenamePass::new(&set, DeobfuscationMode::Default, &ModeFactory::default()).run();

    assert_eq!(plan.alias_of("com.shop.a"), Some("C0000a"));
    assert_eq!(plan.alias_of("com.shop.b"), Some("InterfaceC0001b"));
    assert_eq!(plan.alias_of("com.shop.lib.c"), Some("C0002c"));
    assert_eq!(plan.alias_of("com.shop.a.a()"), Some("m0a"));
    // "onCreate" is long enough for the length rule
    assert_eq!(plan.alias_of("com.shop.a.onCreate()"), None);
}

#[test]
fn kept_and_aliased_symbols_are_never_renamed() {
    let mut kept = ClassSymbol::new("com.shop.a");
    kept.keep = true;
    let mut aliased = ClassSymbol::new("com.shop.b");
    aliased.alias = Some("Checkout".to_string());
    let set = SymbolSet::builder().class(kept).class(aliased).build();

    for mode in [
        DeobfuscationMode::Conservative,
        DeobfuscationMode::Default,
        DeobfuscationMode::Enhanced,
        DeobfuscationMode::Aggressive,
    ] {
        let plan = RenamePass::new(&set, mode, &ModeFactory::default()).run();
        assert!(plan.of_kind(SymbolKind::Class).next().is_none(), "{mode}");
    }
}

#[test]
fn whitelist_protects_packages_except_in_aggressive_mode() -> symscope::Result<()> {
    let set = obfuscated_app();
    let config = DeobfuscationConfig::new().with_whitelist(["com.shop.lib.*"]);
    let factory = ModeFactory::new(config)?;

    let plan = RenamePass::new(&set, DeobfuscationMode::Default, &factory).run();
    assert_eq!(plan.alias_of("com.shop.lib.c"), None);
    assert!(plan.alias_of("com.shop.a").is_some());

    let plan = RenamePass::new(&set, DeobfuscationMode::Aggressive, &factory).run();
    assert!(plan.alias_of("com.shop.lib.c").is_some());
    Ok(())
}

#[test]
fn seeded_index_continues_numbering() -> symscope::Result<()> {
    let first = SymbolSet::builder()
        .class(ClassSymbol::new("com.shop.a"))
        .build();
    let plan = RenamePass::new(&first, DeobfuscationMode::Default, &ModeFactory::default()).run();
    assert_eq!(plan.alias_of("com.shop.a"), Some("C0000a"));

    let second = SymbolSet::builder()
        .class(ClassSymbol::new("com.shop.b"))
        .build();
    let config = DeobfuscationConfig::new().with_initial_index(plan.index);
    let plan = RenamePass::with_config(&second, DeobfuscationMode::Default, config)?.run();
    assert_eq!(plan.alias_of("com.shop.b"), Some("C0001b"));
    Ok(())
}

#[test]
fn disabled_mode_and_unknown_mode() {
    let set = obfuscated_app();
    let plan = RenamePass::new(&set, DeobfuscationMode::Disabled, &ModeFactory::default()).run();
    assert!(plan.is_empty());

    assert!(matches!(
        "fastest".parse::<DeobfuscationMode>(),
        Err(Error::UnknownMode(name)) if name == "fastest"
    ));
}

#[test]
fn recommendation_boundaries() {
    let stats = |overall_rate| ObfuscationStats {
        overall_rate,
        ..ObfuscationStats::default()
    };

    assert_eq!(stats(75.0).recommended_mode(), DeobfuscationMode::Aggressive);
    assert_eq!(stats(70.0).recommended_mode(), DeobfuscationMode::Enhanced);
    assert_eq!(stats(30.0).recommended_mode(), DeobfuscationMode::Default);
    assert_eq!(stats(10.0).recommended_mode(), DeobfuscationMode::Conservative);
    assert!(stats(10.0).is_minimally_obfuscated());
    assert!(stats(50.0).is_lightly_obfuscated());
    assert!(stats(50.1).is_heavily_obfuscated());
}

#[test]
fn analyzer_rate_of_three_quarters_selects_aggressive() {
    let set = SymbolSet::builder()
        .class(ClassSymbol::new("com.shop.a"))
        .class(ClassSymbol::new("com.shop.b"))
        .class(ClassSymbol::new("com.shop.c"))
        .class(ClassSymbol::new("com.shop.CheckoutActivity"))
        .build();

    let analyzer = DeobfuscationAnalyzer::new(&set);
    assert_eq!(analyzer.analyze().overall_rate, 75.0);
    assert_eq!(analyzer.recommended_mode(), DeobfuscationMode::Aggressive);
    assert_eq!(analyzer.detected_tool(), Some(ObfuscatorTool::ProGuard));

    let plan = RenamePass::new(&set, DeobfuscationMode::Auto, &ModeFactory::default()).run();
    assert_eq!(plan.mode, DeobfuscationMode::Aggressive);
    assert_eq!(plan.count(SymbolKind::Class), 3);
}

#[test]
fn unresolved_auto_has_no_components() {
    let factory = ModeFactory::default();
    assert!(factory.conditions(DeobfuscationMode::Auto).is_empty());
    assert!(factory.rename_condition(DeobfuscationMode::Auto).is_none());
    assert!(factory.alias_provider(DeobfuscationMode::Auto).is_none());

    let set = obfuscated_app();
    let resolved = factory.resolve(DeobfuscationMode::Auto, &set);
    assert_ne!(resolved, DeobfuscationMode::Auto);
    assert!(!factory.conditions(resolved).is_empty());

    let plan = RenamePass::new(&set, DeobfuscationMode::Auto, &factory).run();
    assert_eq!(plan.mode, resolved);
    assert!(!plan.is_empty());
}

#[test]
fn presets_tune_detection() {
    let conservative = ModeFactory::preset(DeobfuscationMode::Conservative);
    let aggressive = ModeFactory::preset(DeobfuscationMode::Aggressive);
    assert!(conservative.config().entropy_threshold > aggressive.config().entropy_threshold);

    let set = SymbolSet::builder()
        .class(ClassSymbol::new("com.shop.q").extends("android.app.Activity"))
        .build();
    let plan = RenamePass::new(&set, DeobfuscationMode::Aggressive, &aggressive).run();
    assert_eq!(plan.alias_of("com.shop.q"), Some("ActivityC0000"));
}

#[test]
fn describe_lists_conditions_in_order() {
    let text = ModeFactory::default().describe(DeobfuscationMode::Conservative);
    let expected = "Mode: conservative\n\
        Description: Conservative - minimal renaming, fewer false positives\n\
        \n\
        Conditions used:\n  \
        - Base condition (skip flagged/renamed)\n  \
        - Whitelist preservation\n  \
        - TLD exclusion\n  \
        - Android R class exclusion\n  \
        - Name collision avoidance\n  \
        - Common words preservation\n  \
        - Obfuscator pattern detection\n\
        \n\
        Alias provider: Default (index-based naming)\n";
    assert_eq!(text, expected);
}

#[test]
fn parameter_suggestions_for_obfuscated_arguments() {
    use symscope::deobfuscation::naming::params;

    let method = MethodSymbol::new("a").with_args(vec![
        TypeRef::object("android.content.Context"),
        TypeRef::Int,
        TypeRef::Int,
        TypeRef::Boolean,
    ]);
    assert!(params::is_obfuscated_parameter_name("p1"));
    assert_eq!(
        params::suggest_parameter_names(&method),
        vec!["context", "count", "size", "flag3"]
    );
}
