use super::*;

#[test]
fn comment_syntax_construction() {
    let syntax = CommentSyntax::new(vec!["//"], vec![("/*", "*/")]);
    assert_eq!(syntax.single_line, vec!["//"]);
    assert_eq!(syntax.multi_line, vec![("/*".to_string(), "*/".to_string())]);
    assert!(!syntax.multi_line_disabled());
}

#[test]
fn sentinel_pair_disables_multi_line() {
    let syntax = CommentSyntax::new(vec!["#"], vec![("", "")]);
    assert!(syntax.multi_line_disabled());

    assert!(!CommentSyntax::none().multi_line_disabled());
}

#[test]
fn registry_register_and_lookup() {
    let mut registry = LanguageRegistry::new();
    let syntax = CommentSyntax::new(vec!["#"], vec![]);
    let lang = Language::new("Shell", vec!["sh", "bash"], syntax);

    registry.register(lang);

    assert!(registry.get_by_extension("sh").is_some());
    assert!(registry.get_by_extension("bash").is_some());
    assert_eq!(registry.get_by_extension("sh").unwrap().name, "Shell");
    assert_eq!(registry.lookup("Shell").unwrap().extensions, vec!["sh", "bash"]);
}

#[test]
fn default_registry_has_rust() {
    let registry = LanguageRegistry::default();
    let rust = registry.get_by_extension("rs").unwrap();

    assert_eq!(rust.name, "Rust");
    assert!(rust.comment_syntax.single_line.contains(&"//".to_string()));
    assert!(rust.comment_syntax.single_line.contains(&"///".to_string()));
}

#[test]
fn default_registry_has_python() {
    let registry = LanguageRegistry::default();
    let python = registry.get_by_extension("py").unwrap();

    assert_eq!(python.name, "Python");
    assert_eq!(
        python.comment_syntax.multi_line,
        vec![("\"\"\"".to_string(), "\"\"\"".to_string())]
    );
}

#[test]
fn extension_lookup_is_case_sensitive() {
    let registry = LanguageRegistry::default();

    assert_eq!(registry.get_by_extension("R").unwrap().name, "R");
    assert_eq!(registry.get_by_extension("h").unwrap().name, "C Header");
    assert!(registry.get_by_extension("RS").is_none());
}

#[test]
fn ambiguous_extensions_have_no_direct_mapping() {
    let registry = LanguageRegistry::default();

    for ext in ["m", "v", "fs", "r", "ts", "mo"] {
        assert!(registry.is_ambiguous(ext), "{ext} should be ambiguous");
        assert!(registry.get_by_extension(ext).is_none());
    }
    assert_eq!(
        registry.ambiguous_candidates("fs"),
        &["F#".to_string(), "GLSL".to_string()]
    );
    assert!(registry.ambiguous_candidates("rs").is_empty());
}

#[test]
fn canonical_name_accepts_extension_keys_and_names() {
    let registry = LanguageRegistry::default();

    assert_eq!(registry.canonical_name("cmake"), Some("CMake"));
    assert_eq!(registry.canonical_name("bash"), Some("BASH"));
    assert_eq!(registry.canonical_name("MATLAB"), Some("MATLAB"));
    assert_eq!(registry.canonical_name("no-such-language"), None);
}

#[test]
fn extensions_of_includes_ambiguous_candidates() {
    let registry = LanguageRegistry::default();

    let ts = registry.extensions_of("TypeScript");
    assert!(ts.contains(&"tsx"));
    assert!(ts.contains(&"ts"));

    let matlab = registry.extensions_of("MATLAB");
    assert_eq!(matlab, vec!["m"]);
}

#[test]
fn registry_all_returns_all_languages() {
    let registry = LanguageRegistry::default();
    let all = registry.all();

    assert!(all.len() > 150);
    assert!(all.iter().all(|lang| registry.lookup(&lang.name).is_some()));
}

#[test]
fn custom_language_overrides_builtin_extension() {
    let mut custom = IndexMap::new();
    custom.insert(
        "CustomRust".to_string(),
        CustomLanguageConfig {
            extensions: vec!["rs".to_string()],
            single_line_comments: vec!["--".to_string()],
            multi_line_comments: vec![("{-".to_string(), "-}".to_string())],
        },
    );

    let registry = LanguageRegistry::with_custom_languages(&custom);
    let rust = registry.get_by_extension("rs").unwrap();

    assert_eq!(rust.name, "CustomRust");
    assert!(rust.comment_syntax.single_line.contains(&"--".to_string()));
}

#[test]
fn custom_language_replaces_builtin_grammar() {
    let mut custom = IndexMap::new();
    custom.insert(
        "Python".to_string(),
        CustomLanguageConfig {
            extensions: vec!["pyw".to_string()],
            single_line_comments: vec!["#".to_string()],
            multi_line_comments: Vec::new(),
        },
    );

    let registry = LanguageRegistry::with_custom_languages(&custom);
    let python = registry.lookup("Python").unwrap();

    assert!(python.comment_syntax.multi_line.is_empty());
    assert_eq!(registry.get_by_extension("py").unwrap().name, "Python");
    assert_eq!(registry.get_by_extension("pyw").unwrap().name, "Python");
}

#[test]
fn custom_language_claims_ambiguous_extension() {
    let mut custom = IndexMap::new();
    custom.insert(
        "Modelica".to_string(),
        CustomLanguageConfig {
            extensions: vec!["mo".to_string()],
            single_line_comments: vec!["//".to_string()],
            multi_line_comments: vec![("/*".to_string(), "*/".to_string())],
        },
    );

    let registry = LanguageRegistry::with_custom_languages(&custom);

    assert!(!registry.is_ambiguous("mo"));
    assert_eq!(registry.get_by_extension("mo").unwrap().name, "Modelica");
    // Built-in languages should still be available
    assert_eq!(registry.get_by_extension("rs").unwrap().name, "Rust");
}
