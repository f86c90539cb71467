use datagen::parser::{
    parse_keys, parse_pattern, validate_name, Amount, Ingredient, ItemStack,
};
use serde_json::json;

#[test]
fn test_item_with_count() {
    let stack: ItemStack = "foo:bar,2".parse().unwrap();
    assert_eq!(stack.ingredient, Ingredient::Item("foo:bar".to_string()));
    assert_eq!(stack.amount, Some(Amount::Count(2)));
    assert_eq!(serde_json::to_value(&stack).unwrap(), json!({"item": "foo:bar", "count": 2}));
}

#[test]
fn test_item_with_chance() {
    let stack: ItemStack = "foo:bar,0.1".parse().unwrap();
    assert_eq!(stack.amount, Some(Amount::Chance(0.1)));
    assert_eq!(serde_json::to_value(&stack).unwrap(), json!({"item": "foo:bar", "chance": 0.1}));
}

#[test]
fn test_tag_reference() {
    let stack: ItemStack = "#foo:bar".parse().unwrap();
    assert_eq!(stack.ingredient, Ingredient::Tag("foo:bar".to_string()));
    assert_eq!(serde_json::to_value(&stack).unwrap(), json!({"tag": "foo:bar"}));
}

#[test]
fn test_plain_item() {
    let stack: ItemStack = "foo:bar".parse().unwrap();
    assert!(stack.amount.is_none());
    assert_eq!(serde_json::to_value(&stack).unwrap(), json!({"item": "foo:bar"}));
}

#[test]
fn test_malformed_stacks() {
    for token in ["", ",2", "#", "foo:bar,", "foo:bar,x", "foo:bar,1.5", "foo:bar,0", "foo:bar,2,3"] {
        assert!(token.parse::<ItemStack>().is_err(), "'{token}' should not parse");
    }
}

#[test]
fn test_patterns() {
    assert_eq!(parse_pattern("SSS,SSS,SSS").unwrap(), vec!["SSS", "SSS", "SSS"]);
    assert!(parse_pattern(r#""S ",' S'"#).is_err());
    assert_eq!(parse_pattern(r#""S "," S""#).unwrap(), vec!["S ", " S"]);
    assert!(parse_pattern("SSSS").is_err());
    assert!(parse_pattern("S,S,S,S").is_err());
    assert!(parse_pattern("SS,S").is_err());
    assert!(parse_pattern("").is_err());
}

#[test]
fn test_keys() {
    let keys = parse_keys("S=minecraft:iron_ingot;T=forge:rods/wooden;G=#forge:glass").unwrap();
    assert_eq!(keys.keys().copied().collect::<Vec<_>>(), vec!['S', 'T', 'G']);
    assert_eq!(keys[&'S'], Ingredient::Item("minecraft:iron_ingot".to_string()));
    assert_eq!(keys[&'T'], Ingredient::Tag("forge:rods/wooden".to_string()));
    assert_eq!(keys[&'G'], Ingredient::Tag("forge:glass".to_string()));
}

#[test]
fn test_bad_keys() {
    for keys in ["", "S", "SS=foo:bar", "S=foo:bar;S=foo:baz", "S=", "S=a=b"] {
        assert!(parse_keys(keys).is_err(), "'{keys}' should not parse");
    }
}

#[test]
fn test_names() {
    for name in ["steel_block", "tools/steel_axe", "steel-block.v2"] {
        assert!(validate_name(name).is_ok(), "'{name}' should be accepted");
    }
}

#[test]
fn test_names_stay_below_output_root() {
    for name in ["/abs", "/tmp/escaped", "../x", "a/../../x", "a//b", "a/", "./a", "a/.", ".", ".."] {
        assert!(validate_name(name).is_err(), "'{name}' should be rejected");
    }
}

#[test]
fn test_path_like_item_is_tag() {
    assert_eq!(
        Ingredient::Item("forge:dusts/steel".to_string()).tag_if_path(),
        Ingredient::Tag("forge:dusts/steel".to_string())
    );
    assert_eq!(
        Ingredient::Item("foo:bar".to_string()).tag_if_path(),
        Ingredient::Item("foo:bar".to_string())
    );
}
