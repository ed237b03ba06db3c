use crate::activations::{registry, ActivationKind, Kwargs, Registry};
use crate::error::ActivationError;

const ALL_KEYS: [&str; 20] = [
    "linear",
    "tanh",
    "logistic",
    "sigmoid",
    "softmax",
    "softplus",
    "relu",
    "rect:min",
    "rectmax",
    "rect:max",
    "truncatedrelu",
    "trelu",
    "rect:minmax",
    "normmean",
    "norm:mean",
    "normmax",
    "norm:max",
    "normstd",
    "norm:std",
    "normz",
];

#[test]
fn test_builtin_registry_has_every_key() {
    let registry = registry();
    for key in ALL_KEYS {
        assert!(registry.contains(key), "missing {}", key);
    }
    assert!(registry.contains("norm:z"));
    assert_eq!(registry.len(), ALL_KEYS.len() + 1);
}

#[test]
fn test_lookup_is_case_insensitive() {
    let registry = registry();
    assert_eq!(registry.lookup("ReLU").unwrap(), ActivationKind::Relu);
    assert_eq!(registry.lookup("NORM:Z").unwrap(), ActivationKind::NormZ);
    assert_eq!(registry.lookup("Sigmoid").unwrap(), ActivationKind::Logistic);
}

#[test]
fn test_lookup_unknown() {
    let err = registry().lookup("not_a_real_activation").unwrap_err();
    assert_eq!(
        err,
        ActivationError::UnknownActivation { name: "not_a_real_activation".to_string() }
    );
}

#[test]
fn test_register_duplicate_key() {
    let mut registry = Registry::builtin().unwrap();
    let err = registry.register(["swish", "Sigmoid"], ActivationKind::Logistic).unwrap_err();
    assert_eq!(err, ActivationError::DuplicateKey { key: "sigmoid".to_string() });
    // nothing from the failed call is kept
    assert!(!registry.contains("swish"));
}

#[test]
fn test_register_repeated_key_in_one_call() {
    let mut registry = Registry::new();
    let err = registry.register(["a", "A"], ActivationKind::Linear).unwrap_err();
    assert_eq!(err, ActivationError::DuplicateKey { key: "a".to_string() });
    assert!(registry.is_empty());
}

#[test]
fn test_custom_registry_builds() {
    let mut registry = Registry::new();
    registry.register(["clip", "unit"], ActivationKind::TruncatedRelu).unwrap();
    let act = registry.build("clip+unit", Kwargs::new()).unwrap();
    assert_eq!(act.name(), "unit(clip)");
    assert!(registry.build("relu", Kwargs::new()).is_err());
}

#[test]
fn test_keys_are_sorted_and_unique() {
    let keys: Vec<&str> = registry().keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(keys, sorted);
}

#[test]
fn test_kind_keys_match_registry() {
    for kind in ActivationKind::ALL {
        for key in kind.keys() {
            assert_eq!(registry().lookup(key).unwrap(), kind);
        }
    }
}

#[test]
fn test_register_rejects_unresolvable_keys() {
    let mut registry = Registry::new();
    for key in ["", "relu+tanh"] {
        assert!(matches!(
            registry.register([key], ActivationKind::Relu),
            Err(ActivationError::InvalidParameter { .. })
        ));
    }
    assert!(registry.is_empty());
}

#[test]
fn test_elementwise_kinds() {
    assert!(ActivationKind::Relu.is_elementwise());
    assert!(ActivationKind::Softplus.is_elementwise());
    assert!(!ActivationKind::Softmax.is_elementwise());
    assert!(!ActivationKind::NormZ.is_elementwise());
}
