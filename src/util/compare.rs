use std::collections::HashMap;
use std::hash::Hash;

pub fn keys_equal<K, A, B>(a: &HashMap<K, A>, b: &HashMap<K, B>) -> bool
where
    K: Eq + Hash,
{
    a.len() == b.len() && a.keys().all(|key| b.contains_key(key))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::util::compare::keys_equal;

    #[test]
    fn keys_equal_ignores_values() {
        let a = HashMap::from([("a", 1), ("b", 2)]);
        let b = HashMap::from([("a", 9), ("b", 8)]);
        assert!(keys_equal(&a, &b));
    }

    #[test]
    fn keys_equal_rejects_cardinality_mismatch() {
        let a = HashMap::from([("a", 1)]);
        let b = HashMap::from([("a", 1), ("b", 2)]);
        assert!(!keys_equal(&a, &b));
        assert!(!keys_equal(&b, &a));
    }

    #[test]
    fn keys_equal_is_reflexive_and_symmetric() {
        let a = HashMap::from([("a", 1), ("b", 2)]);
        let b = HashMap::from([("b", 2), ("c", 3)]);
        assert!(keys_equal(&a, &a));
        assert_eq!(keys_equal(&a, &b), keys_equal(&b, &a));
    }

    #[test]
    fn keys_equal_allows_distinct_value_types() {
        let a: HashMap<&str, u32> = HashMap::from([("a", 1)]);
        let b: HashMap<&str, String> = HashMap::from([("a", "one".to_string())]);
        assert!(keys_equal(&a, &b));
    }

    #[test]
    fn empty_maps_are_equal() {
        let a: HashMap<String, u32> = HashMap::new();
        let b: HashMap<String, u32> = HashMap::new();
        assert!(keys_equal(&a, &b));
    }
}
