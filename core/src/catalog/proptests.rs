use super::*;
use proptest::prelude::*;
use tempfile::TempDir;

/// Names that survive `AppName` trimming unchanged.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,15}"
}

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        name_strategy().prop_map(Op::Add),
        any::<usize>().prop_map(Op::Remove),
    ]
}

proptest! {
    /// After any sequence of adds and removes, reloading the persisted file
    /// reproduces the in-memory sequence.
    #[test]
    fn prop_mutations_round_trip(ops in proptest::collection::vec(op_strategy(), 1..24)) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("apps.json");
        let mut store = CatalogStore::load(&path).unwrap();

        for op in ops {
            match op {
                Op::Add(name) => {
                    let name = AppName::try_from(name).unwrap();
                    store.add(name, "/bin/true").unwrap();
                }
                Op::Remove(seed) => {
                    if !store.is_empty() {
                        store.remove(seed % store.len()).unwrap();
                    }
                }
            }
        }

        let reloaded = CatalogStore::load(&path).unwrap();
        let persisted: Vec<_> = reloaded
            .entries()
            .iter()
            .map(|e| (e.name.clone(), e.path.clone()))
            .collect();
        let in_memory: Vec<_> = store
            .entries()
            .iter()
            .map(|e| (e.name.clone(), e.path.clone()))
            .collect();
        prop_assert_eq!(persisted, in_memory);
    }

    /// Removal never reorders the surviving entries.
    #[test]
    fn prop_remove_preserves_relative_order(
        names in proptest::collection::vec(name_strategy(), 2..10),
        seed in any::<usize>(),
    ) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("apps.json");
        let mut store = CatalogStore::load(&path).unwrap();
        for name in &names {
            store.add(AppName::try_from(name.clone()).unwrap(), "/bin/true").unwrap();
        }

        let index = seed % store.len();
        store.remove(index).unwrap();

        let mut expected: Vec<_> = names.iter().map(|n| n.trim().to_string()).collect();
        expected.remove(index);
        let actual: Vec<_> = store.entries().iter().map(|e| e.name.to_string()).collect();
        prop_assert_eq!(actual, expected);
    }
}
