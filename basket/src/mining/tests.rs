use std::collections::HashSet;

use super::*;
use ndarray::Array2;

fn grocery() -> Vec<Vec<&'static str>> {
    vec![
        vec!["milk", "bread"],
        vec!["milk", "bread", "eggs"],
        vec!["bread", "eggs"],
        vec!["milk", "eggs"],
        vec!["milk", "bread", "eggs", "cereal"],
    ]
}

fn find_rule<'a>(rules: &'a [Rule], antecedent: &[&str], consequent: &[&str]) -> Option<&'a Rule> {
    rules
        .iter()
        .find(|rule| rule.antecedent == antecedent && rule.consequent == consequent)
}

#[test]
fn test_itemset_canonical() {
    let itemset = Itemset::new(vec![7, 2, 5, 2]);
    assert_eq!(itemset.items(), &[2, 5, 7]); // sorted, deduped
    assert_eq!(itemset, Itemset::new(vec![5, 7, 2]));
    assert_eq!(itemset.prefix(), &[2, 5]);
    assert_eq!(itemset.last(), Some(7));
    assert_eq!(itemset.without(1).items(), &[2, 7]);
    assert_eq!(itemset.extended(9).items(), &[2, 5, 7, 9]);
    assert_eq!(itemset.difference(&Itemset::singleton(5)).items(), &[2, 7]);
}

#[test]
fn test_tidset_intersection() {
    let a: TidSet = [0, 1, 2, 3, 4].into_iter().collect();
    let b: TidSet = [1, 3, 5].into_iter().collect();

    let both = a.intersection(&b);
    assert_eq!(both.len(), 2);
    assert!(both.contains(1) && both.contains(3));
    assert_eq!(b.intersection(&a), both);

    let mut c = a.clone();
    c.intersect_with(&b);
    assert_eq!(c, both);
}

#[test]
fn test_encode_vertical() {
    let db = encode(&grocery()).unwrap();

    assert_eq!(db.num_transactions(), 5);
    let vocabulary = db.vocabulary();
    assert_eq!(vocabulary.len(), 4);

    // Ids follow lexicographic order.
    let names: Vec<&str> = (0..4).map(|id| vocabulary.name(id)).collect();
    assert_eq!(names, vec!["bread", "cereal", "eggs", "milk"]);

    let milk = vocabulary.id("milk").unwrap();
    let tids: HashSet<u32> = db.tidset(milk).iter().collect();
    assert_eq!(tids, HashSet::from([0, 1, 3, 4]));
    assert_eq!(db.tidset(vocabulary.id("cereal").unwrap()).len(), 1);
}

#[test]
fn test_encode_accepts_sets() {
    let transactions = vec![
        HashSet::from(["milk".to_string(), "bread".to_string()]),
        HashSet::from(["bread".to_string(), "eggs".to_string()]),
    ];
    let db = encode(&transactions).unwrap();
    assert_eq!(db.vocabulary().len(), 3);
    assert_eq!(db.tidset(db.vocabulary().id("bread").unwrap()).len(), 2);
}

#[test]
fn test_encode_empty_input() {
    let empty: Vec<Vec<&str>> = Vec::new();
    assert_eq!(encode(&empty).unwrap_err(), MiningError::EmptyInput);
}

#[test]
fn test_encode_matrix() {
    let matrix = Array2::from_shape_vec(
        (4, 3),
        vec![
            1, 1, 0, // Transaction 0: a, b
            1, 1, 1, // Transaction 1: a, b, c
            1, 0, 1, // Transaction 2: a, c
            0, 1, 1, // Transaction 3: b, c
        ],
    )
    .unwrap();

    let db = encode_matrix(matrix.view(), &["a", "b", "c"]).unwrap();
    assert_eq!(db.num_transactions(), 4);
    for (_, tids) in db.items() {
        assert_eq!(tids.len(), 3);
    }

    let err = encode_matrix(matrix.view(), &["a", "b"]).unwrap_err();
    assert_eq!(err, MiningError::LabelMismatch { labels: 2, columns: 3 });
}

#[test]
fn test_dense_matrix_mining() {
    let matrix = Array2::from_shape_vec(
        (4, 3),
        vec![
            1, 1, 0, //
            1, 1, 1, //
            1, 0, 1, //
            0, 1, 1, //
        ],
    )
    .unwrap();
    let db = encode_matrix(matrix.view(), &["milk", "bread", "eggs"]).unwrap();

    let frequent = Algorithm::Eclat.mine(&db, 0.5).unwrap();
    let named = frequent.named();
    assert_eq!(named.len(), 6);
    assert_eq!(named[0], (vec!["bread".to_string()], 3));
    assert_eq!(named[3], (vec!["bread".to_string(), "eggs".to_string()], 2));
    assert!(frequent.same_itemsets(&Algorithm::Apriori.mine(&db, 0.5).unwrap()));

    let empty = Array2::<i32>::zeros((0, 3));
    assert_eq!(
        encode_matrix(empty.view(), &["milk", "bread", "eggs"]).unwrap_err(),
        MiningError::EmptyInput
    );
}

#[test]
fn test_combination_generation() {
    let mut seen = Vec::new();
    combinations::for_each_combination(&[5, 7, 9], 2, |combo| seen.push(combo.to_vec()));
    assert_eq!(seen, vec![vec![5, 7], vec![5, 9], vec![7, 9]]);

    let mut count = 0;
    combinations::for_each_combination(&[1, 2, 3, 4], 3, |_| count += 1);
    assert_eq!(count, 4);

    combinations::for_each_combination(&[1, 2], 3, |_| panic!("k larger than input"));
    combinations::for_each_combination(&[1, 2], 0, |_| panic!("k of zero"));
}

#[test]
fn test_apriori_gen_join_and_prune() {
    // a=0, b=1, c=2, d=3
    let level: HashSet<Itemset> = [vec![0, 1], vec![0, 2], vec![1, 2], vec![1, 3]]
        .into_iter()
        .map(Itemset::new)
        .collect();

    let candidates = apriori_gen(&level).unwrap();

    // {a,b,c}: every 2-subset is frequent. {b,c,d}: {c,d} is not, so pruned.
    assert_eq!(candidates, vec![Itemset::new(vec![0, 1, 2])]);
}

#[test]
fn test_apriori_gen_singletons_join_all_pairs() {
    let level: HashSet<Itemset> = (0..4).map(Itemset::singleton).collect();
    let candidates = apriori_gen(&level).unwrap();
    assert_eq!(candidates.len(), 6);
    assert!(candidates.iter().all(|c| c.len() == 2));
}

#[test]
fn test_apriori_gen_empty_and_malformed() {
    assert!(apriori_gen(&HashSet::new()).unwrap().is_empty());

    let mixed: HashSet<Itemset> = [vec![0], vec![1, 2]].into_iter().map(Itemset::new).collect();
    assert!(matches!(
        apriori_gen(&mixed),
        Err(MiningError::MalformedItemset { .. })
    ));
}

#[test]
fn test_engines_on_grocery_baskets() {
    let db = encode(&grocery()).unwrap();

    for algorithm in [Algorithm::Apriori, Algorithm::Eclat] {
        let frequent = algorithm.mine(&db, 0.4).unwrap();

        assert_eq!(frequent.len(), 7, "{algorithm}");
        assert_eq!(frequent.support_count_of(&["bread", "milk"]), Some(3));
        assert_eq!(frequent.support_count_of(&["milk", "bread"]), Some(3));
        assert_eq!(frequent.support_count_of(&["bread", "eggs", "milk"]), Some(2));
        assert_eq!(frequent.support_count_of(&["cereal"]), None);
        assert_eq!(frequent.max_itemset_size(), 3);
    }
}

#[test]
fn test_engines_agree() {
    let db = encode(&grocery()).unwrap();
    for min_support in [0.2, 0.4, 0.6, 0.8, 1.0] {
        let apriori = apriori_algorithm(&db, min_support).unwrap();
        let eclat = eclat_algorithm(&db, min_support).unwrap();
        assert!(apriori.same_itemsets(&eclat), "min_support={min_support}");
    }
}

#[test]
fn test_threshold_equal_to_count_is_kept() {
    let transactions = vec![vec!["a", "b"], vec!["a", "c"]];
    let db = encode(&transactions).unwrap();

    // 0.5 * 2 = 1.0: items seen once stay frequent.
    let frequent = apriori_algorithm(&db, 0.5).unwrap();
    assert_eq!(frequent.support_count_of(&["b"]), Some(1));
    assert_eq!(frequent.support_count_of(&["a", "c"]), Some(1));
    assert!(frequent.same_itemsets(&eclat_algorithm(&db, 0.5).unwrap()));
}

#[test]
fn test_threshold_exact_ratio_is_kept() {
    // 0.07 * 100 rounds to 7.000000000000001 as a float product.
    let transactions: Vec<Vec<&str>> = (0..100)
        .map(|idx| if idx < 7 { vec!["a", "b"] } else { vec!["c", "d"] })
        .collect();
    let db = encode(&transactions).unwrap();

    for algorithm in [Algorithm::Apriori, Algorithm::Eclat] {
        let frequent = algorithm.mine(&db, 0.07).unwrap();
        assert_eq!(frequent.support_count_of(&["a"]), Some(7), "{algorithm}");
        assert_eq!(frequent.support_count_of(&["a", "b"]), Some(7), "{algorithm}");
    }

    let threshold = SupportThreshold::new(0.07, 100);
    assert!(threshold.admits(7));
    assert!(!threshold.admits(6));
    assert!(SupportThreshold::new(0.14, 50).admits(7));
    assert!(SupportThreshold::new(0.28, 25).admits(7));
    assert!(!SupportThreshold::new(0.28, 25).admits(6));
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_transaction_id_range() {
    assert_eq!(vertical::transaction_id(0), Ok(0));
    assert_eq!(vertical::transaction_id(u32::MAX as usize), Ok(u32::MAX));
    assert_eq!(
        vertical::transaction_id(u32::MAX as usize + 1),
        Err(MiningError::TooManyTransactions {
            count: u32::MAX as usize + 2
        })
    );
}

#[test]
fn test_frequent_levels() {
    let db = encode(&grocery()).unwrap();
    let frequent = eclat_algorithm(&db, 0.4).unwrap();

    let levels = frequent.levels();
    assert_eq!(levels.len(), 3);
    assert_eq!(levels[0].itemset_size, 1);
    assert_eq!(levels[0].len(), 3);
    assert_eq!(levels[1].len(), 3);
    assert_eq!(levels[2].len(), 1);
    assert!(levels[1].iter_itemsets().all(|itemset| itemset.len() == 2));
}

#[test]
fn test_closure_of_frequent_itemsets() {
    let db = encode(&grocery()).unwrap();
    let frequent = apriori_algorithm(&db, 0.2).unwrap();

    for (itemset, _) in frequent.iter() {
        for idx in 0..itemset.len() {
            if itemset.len() > 1 {
                assert!(frequent.contains(&itemset.without(idx)));
            }
        }
    }
}

#[test]
fn test_eclat_child_class_only_extends_forward() {
    let db = encode(&grocery()).unwrap();
    let threshold = db.threshold(0.4);
    let root = eclat::EquivalenceClass::root(&db, threshold);
    assert_eq!(root.len(), 3);

    let child = root.child(1, threshold);
    let root_item = root.members()[1].0;
    assert!(child.members().iter().all(|(item, _)| *item > root_item));
    assert!(root.child(root.len() - 1, threshold).is_empty());
}

#[test]
fn test_rule_generation() {
    let db = encode(&grocery()).unwrap();
    let frequent = apriori_algorithm(&db, 0.4).unwrap();
    let rules = generate_rules(&frequent, 0.5);

    // Six pair rules at 0.75, three singleton-antecedent triple rules at 0.5,
    // three pair-antecedent triple rules at 2/3.
    assert_eq!(rules.len(), 12);

    let rule = find_rule(&rules, &["milk"], &["bread"]).unwrap();
    assert!((rule.confidence - 0.75).abs() < 1e-12);
    assert!((rule.support - 0.6).abs() < 1e-12);
    assert!((rule.lift - 0.75 / 0.8).abs() < 1e-12);

    let rule = find_rule(&rules, &["bread", "milk"], &["eggs"]).unwrap();
    assert!((rule.confidence - 2.0 / 3.0).abs() < 1e-12);

    assert_eq!(generate_rules(&frequent, 0.7).len(), 6);
    assert!(generate_rules(&frequent, 1.0).is_empty());
}

#[test]
fn test_single_transaction_rules() {
    let transactions = vec![vec!["bread", "milk"]];
    let (rules, record) = mine_eclat(&transactions, 1.0, 0.5).unwrap();

    assert_eq!(rules.len(), 2);
    for rule in &rules {
        assert_eq!(rule.confidence, 1.0);
        assert_eq!(rule.lift, 1.0);
        assert_eq!(rule.support, 1.0);
    }
    assert_eq!(record.frequent_itemset_count, 3);
}

#[test]
fn test_lift_zero_when_consequent_missing() {
    let db = encode(&[vec!["a", "b"]]).unwrap();
    let mut frequent = FrequentItemsets::new(&db);
    frequent.insert(Itemset::singleton(0), 1);
    frequent.insert(Itemset::new(vec![0, 1]), 1);

    // b -> a is skipped: its antecedent is absent.
    let rules = generate_rules(&frequent, 0.1);
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].antecedent, vec!["a"]);
    assert_eq!(rules[0].lift, 0.0);
}

#[test]
fn test_rank_rules() {
    let rule = |confidence: f64, lift: f64| Rule {
        antecedent: vec!["a".into()],
        consequent: vec!["b".into()],
        support: 0.5,
        confidence,
        lift,
    };
    let mut rules = vec![rule(0.5, 2.0), rule(0.9, 1.0), rule(0.9, 1.5)];
    rank_rules(&mut rules);

    assert_eq!(rules[0].lift, 1.5);
    assert_eq!(rules[1].lift, 1.0);
    assert_eq!(rules[2].confidence, 0.5);
}

#[test]
fn test_recommendations() {
    let (rules, _) = mine_apriori(&grocery(), 0.4, 0.5).unwrap();
    let recommendations = recommend(&rules, "  Milk ");

    let products: Vec<&str> = recommendations.iter().map(|r| r.product.as_str()).collect();
    assert_eq!(products, vec!["bread", "eggs"]);
    assert!(recommendations
        .iter()
        .all(|r| (r.confidence - 0.75).abs() < 1e-12 && r.strength == Strength::Strong));

    assert!(recommend(&rules, "cereal").is_empty());
    assert!(recommend(&rules, "   ").is_empty());
}

#[test]
fn test_strength_bands() {
    assert_eq!(Strength::from_confidence(0.7), Strength::Strong);
    assert_eq!(Strength::from_confidence(0.69), Strength::Moderate);
    assert_eq!(Strength::from_confidence(0.5), Strength::Moderate);
    assert_eq!(Strength::from_confidence(0.2), Strength::Weak);
}

#[test]
fn test_mining_config() {
    let config = MiningConfig::default();
    assert_eq!(config, MiningConfig::new(0.2, 0.5));
    assert!(config.validate().is_ok());
    assert!(MiningConfig::new(1.0, 1.0).validate().is_ok());

    let err = config.with_min_support(0.0).validate().unwrap_err();
    assert_eq!(
        err,
        MiningError::InvalidThreshold {
            name: "min_support",
            value: 0.0
        }
    );
    assert!(config.with_min_confidence(1.5).validate().is_err());
    assert!(config.with_min_support(f64::NAN).validate().is_err());
}

#[test]
fn test_harness_empty_input() {
    let empty: Vec<Vec<String>> = Vec::new();
    assert_eq!(mine_apriori(&empty, 0.2, 0.5).unwrap_err(), MiningError::EmptyInput);
    assert_eq!(mine_eclat(&empty, 0.2, 0.5).unwrap_err(), MiningError::EmptyInput);
    assert!(compare(&empty, 0.2, 0.5).is_err());
}

#[test]
fn test_parse_vm_rss() {
    let status = "Name:\tbasket\nVmPeak:\t  20480 kB\nVmRSS:\t    1000 kB\nThreads:\t1\n";
    assert_eq!(memory::parse_vm_rss(status), Some(1000 * 1024));

    assert_eq!(memory::parse_vm_rss("Name:\tbasket\n"), None);
    assert_eq!(memory::parse_vm_rss("VmRSS:\t   abc kB\n"), None);
    assert_eq!(memory::parse_vm_rss("VmRSS:\t   12 MB\n"), None);
}

#[test]
#[cfg(target_os = "linux")]
fn test_resident_set_is_readable() {
    let bytes = memory::resident_set_bytes().unwrap();
    assert!(bytes > 0);
    assert_eq!(bytes % 1024, 0);
}

#[test]
fn test_compare_records() {
    let comparison = compare(&grocery(), 0.4, 0.5).unwrap();
    assert!(comparison.agree());
    assert_eq!(comparison.apriori.rules, comparison.eclat.rules);

    let (apriori, eclat) = comparison.records();
    assert_eq!(apriori.algorithm, Algorithm::Apriori);
    assert_eq!(eclat.algorithm, Algorithm::Eclat);
    assert_eq!(apriori.rule_count, 12);
    assert_eq!(eclat.rule_count, 12);
    assert_eq!(apriori.min_support, 0.4);
    assert_eq!(eclat.min_confidence, 0.5);
    assert!(apriori.elapsed_ms >= 0.0 && eclat.elapsed_ms >= 0.0);
    assert!(apriori.memory_delta_mb.is_finite());

    let row = apriori.to_string();
    assert!(row.starts_with("Apriori"));
    assert!(row.contains("rules=12"));
    assert!(matches!(comparison.faster(), Algorithm::Apriori | Algorithm::Eclat));
}

#[test]
fn test_run_order_independent() {
    let config = MiningConfig::new(0.4, 0.5);
    let eclat_first = run(Algorithm::Eclat, &grocery(), &config).unwrap();
    let apriori_second = run(Algorithm::Apriori, &grocery(), &config).unwrap();
    assert!(eclat_first.frequent.same_itemsets(&apriori_second.frequent));
    assert_eq!(eclat_first.rules, apriori_second.rules);
}
