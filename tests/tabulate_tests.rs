use pretty_assertions::assert_eq;
use social_media_survey::dataset::{generate_records, Field, Record, SurveyConfig};
use social_media_survey::report::format_probability;
use social_media_survey::tabulate::{tabulate, tabulate_grouped};
use social_media_survey::utils::error::{ConfigError, TabulateError};

/// 100 records with the platform counts of the reference survey
fn reference_records() -> Vec<Record> {
    let counts = [
        ("Instagram", 35),
        ("TikTok", 30),
        ("Facebook", 15),
        ("Twitter", 8),
        ("Snapchat", 7),
        ("YouTube", 5),
    ];

    let mut records = Vec::new();
    for (platform, count) in counts {
        for _ in 0..count {
            let n = records.len() as u64 + 1;
            let gender = if n % 2 == 0 { "Male" } else { "Female" };
            records.push(Record::new(n, "18-20", gender, platform, "1-2 hours"));
        }
    }
    records
}

#[test]
fn test_reference_probabilities() {
    let records = reference_records();
    let table = tabulate(&records, Field::Platform).unwrap();

    assert_eq!(table.total(), 100);
    assert_eq!(table.probability("Instagram"), 0.35);
    assert_eq!(table.most_frequent().unwrap().label, "Instagram");
    assert_eq!(
        format_probability(table.most_frequent().unwrap(), table.total()),
        "P(Instagram) = 35/100 = 0.350"
    );

    let labels: Vec<&str> = table.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Instagram", "TikTok", "Facebook", "Twitter", "Snapchat", "YouTube"]
    );
}

#[test]
fn test_counts_sum_to_length_for_every_field() {
    let config = SurveyConfig::default().with_sample_size(250).with_seed(Some(7));
    let records = generate_records(&config).unwrap();

    for field in Field::ALL {
        let table = tabulate(&records, field).unwrap();
        let sum: u64 = table.iter().map(|e| e.count).sum();
        assert_eq!(sum, records.len() as u64, "field {}", field);
    }
}

#[test]
fn test_probabilities_sum_to_one() {
    for seed in [1, 2, 3, 123] {
        let config = SurveyConfig::default().with_seed(Some(seed));
        let records = generate_records(&config).unwrap();

        for field in Field::ALL {
            let table = tabulate(&records, field).unwrap();
            let sum: f64 = table.iter().map(|e| table.probability(&e.label)).sum();
            assert!((sum - 1.0).abs() < 1e-9, "seed {} field {}: {}", seed, field, sum);
        }
    }
}

#[test]
fn test_grouped_proportions_sum_to_one_per_group() {
    let config = SurveyConfig::default().with_sample_size(300).with_seed(Some(11));
    let records = generate_records(&config).unwrap();

    let grouped = tabulate_grouped(&records, Field::Gender, Field::Platform).unwrap();
    let group_total: u64 = grouped.iter().map(|g| g.table.total()).sum();
    assert_eq!(group_total, 300);

    for group in grouped.iter() {
        let sum: f64 = group.table.proportions().iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-9, "group {}: {}", group.group, sum);
    }
}

#[test]
fn test_same_seed_same_tables() {
    let config = SurveyConfig::default().with_seed(Some(2024));

    let first = generate_records(&config).unwrap();
    let second = generate_records(&config).unwrap();

    for field in Field::ALL {
        assert_eq!(
            tabulate(&first, field).unwrap(),
            tabulate(&second, field).unwrap()
        );
    }
    assert_eq!(
        tabulate_grouped(&first, Field::Gender, Field::Platform).unwrap(),
        tabulate_grouped(&second, Field::Gender, Field::Platform).unwrap()
    );
}

#[test]
fn test_zero_records_is_validation_error() {
    let config = SurveyConfig::default().with_sample_size(0);
    assert!(matches!(generate_records(&config), Err(ConfigError::EmptySample)));

    assert_eq!(tabulate(&[], Field::Platform), Err(TabulateError::EmptyInput));
}

#[test]
fn test_single_record() {
    let records = vec![Record::new(1, "24+", "Female", "Snapchat", ">4 hours")];
    let table = tabulate(&records, Field::Platform).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.probability("Snapchat"), 1.0);
}
