#[cfg(test)]
mod tests {
    use diag_stats::models::{AgeGroup, Gender};
    use diag_stats::truncate_label;

    #[test]
    fn test_gender_from_str() {
        assert_eq!(Gender::from("M"), Gender::Male);
        assert_eq!(Gender::from("m"), Gender::Male);
        assert_eq!(Gender::from(" male "), Gender::Male);
        assert_eq!(Gender::from("1"), Gender::Male);
        assert_eq!(Gender::from("F"), Gender::Female);
        assert_eq!(Gender::from("female"), Gender::Female);
        assert_eq!(Gender::from("2"), Gender::Female);
        assert_eq!(Gender::from("x"), Gender::Unknown);
        assert_eq!(Gender::from(""), Gender::Unknown);
    }

    #[test]
    fn test_age_group_boundaries() {
        // Bins are [lower, upper): a boundary age belongs to the upper bin
        assert_eq!(AgeGroup::from_age(11), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(12), AgeGroup::Teen);
        assert_eq!(AgeGroup::from_age(18), AgeGroup::Teen);
        assert_eq!(AgeGroup::from_age(19), AgeGroup::YoungAdult);
        assert_eq!(AgeGroup::from_age(38), AgeGroup::YoungAdult);
        assert_eq!(AgeGroup::from_age(39), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(58), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(59), AgeGroup::Senior);
        assert_eq!(AgeGroup::from_age(99), AgeGroup::Senior);
        assert_eq!(AgeGroup::from_age(0), AgeGroup::Child);
    }

    #[test]
    fn test_age_group_overflow_bucket() {
        assert_eq!(AgeGroup::from_age(100), AgeGroup::Unknown);
        assert_eq!(AgeGroup::from_age(150), AgeGroup::Unknown);
        assert_eq!(AgeGroup::from_age(-1), AgeGroup::Unknown);
    }

    #[test]
    fn test_age_group_categorical_order() {
        assert_eq!(
            AgeGroup::ALL,
            [
                AgeGroup::Child,
                AgeGroup::Teen,
                AgeGroup::YoungAdult,
                AgeGroup::Adult,
                AgeGroup::Senior,
                AgeGroup::Unknown,
            ]
        );
        assert!(AgeGroup::Child < AgeGroup::Teen);
        assert!(AgeGroup::Senior < AgeGroup::Unknown);
    }

    #[test]
    fn test_labels_serialize_as_display_strings() {
        assert_eq!(
            serde_json::to_value(AgeGroup::YoungAdult).unwrap(),
            serde_json::json!("Young Adult")
        );
        assert_eq!(
            serde_json::to_value(Gender::Male).unwrap(),
            serde_json::json!("M")
        );
        assert_eq!(
            serde_json::to_value(Gender::Female).unwrap(),
            serde_json::json!("F")
        );
        assert_eq!(AgeGroup::YoungAdult.label(), "Young Adult");
        assert_eq!(Gender::Female.to_string(), "F");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Asthma"), "Asthma");
        // exactly 20 characters stays untouched
        assert_eq!(truncate_label("12345678901234567890"), "12345678901234567890");
        assert_eq!(
            truncate_label("Chronic obstructive pulmonary disease"),
            "Chronic obstructi..."
        );
        assert_eq!(truncate_label("123456789012345678901"), "12345678901234567...");
    }
}
