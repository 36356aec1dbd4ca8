#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::path::Path;
    use std::sync::Arc;

    use arrow::array::{Int64Array, StringArray};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    use diag_stats::models::{AgeGroup, Gender};
    use diag_stats::schema::patient_schema;
    use diag_stats::{load_dataset, DatasetConfig, DatasetError, DatasetLoader, SourceFormat};

    fn write_csv(path: &Path, contents: &str) {
        std::fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_source_format_detection() {
        assert_eq!(
            SourceFormat::detect(Path::new("df_sample.csv")).unwrap(),
            SourceFormat::Csv
        );
        assert_eq!(
            SourceFormat::detect(Path::new("data/patients.PARQUET")).unwrap(),
            SourceFormat::Parquet
        );
        assert!(matches!(
            SourceFormat::detect(Path::new("patients.txt")),
            Err(DatasetError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            SourceFormat::detect(Path::new("patients")),
            Err(DatasetError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_load_csv_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.csv");
        write_csv(
            &path,
            "AGE,SEX,label_text\n5,M,Asthma\n15,F,Asthma\n70,F,Diabetes\n",
        );

        let dataset = load_dataset(&DatasetConfig::new(&path)).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.skipped_rows(), 0);

        let first = &dataset.records()[0];
        assert_eq!(first.age, 5);
        assert_eq!(first.sex, Gender::Male);
        assert_eq!(first.diagnosis, "Asthma");
        assert_eq!(first.age_group, AgeGroup::Child);
        assert_eq!(dataset.records()[2].age_group, AgeGroup::Senior);
    }

    #[test]
    fn test_malformed_rows_are_skipped_and_counted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.csv");
        // one non-numeric age, one unrecognized sex code, one empty label
        write_csv(
            &path,
            "AGE,SEX,label_text\n\
             5,M,Asthma\n\
             abc,F,Asthma\n\
             30,X,Diabetes\n\
             40,F,\n\
             65,F,Diabetes\n",
        );

        let dataset = load_dataset(&DatasetConfig::new(&path)).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.skipped_rows(), 3);
        assert_eq!(dataset.records()[0].diagnosis, "Asthma");
        assert_eq!(dataset.records()[1].diagnosis, "Diabetes");
    }

    #[test]
    fn test_missing_required_column_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.csv");
        write_csv(&path, "AGE,label_text\n5,Asthma\n");

        let err = load_dataset(&DatasetConfig::new(&path)).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn { column: "SEX" }));
    }

    #[test]
    fn test_missing_file_is_data_unavailable() {
        let err = load_dataset(&DatasetConfig::new("no/such/file.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::DataUnavailable { .. }));
    }

    #[test]
    fn test_age_group_column_is_ignored_and_recomputed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.csv");
        // the precomputed groups are wrong on purpose
        write_csv(
            &path,
            "AGE,SEX,label_text,Age Group\n5,M,Asthma,Senior\n70,F,Diabetes,Child\n",
        );

        let dataset = load_dataset(&DatasetConfig::new(&path)).unwrap();
        assert_eq!(dataset.records()[0].age_group, AgeGroup::Child);
        assert_eq!(dataset.records()[1].age_group, AgeGroup::Senior);
    }

    #[test]
    fn test_load_parquet_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.parquet");

        let schema = patient_schema();
        let batch = RecordBatch::try_new(
            Arc::clone(&schema),
            vec![
                Arc::new(Int64Array::from(vec![5i64, 30, 70])),
                Arc::new(StringArray::from(vec!["M", "F", "F"])),
                Arc::new(StringArray::from(vec!["Asthma", "Diabetes", "Asthma"])),
                // stale precomputed groups, ignored by the loader
                Arc::new(StringArray::from(vec![
                    Some("Senior"),
                    None,
                    Some("Child"),
                ])),
            ],
        )
        .unwrap();

        let file = File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let dataset = load_dataset(&DatasetConfig::new(&path)).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].age_group, AgeGroup::Child);
        assert_eq!(dataset.records()[1].age_group, AgeGroup::YoungAdult);
        assert_eq!(dataset.records()[2].age_group, AgeGroup::Senior);
    }

    #[test]
    fn test_loader_caches_single_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.csv");
        write_csv(&path, "AGE,SEX,label_text\n5,M,Asthma\n");

        let loader = DatasetLoader::new(DatasetConfig::new(&path));
        assert!(!loader.is_loaded());

        let first = loader.load().unwrap();
        assert!(loader.is_loaded());
        let second = loader.load().unwrap();
        // same Arc, no second read
        assert!(Arc::ptr_eq(&first, &second));

        loader.invalidate();
        assert!(!loader.is_loaded());
        let third = loader.load().unwrap();
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(*first, *third);
    }

    #[test]
    fn test_repeated_loads_are_structurally_equal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.csv");
        write_csv(
            &path,
            "AGE,SEX,label_text\n5,M,Asthma\n15,F,Asthma\n70,F,Diabetes\n",
        );

        let first = load_dataset(&DatasetConfig::new(&path)).unwrap();
        let second = load_dataset(&DatasetConfig::new(&path)).unwrap();
        assert_eq!(first, second);
    }
}
