//! Scenario tests for the FeatureExtractor

#[cfg(test)]
mod tests {
    use crate::{
        FeatureExtractor, Subcomputation, DEFAULT_AVG_SENTENCE_LENGTH, DEFAULT_EMOTION_RATIO,
        DEFAULT_POLARITY, DEFAULT_SUBJECTIVITY,
    };
    use std::sync::Arc;
    use verity_domain::{Feature, Lexicons, FEATURE_COUNT};
    use verity_text::{MockAnalyzer, PatternAnalyzer};

    fn extractor() -> FeatureExtractor<PatternAnalyzer> {
        FeatureExtractor::new(Arc::new(Lexicons::standard()), PatternAnalyzer::new())
    }

    fn mock_extractor(mock: MockAnalyzer) -> FeatureExtractor<MockAnalyzer> {
        FeatureExtractor::new(Arc::new(Lexicons::standard()), mock)
    }

    #[test]
    fn test_empty_text_is_all_zeros() {
        let mock = MockAnalyzer::new(0.9, 0.9);
        let extractor = mock_extractor(mock.clone());

        let extracted = extractor.extract("", "Some headline!");

        assert_eq!(extracted.vector.len(), FEATURE_COUNT);
        assert!(extracted.vector.is_zero());
        assert!(extracted.degraded.is_empty());
        assert_eq!(mock.call_count(), 0, "analyzer must not be called for empty text");
    }

    #[test]
    fn test_breaking_headline_example() {
        let extracted = extractor().extract("BREAKING: Scientists PROVE shocking truth!!", "");
        let v = &extracted.vector;

        // "breaking:" keeps its colon, so only "shocking" matches
        assert_eq!(v.get(Feature::SensationalRatioBody), 0.2);
        assert_eq!(v.get(Feature::CapitalWordRatioBody), 0.4);
        assert_eq!(v.get(Feature::BodyExclamations), 2.0);
        assert_eq!(v.get(Feature::BodyQuestions), 0.0);

        // Single sentence, so the title proxy is the whole text
        assert_eq!(extracted.title, "BREAKING: Scientists PROVE shocking truth!!");
        assert_eq!(v.get(Feature::HeadlineExclamations), 2.0);
        assert_eq!(v.get(Feature::AvgSentenceLength), 5.0);
    }

    #[test]
    fn test_title_proxy_is_first_sentence() {
        let extracted = extractor().extract_body("First sentence. Second sentence.");
        assert_eq!(extracted.title, "First sentence.");
        assert_eq!(extracted.vector.get(Feature::AvgSentenceLength), 2.0);
    }

    #[test]
    fn test_whitespace_title_uses_proxy() {
        let extracted = extractor().extract("Calm day. Nothing happened.", "   ");
        assert_eq!(extracted.title, "Calm day.");
    }

    #[test]
    fn test_given_title_is_used() {
        let extracted = extractor().extract("The vote passed.", "Is this REAL?!");
        let v = &extracted.vector;

        assert_eq!(extracted.title, "Is this REAL?!");
        assert_eq!(v.get(Feature::HeadlineExclamations), 1.0);
        assert_eq!(v.get(Feature::HeadlineQuestions), 1.0);
        assert!((v.get(Feature::CapitalWordRatioTitle) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(v.get(Feature::BodyExclamations), 0.0);
    }

    #[test]
    fn test_sentence_failure_uses_fallbacks() {
        let mock = MockAnalyzer::new(0.2, 0.4).with_failing_sentences();
        let text = "a".repeat(150);
        let extracted = mock_extractor(mock).extract_body(&text);

        assert_eq!(extracted.degraded, vec![Subcomputation::Sentences]);
        assert_eq!(extracted.title, "a".repeat(100));
        assert_eq!(
            extracted.vector.get(Feature::AvgSentenceLength),
            DEFAULT_AVG_SENTENCE_LENGTH
        );
        assert_eq!(extracted.vector.get(Feature::Polarity), 0.2);
    }

    #[test]
    fn test_sentiment_failure_uses_defaults() {
        let mock = MockAnalyzer::new(0.9, 0.9).with_failing_sentiment();
        let extracted = mock_extractor(mock).extract_body("Officials confirmed the report.");
        let v = &extracted.vector;

        assert_eq!(
            extracted.degraded,
            vec![Subcomputation::Polarity, Subcomputation::Subjectivity]
        );
        assert_eq!(v.get(Feature::EmotionRatio), DEFAULT_EMOTION_RATIO);
        assert_eq!(v.get(Feature::Subjectivity), DEFAULT_SUBJECTIVITY);
        assert_eq!(v.get(Feature::Polarity), DEFAULT_POLARITY);
        assert_eq!(v.get(Feature::AvgSentenceLength), 4.0);
    }

    #[test]
    fn test_all_failures_never_panic() {
        let extracted = mock_extractor(MockAnalyzer::failing()).extract_body("Anything at all?");
        assert_eq!(extracted.degraded.len(), 3);
        assert_eq!(extracted.title, "Anything at all?");
        assert_eq!(extracted.vector.get(Feature::BodyQuestions), 1.0);
    }

    #[test]
    fn test_out_of_range_sentiment_is_clamped() {
        let extracted = mock_extractor(MockAnalyzer::new(3.0, -2.0)).extract_body("Text.");
        let v = &extracted.vector;

        assert_eq!(v.get(Feature::Polarity), 1.0);
        assert_eq!(v.get(Feature::EmotionRatio), 1.0);
        assert_eq!(v.get(Feature::Subjectivity), 0.0);
        assert!(extracted.degraded.is_empty());
    }

    #[test]
    fn test_non_finite_sentiment_is_degraded() {
        let mock = MockAnalyzer::new(f64::NAN, f64::INFINITY);
        let extracted = mock_extractor(mock).extract_body("Text.");
        let v = &extracted.vector;

        assert_eq!(
            extracted.degraded,
            vec![Subcomputation::Polarity, Subcomputation::Subjectivity]
        );
        assert_eq!(v.get(Feature::EmotionRatio), DEFAULT_EMOTION_RATIO);
        assert_eq!(v.get(Feature::Subjectivity), DEFAULT_SUBJECTIVITY);
    }

    #[test]
    fn test_sentences_are_split_once() {
        let mock = MockAnalyzer::new(0.0, 0.0);
        mock_extractor(mock.clone()).extract_body("One. Two. Three.");
        // sentences + polarity + subjectivity
        assert_eq!(mock.call_count(), 3);
    }

    #[test]
    fn test_whitespace_only_text() {
        let extracted = mock_extractor(MockAnalyzer::new(0.0, 0.0)).extract_body("   ");
        let v = &extracted.vector;

        assert_eq!(extracted.title, "   ");
        assert_eq!(v.get(Feature::AvgSentenceLength), 0.0);
        assert_eq!(v.get(Feature::CertaintyRatio), 0.0);
        assert_eq!(v.get(Feature::EmotionRatio), 0.5);
    }

    #[test]
    fn test_lexicon_ratios() {
        let extracted = extractor().extract_body("We reported data to them");
        let v = &extracted.vector;

        assert_eq!(v.get(Feature::PronounRatio), 0.4);
        assert_eq!(v.get(Feature::ObjectiveRatio), 0.4);
        assert_eq!(v.get(Feature::HedgingRatio), 0.2);
        assert_eq!(v.get(Feature::CertaintyRatio), 0.0);
    }

    #[test]
    fn test_multi_word_entries_never_match() {
        let extracted = extractor().extract_body("It is without doubt said to be true");
        assert_eq!(extracted.vector.get(Feature::CertaintyRatio), 0.0);
        assert_eq!(extracted.vector.get(Feature::HedgingRatio), 0.0);
    }

    #[test]
    fn test_matching_is_case_insensitive_but_punctuation_sensitive() {
        let extracted = extractor().extract_body("SHOCKING shocking shocking!");
        assert!((extracted.vector.get(Feature::SensationalRatioBody) - 2.0 / 3.0).abs() < 1e-12);
        assert!((extracted.vector.get(Feature::NegEmotionRatio) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_title_ratio_uses_title_words() {
        let extracted = extractor().extract("The budget was approved.", "Shocking secret exposed");
        assert_eq!(extracted.vector.get(Feature::SensationalRatioTitle), 1.0);
        assert_eq!(extracted.vector.get(Feature::SensationalRatioBody), 0.0);
    }

    #[test]
    fn test_shared_lexicons() {
        let lexicons = Arc::new(Lexicons::standard());
        let a = FeatureExtractor::new(lexicons.clone(), PatternAnalyzer::new());
        let b = FeatureExtractor::new(lexicons.clone(), MockAnalyzer::default());
        assert_eq!(Arc::strong_count(&lexicons), 3);
        assert_eq!(a.lexicons().pronoun, b.lexicons().pronoun);
    }
}

#[cfg(test)]
mod proptests {
    use crate::FeatureExtractor;
    use proptest::prelude::*;
    use std::sync::Arc;
    use verity_domain::{Feature, Lexicons, FEATURE_COUNT};
    use verity_text::{MockAnalyzer, PatternAnalyzer};

    fn words() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                "[a-zA-Z]{1,10}",
                Just("shocking".to_string()),
                Just("BREAKING:".to_string()),
                Just("we".to_string()),
                Just("reported".to_string()),
                Just("never!".to_string()),
                Just("maybe?".to_string()),
                Just("wonderful".to_string()),
                Just("Dr.".to_string()),
            ],
            0..40,
        )
        .prop_map(|w| w.join(" "))
    }

    proptest! {
        /// Property: ratio features are always in [0, 1]
        #[test]
        fn test_ratios_bounded(text in words(), title in words()) {
            let extractor = FeatureExtractor::new(Arc::new(Lexicons::standard()), PatternAnalyzer::new());
            let v = extractor.extract(&text, &title).vector;
            prop_assert_eq!(v.len(), FEATURE_COUNT);
            for feature in Feature::ALL.into_iter().filter(|f| f.is_ratio()) {
                let x = v.get(feature);
                prop_assert!((0.0..=1.0).contains(&x), "{} = {}", feature, x);
            }
        }

        /// Property: sentiment features stay in range, even when the analyzer
        /// returns garbage or fails
        #[test]
        fn test_sentiment_bounded(
            text in words(),
            polarity in prop::num::f64::ANY,
            subjectivity in prop::num::f64::ANY,
            fail in any::<bool>(),
        ) {
            let mut mock = MockAnalyzer::new(polarity, subjectivity);
            if fail {
                mock = mock.with_failing_sentiment();
            }
            let extractor = FeatureExtractor::new(Arc::new(Lexicons::standard()), mock);
            let v = extractor.extract_body(&text).vector;
            prop_assert!((0.0..=1.0).contains(&v.get(Feature::EmotionRatio)));
            prop_assert!((-1.0..=1.0).contains(&v.get(Feature::Polarity)));
            prop_assert!((0.0..=1.0).contains(&v.get(Feature::Subjectivity)));
        }

        /// Property: extraction is deterministic
        #[test]
        fn test_idempotent(text in words(), title in words()) {
            let extractor = FeatureExtractor::new(Arc::new(Lexicons::standard()), PatternAnalyzer::new());
            let first = extractor.extract(&text, &title);
            let second = extractor.extract(&text, &title);
            prop_assert_eq!(first, second);
        }

        /// Property: punctuation counts equal literal character counts
        #[test]
        fn test_punctuation_counts(text in "[a-z !?.]{1,80}", title in "[a-z !?]{1,40}") {
            let extractor = FeatureExtractor::new(Arc::new(Lexicons::standard()), PatternAnalyzer::new());
            let extracted = extractor.extract(&text, &title);
            let v = &extracted.vector;
            prop_assert_eq!(v.get(Feature::BodyExclamations), text.matches('!').count() as f64);
            prop_assert_eq!(v.get(Feature::BodyQuestions), text.matches('?').count() as f64);
            prop_assert_eq!(
                v.get(Feature::HeadlineExclamations),
                extracted.title.matches('!').count() as f64
            );
            prop_assert_eq!(
                v.get(Feature::HeadlineQuestions),
                extracted.title.matches('?').count() as f64
            );
        }
    }
}
